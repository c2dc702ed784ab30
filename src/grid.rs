use error_chain::bail;
use smallvec::SmallVec;
use std::slice;

use crate::cells::{CompassPrimary, CoordinateSmallVec, GridCoordinate, Tile};
use crate::errors::*;
use crate::units::{ColumnIndex, Height, RowIndex, Width};

pub type IndexSmallVec = SmallVec<[usize; 4]>;

/// A rectangular grid of tiles stored in row major order.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn new(width: Width, height: Height) -> Result<Grid> {
        let (Width(w), Height(h)) = (width, height);
        if w < 1 || h < 1 {
            bail!(ErrorKind::InvalidDimension(w, h));
        }

        let (w, h) = (w as usize, h as usize);
        let tiles = (0..w * h)
            .map(|index| Tile::new(index_to_grid_coordinate(w, index)))
            .collect();

        Ok(Grid {
            width: w,
            height: h,
            tiles,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    /// All tiles, row major.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn tile(&self, coord: GridCoordinate) -> Option<&Tile> {
        self.coordinate_to_index(coord).map(|index| &self.tiles[index])
    }

    pub fn tile_at(&self, column: ColumnIndex, row: RowIndex) -> Option<&Tile> {
        let (ColumnIndex(x), RowIndex(y)) = (column, row);
        self.tile(GridCoordinate::new(x as isize, y as isize))
    }

    /// Panics if `index` is not below `size()`.
    #[inline]
    pub fn tile_at_index(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }

    /// The tiles of each row, north most row first.
    pub fn rows(&self) -> slice::Chunks<'_, Tile> {
        self.tiles.chunks(self.width)
    }

    pub fn first_row(&self) -> &[Tile] {
        &self.tiles[..self.width]
    }

    pub fn last_row(&self) -> &[Tile] {
        &self.tiles[self.tiles.len() - self.width..]
    }

    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            row_length: self.width,
            cells_count: self.size(),
        }
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < self.width &&
        (coord.y as usize) < self.height
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_coordinate(&self, index: usize) -> GridCoordinate {
        index_to_grid_coordinate(self.width, index)
    }

    /// Tiles North, South, West and East of `coord` (in that order) that lie within the grid.
    ///
    /// Negative coordinates are a caller error. Coordinates beyond the far edges are accepted
    /// and simply have fewer neighbours.
    pub fn neighbours(&self, coord: GridCoordinate) -> Result<CoordinateSmallVec> {
        if coord.x < 0 || coord.y < 0 {
            bail!(ErrorKind::InvalidCoordinate(coord.x, coord.y));
        }

        Ok(CompassPrimary::LOOKUP_ORDER
            .iter()
            .map(|dir| coord.offset(*dir))
            .filter(|adjacent_coord| self.is_valid_coordinate(*adjacent_coord))
            .collect())
    }

    /// Same as `neighbours` but in terms of row major indices, for a known valid index.
    pub(crate) fn neighbour_indices(&self, index: usize) -> IndexSmallVec {
        let coord = self.index_to_coordinate(index);
        CompassPrimary::LOOKUP_ORDER
            .iter()
            .filter_map(|dir| self.coordinate_to_index(coord.offset(*dir)))
            .collect()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        let neighbour_coord = coord.offset(direction);
        if self.is_valid_coordinate(neighbour_coord) {
            Some(neighbour_coord)
        } else {
            None
        }
    }

    /// Does the tile at `coord` have an opening towards `direction`?
    /// Includes openings through the outer boundary.
    pub fn is_open(&self, coord: GridCoordinate, direction: CompassPrimary) -> bool {
        self.tile(coord).map_or(false, |tile| tile.is_open(direction))
    }

    /// Is there a passage from `coord` into the grid neighbour at `direction`?
    pub fn is_neighbour_linked(&self, coord: GridCoordinate, direction: CompassPrimary) -> bool {
        self.neighbour_at_direction(coord, direction)
            .map_or(false, |_| self.is_open(coord, direction))
    }

    /// Connect two adjacent tiles, opening the facing side of each.
    pub fn connect(&mut self, a: GridCoordinate, b: GridCoordinate) -> Result<()> {
        let a_index = self.coordinate_to_index(a)
            .ok_or_else(|| ErrorKind::InvalidCoordinate(a.x, a.y))?;
        let b_index = self.coordinate_to_index(b)
            .ok_or_else(|| ErrorKind::InvalidCoordinate(b.x, b.y))?;
        let direction = a.direction_to(b)
            .ok_or_else(|| ErrorKind::NotAdjacent((a.x, a.y), (b.x, b.y)))?;

        self.tiles[a_index].open(direction);
        self.tiles[b_index].open(direction.opposite());
        Ok(())
    }

    pub(crate) fn connect_indices(&mut self, a: usize, b: usize) -> Result<()> {
        let (a_coord, b_coord) = (self.index_to_coordinate(a), self.index_to_coordinate(b));
        self.connect(a_coord, b_coord)
    }

    /// Open a side of a border tile that faces out of the grid.
    pub(crate) fn open_boundary(&mut self,
                                coord: GridCoordinate,
                                direction: CompassPrimary)
                                -> Result<()> {
        let index = self.coordinate_to_index(coord)
            .ok_or_else(|| ErrorKind::InvalidCoordinate(coord.x, coord.y))?;
        let outside = coord.offset(direction);
        if self.is_valid_coordinate(outside) {
            bail!(ErrorKind::NotAdjacent((coord.x, coord.y), (outside.x, outside.y)));
        }

        self.tiles[index].open(direction);
        Ok(())
    }

    #[inline]
    pub(crate) fn is_visited_index(&self, index: usize) -> bool {
        self.tiles[index].is_visited()
    }

    #[inline]
    pub(crate) fn mark_visited_index(&mut self, index: usize) {
        self.tiles[index].mark_visited();
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    row_length: usize,
    cells_count: usize,
}
impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = index_to_grid_coordinate(self.row_length, self.current_cell_number);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
impl ExactSizeIterator for CellIter {} // default impl using size_hint()

impl<'a> IntoIterator for &'a Grid {
    type Item = GridCoordinate;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn index_to_grid_coordinate(row_length: usize, one_dimensional_index: usize) -> GridCoordinate {
    let y = one_dimensional_index / row_length;
    let x = one_dimensional_index - (y * row_length);
    GridCoordinate {
        x: x as isize,
        y: y as isize,
    }
}
