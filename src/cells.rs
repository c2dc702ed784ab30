use bitflags::bitflags;
use smallvec::SmallVec;
use std::fmt;

#[derive(Hash, Eq, PartialEq, Debug, Copy, Clone, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: isize,
    pub y: isize,
}
impl GridCoordinate {
    pub fn new(x: isize, y: isize) -> GridCoordinate {
        GridCoordinate { x, y }
    }

    /// The coordinate one tile away in the given direction, which may lie outside any grid.
    pub fn offset(&self, dir: CompassPrimary) -> GridCoordinate {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::North => GridCoordinate { y: y - 1, ..*self },
            CompassPrimary::South => GridCoordinate { y: y + 1, ..*self },
            CompassPrimary::East => GridCoordinate { x: x + 1, ..*self },
            CompassPrimary::West => GridCoordinate { x: x - 1, ..*self },
        }
    }

    /// Direction to travel from `self` to reach the adjacent `other`.
    /// None if the two coordinates are not exactly one step apart on one axis.
    pub fn direction_to(&self, other: GridCoordinate) -> Option<CompassPrimary> {
        match (other.x - self.x, other.y - self.y) {
            (0, -1) => Some(CompassPrimary::North),
            (0, 1) => Some(CompassPrimary::South),
            (1, 0) => Some(CompassPrimary::East),
            (-1, 0) => Some(CompassPrimary::West),
            _ => None,
        }
    }
}

impl From<(isize, isize)> for GridCoordinate {
    fn from(x_y_pair: (isize, isize)) -> GridCoordinate {
        GridCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    /// Neighbour lookup order. Generators depend on it only for reproducibility.
    pub const LOOKUP_ORDER: [CompassPrimary; 4] = [CompassPrimary::North,
                                                   CompassPrimary::South,
                                                   CompassPrimary::West,
                                                   CompassPrimary::East];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    pub fn as_opening(self) -> Openings {
        match self {
            CompassPrimary::North => Openings::NORTH,
            CompassPrimary::South => Openings::SOUTH,
            CompassPrimary::East => Openings::EAST,
            CompassPrimary::West => Openings::WEST,
        }
    }
}

bitflags! {
    /// The compass sides of a tile through which there is a passage.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Openings: u8 {
        const NORTH = 0b0001;
        const SOUTH = 0b0010;
        const EAST  = 0b0100;
        const WEST  = 0b1000;
    }
}

impl Openings {
    pub fn has(&self, dir: CompassPrimary) -> bool {
        self.contains(dir.as_opening())
    }

    pub fn directions(&self) -> SmallVec<[CompassPrimary; 4]> {
        CompassPrimary::LOOKUP_ORDER
            .iter()
            .cloned()
            .filter(|dir| self.has(*dir))
            .collect()
    }
}

/// One cell of a maze grid.
///
/// Tiles are plain values owned by their `Grid`; the coordinates never change after the
/// grid is built and the openings only ever grow.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Tile {
    coord: GridCoordinate,
    visited: bool,
    openings: Openings,
}

impl Tile {
    pub(crate) fn new(coord: GridCoordinate) -> Tile {
        Tile {
            coord,
            visited: false,
            openings: Openings::empty(),
        }
    }

    #[inline]
    pub fn coordinate(&self) -> GridCoordinate {
        self.coord
    }

    #[inline]
    pub fn x(&self) -> isize {
        self.coord.x
    }

    #[inline]
    pub fn y(&self) -> isize {
        self.coord.y
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    #[inline]
    pub fn openings(&self) -> Openings {
        self.openings
    }

    #[inline]
    pub fn is_open(&self, dir: CompassPrimary) -> bool {
        self.openings.has(dir)
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }

    pub(crate) fn open(&mut self, dir: CompassPrimary) {
        self.openings.insert(dir.as_opening());
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mark = |dir, c| if self.is_open(dir) { c } else { '.' };
        write!(f,
               "({}, {}) {}{}{}{}",
               self.coord.x,
               self.coord.y,
               mark(CompassPrimary::North, 'N'),
               mark(CompassPrimary::South, 'S'),
               mark(CompassPrimary::East, 'E'),
               mark(CompassPrimary::West, 'W'))
    }
}
