use std::fmt;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::grid::Grid;

const WALL_L: &str = "╴";
const WALL_R: &str = "╶";
const WALL_U: &str = "╵";
const WALL_D: &str = "╷";
const WALL_LR: &str = "─";
const WALL_UD: &str = "│";
const WALL_LD: &str = "┐";
const WALL_RU: &str = "└";
const WALL_LU: &str = "┘";
const WALL_RD: &str = "┌";
const WALL_LRU: &str = "┴";
const WALL_LRD: &str = "┬";
const WALL_LRUD: &str = "┼";
const WALL_RUD: &str = "├";
const WALL_LUD: &str = "┤";

const WALL_LR_3: &str = "───";
const PASSAGE_LR_3: &str = "   ";
const BODY: &str = "   ";

impl fmt::Display for Grid {
    /// Text rendering with box drawing characters. Entry and exit show as gaps in the outer
    /// wall.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (columns_count, rows_count) = (self.width() as isize, self.height() as isize);
        let mut output = String::new();

        // Walk the lattice of wall corners; corner (cx, cy) is the north west corner of tile
        // (cx, cy). Each corner row is followed by the row of tile bodies beneath it.
        for cy in 0..=rows_count {
            for cx in 0..=columns_count {
                let left = cx > 0 && self.horizontal_wall(cx - 1, cy);
                let right = cx < columns_count && self.horizontal_wall(cx, cy);
                let up = cy > 0 && self.vertical_wall(cx, cy - 1);
                let down = cy < rows_count && self.vertical_wall(cx, cy);
                output.push_str(corner(left, right, up, down));

                if cx < columns_count {
                    output.push_str(if right { WALL_LR_3 } else { PASSAGE_LR_3 });
                }
            }
            output.push('\n');

            if cy < rows_count {
                for cx in 0..=columns_count {
                    output.push_str(if self.vertical_wall(cx, cy) { WALL_UD } else { " " });
                    if cx < columns_count {
                        output.push_str(BODY);
                    }
                }
                output.push('\n');
            }
        }

        write!(f, "{}", output)
    }
}

impl Grid {
    /// Is the wall segment along the north side of tile (x, y) standing? For y == height it
    /// is the south side of the last row.
    fn horizontal_wall(&self, x: isize, y: isize) -> bool {
        if y < self.height() as isize {
            !self.is_open(GridCoordinate::new(x, y), CompassPrimary::North)
        } else {
            !self.is_open(GridCoordinate::new(x, y - 1), CompassPrimary::South)
        }
    }

    /// Is the wall segment along the west side of tile (x, y) standing? For x == width it is
    /// the east side of the last column.
    fn vertical_wall(&self, x: isize, y: isize) -> bool {
        if x < self.width() as isize {
            !self.is_open(GridCoordinate::new(x, y), CompassPrimary::West)
        } else {
            !self.is_open(GridCoordinate::new(x - 1, y), CompassPrimary::East)
        }
    }
}

fn corner(left: bool, right: bool, up: bool, down: bool) -> &'static str {
    match (left, right, up, down) {
        (true, true, true, true) => WALL_LRUD,
        (true, true, true, false) => WALL_LRU,
        (true, true, false, true) => WALL_LRD,
        (true, false, true, true) => WALL_LUD,
        (false, true, true, true) => WALL_RUD,
        (true, true, false, false) => WALL_LR,
        (false, false, true, true) => WALL_UD,
        (false, true, true, false) => WALL_RU,
        (true, false, false, true) => WALL_LD,
        (true, false, true, false) => WALL_LU,
        (false, true, false, true) => WALL_RD,
        (true, false, false, false) => WALL_L,
        (false, true, false, false) => WALL_R,
        (false, false, true, false) => WALL_U,
        (false, false, false, true) => WALL_D,
        (false, false, false, false) => " ",
    }
}
