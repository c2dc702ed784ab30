use log::debug;
use rand::Rng;
use serde_derive::{Deserialize, Serialize};

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::errors::*;
use crate::grid::Grid;

/// Where the way into and out of a maze is opened.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryExitPolicy {
    /// Entry on the north side of the top left tile, exit on the south side of the bottom
    /// right tile.
    Corners,
    /// Entry on the north side of a random top row tile, exit on the south side of a random
    /// bottom row tile.
    Random,
}

impl Default for EntryExitPolicy {
    fn default() -> Self {
        EntryExitPolicy::Corners
    }
}

/// Open the entry and exit of a carved grid. Returns the (entry, exit) tiles.
///
/// Entry and exit are always different tiles, except on a single tile grid where the one
/// tile is both.
pub fn place_entry_exit<R: Rng + ?Sized>(grid: &mut Grid,
                                         policy: EntryExitPolicy,
                                         rng: &mut R)
                                         -> Result<(GridCoordinate, GridCoordinate)> {
    let last_row = grid.height() as isize - 1;
    let (entry_x, exit_x) = match policy {
        EntryExitPolicy::Corners => (0, grid.width() - 1),
        EntryExitPolicy::Random => {
            let width = grid.width();
            let entry_x = rng.gen_range(0..width);
            let exit_x = if grid.height() == 1 && width > 1 {
                // top and bottom row are the same row: skip over the entry column
                let x = rng.gen_range(0..width - 1);
                if x >= entry_x { x + 1 } else { x }
            } else {
                rng.gen_range(0..width)
            };
            (entry_x, exit_x)
        }
    };

    let entry = GridCoordinate::new(entry_x as isize, 0);
    let exit = GridCoordinate::new(exit_x as isize, last_row);
    grid.open_boundary(entry, CompassPrimary::North)?;
    grid.open_boundary(exit, CompassPrimary::South)?;

    debug!("entry at {:?}, exit at {:?} ({:?})", entry, exit, policy);
    Ok((entry, exit))
}
