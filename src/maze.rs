use error_chain::bail;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::fmt;

use crate::cells::GridCoordinate;
use crate::entry_exit::{self, EntryExitPolicy};
use crate::errors::*;
use crate::generators::{self, Algorithm, GrowingTreeWeights};
use crate::grid::Grid;
use crate::units::{Height, Width};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MazeState {
    /// Nothing carved yet.
    Empty,
    /// Carved, with entry and exit. Terminal.
    Done,
}

/// A named maze over a grid of tiles, carved exactly once by one of the generators.
///
/// The random source is owned by the maze so that a maze built from a known seed (or any
/// other deterministic `Rng`) always comes out the same.
pub struct Maze<R: Rng = XorShiftRng> {
    grid: Grid,
    state: MazeState,
    name: String,
    entry_exit_policy: EntryExitPolicy,
    entry_exit: Option<(GridCoordinate, GridCoordinate)>,
    rng: R,
}

impl Maze<XorShiftRng> {
    /// An empty maze with a freshly seeded random source.
    pub fn new(width: Width, height: Height, name: &str) -> Result<Maze> {
        Maze::with_seed(width, height, name, rand::random())
    }

    pub fn with_seed(width: Width, height: Height, name: &str, seed: u64) -> Result<Maze> {
        Maze::with_rng(width, height, name, XorShiftRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Maze<R> {
    pub fn with_rng(width: Width, height: Height, name: &str, rng: R) -> Result<Maze<R>> {
        let grid = Grid::new(width, height)?;
        Ok(Maze {
            grid,
            state: MazeState::Empty,
            name: name.to_owned(),
            entry_exit_policy: EntryExitPolicy::default(),
            entry_exit: None,
            rng,
        })
    }

    /// Choose how the entry and exit get placed. Only has an effect before generation.
    pub fn set_entry_exit_policy(&mut self, policy: EntryExitPolicy) {
        self.entry_exit_policy = policy;
    }

    pub fn entry_exit_policy(&self) -> EntryExitPolicy {
        self.entry_exit_policy
    }

    /// Carve the maze with the modified Prim's algorithm. Easy to solve, but slower than
    /// `generate_growing_tree`.
    pub fn generate_prim(&mut self) -> Result<()> {
        self.generate(Algorithm::Prim)
    }

    /// Carve the maze with the Growing-Tree algorithm. Both weights are within 0..=100 and
    /// `weight_last` may not exceed `weight_first`; see `GrowingTreeWeights`.
    pub fn generate_growing_tree(&mut self, weight_first: u32, weight_last: u32) -> Result<()> {
        self.generate(Algorithm::GrowingTree(GrowingTreeWeights {
            weight_first,
            weight_last,
        }))
    }

    pub fn generate(&mut self, algorithm: Algorithm) -> Result<()> {
        if self.state == MazeState::Done {
            bail!(ErrorKind::AlreadyGenerated(self.name.clone()));
        }

        match algorithm {
            Algorithm::Prim => generators::prim(&mut self.grid, &mut self.rng)?,
            Algorithm::GrowingTree(weights) => {
                generators::growing_tree(&mut self.grid, weights, &mut self.rng)?
            }
        }

        let entry_exit =
            entry_exit::place_entry_exit(&mut self.grid, self.entry_exit_policy, &mut self.rng)?;
        self.entry_exit = Some(entry_exit);
        self.state = MazeState::Done;
        debug!("maze '{}' done", self.name);
        Ok(())
    }

    /// Read only view of the tiles, the input for any renderer.
    #[inline]
    pub fn tiles(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn state(&self) -> MazeState {
        self.state
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.state == MazeState::Done
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The tile opened to the north, once generated.
    pub fn entry(&self) -> Option<GridCoordinate> {
        self.entry_exit.map(|(entry, _)| entry)
    }

    /// The tile opened to the south, once generated.
    pub fn exit(&self) -> Option<GridCoordinate> {
        self.entry_exit.map(|(_, exit)| exit)
    }
}

impl<R: Rng> fmt::Debug for Maze<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Maze :: name: {:?}, width: {}, height: {}, state: {:?}",
               self.name,
               self.width(),
               self.height(),
               self.state)
    }
}

impl<R: Rng> fmt::Display for Maze<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
