use bit_set::BitSet;
use error_chain::bail;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_derive::{Deserialize, Serialize};

use crate::errors::*;
use crate::grid::{Grid, IndexSmallVec};
use crate::units::MAX_WEIGHT;

/// The spanning tree algorithm used to carve a maze.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Prim,
    GrowingTree(GrowingTreeWeights),
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::GrowingTree(GrowingTreeWeights::default())
    }
}

/// Selection weights of the Growing-Tree algorithm, each within 0..=100.
///
/// On every step a value `r` is drawn uniformly from [0, 100):
/// `r <= weight_last` picks the newest tile of the choice list,
/// `weight_last < r < weight_first` picks a random tile and anything else picks the oldest.
///
/// - `0 / 0` always picks the oldest tile: long corridors, easy to solve.
/// - `100 / 0` always picks at random: the character of Prim's algorithm, only faster.
/// - `100 / 100` always picks the newest tile: a recursive backtracker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowingTreeWeights {
    pub weight_first: u32,
    pub weight_last: u32,
}

impl Default for GrowingTreeWeights {
    fn default() -> Self {
        GrowingTreeWeights {
            weight_first: 90,
            weight_last: 30,
        }
    }
}

impl GrowingTreeWeights {
    pub fn new(weight_first: u32, weight_last: u32) -> Result<GrowingTreeWeights> {
        let weights = GrowingTreeWeights {
            weight_first,
            weight_last,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<()> {
        if self.weight_first > MAX_WEIGHT || self.weight_last > MAX_WEIGHT ||
           self.weight_last > self.weight_first {
            bail!(ErrorKind::InvalidWeight(self.weight_first, self.weight_last));
        }
        Ok(())
    }

    /// Position in a choice list of `len` (> 0) entries to grow the maze from.
    fn select<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> usize {
        let r = rng.gen::<f64>() * f64::from(MAX_WEIGHT);
        if r <= f64::from(self.weight_last) {
            len - 1
        } else if r < f64::from(self.weight_first) {
            rng.gen_range(0..len)
        } else {
            0
        }
    }
}

/// Apply the modified Prim's algorithm to an unvisited grid.
///
/// Starting from a random tile, every unvisited tile bordering the carved region is kept in a
/// frontier. Each step takes a uniformly random frontier tile and connects it to one of its
/// already visited neighbours, also chosen at random. The result is easy to solve, with many
/// long straight corridors.
pub fn prim<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<()> {
    let start = rng.gen_range(0..grid.size());
    grid.mark_visited_index(start);
    debug!("prim: {}x{} grid starting at {:?}",
           grid.width(),
           grid.height(),
           grid.index_to_coordinate(start));

    let mut in_frontier = BitSet::with_capacity(grid.size());
    let mut frontier: Vec<usize> = Vec::with_capacity(grid.size());
    for neighbour in grid.neighbour_indices(start) {
        in_frontier.insert(neighbour);
        frontier.push(neighbour);
    }

    let mut max_frontier_len = frontier.len();
    while !frontier.is_empty() {
        frontier.shuffle(rng);
        let next = match frontier.pop() {
            Some(index) => index,
            None => break,
        };
        in_frontier.remove(next);
        grid.mark_visited_index(next);

        let (visited, unvisited): (IndexSmallVec, IndexSmallVec) = grid.neighbour_indices(next)
            .into_iter()
            .partition(|&neighbour| grid.is_visited_index(neighbour));

        for neighbour in unvisited {
            // BitSet::insert is false when already present, so the frontier never repeats a tile
            if in_frontier.insert(neighbour) {
                frontier.push(neighbour);
            }
        }
        max_frontier_len = max_frontier_len.max(frontier.len());

        let link = choose_link(grid, next, &visited, rng)?;
        grid.connect_indices(next, link)?;
    }

    debug!("prim: finished, largest frontier {}", max_frontier_len);
    Ok(())
}

/// One of the visited neighbours of a frontier tile to connect it to.
fn choose_link<R: Rng + ?Sized>(grid: &Grid,
                                frontier_tile: usize,
                                visited: &[usize],
                                rng: &mut R)
                                -> Result<usize> {
    match visited.len() {
        0 => {
            let coord = grid.index_to_coordinate(frontier_tile);
            bail!("frontier tile ({}, {}) has no visited neighbour", coord.x, coord.y)
        }
        1 => Ok(visited[0]),
        n => Ok(visited[rng.gen_range(0..n)]),
    }
}

/// Apply the Growing-Tree algorithm to an unvisited grid.
///
/// A choice list starts with one random tile. Each step picks a tile from the list according
/// to `weights`; if it still has unvisited neighbours one of them is carved into and appended
/// to the list, otherwise the tile is exhausted and dropped from the list.
pub fn growing_tree<R: Rng + ?Sized>(grid: &mut Grid,
                                     weights: GrowingTreeWeights,
                                     rng: &mut R)
                                     -> Result<()> {
    weights.validate()?;

    let start = rng.gen_range(0..grid.size());
    grid.mark_visited_index(start);
    debug!("growing tree: {}x{} grid starting at {:?} with weights {}/{}",
           grid.width(),
           grid.height(),
           grid.index_to_coordinate(start),
           weights.weight_first,
           weights.weight_last);

    let mut choices: Vec<usize> = Vec::with_capacity(grid.size());
    choices.push(start);

    let mut steps = 0usize;
    while !choices.is_empty() {
        steps += 1;
        let position = weights.select(choices.len(), rng);
        let current = choices[position];

        let unvisited: IndexSmallVec = grid.neighbour_indices(current)
            .into_iter()
            .filter(|&neighbour| !grid.is_visited_index(neighbour))
            .collect();

        if unvisited.is_empty() {
            trace!("growing tree: tile {} exhausted", current);
            choices.remove(position);
        } else {
            let next = unvisited[rng.gen_range(0..unvisited.len())];
            grid.mark_visited_index(next);
            choices.push(next);
            grid.connect_indices(current, next)?;
        }
    }

    debug!("growing tree: finished after {} steps", steps);
    Ok(())
}
