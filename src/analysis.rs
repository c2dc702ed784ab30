//! Read only measurements of a carved grid: its passages, dead ends and whether it forms a
//! perfect maze.

use petgraph::algo;
use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::grid::Grid;

pub type ConnectivityGraph = Graph<GridCoordinate, (), Undirected, u32>;

/// Every tile to tile passage, once each, as (west or north tile, east or south tile).
pub fn links(grid: &Grid) -> Vec<(GridCoordinate, GridCoordinate)> {
    let mut passages = Vec::with_capacity(grid.size());
    for coord in grid.iter() {
        for &dir in &[CompassPrimary::South, CompassPrimary::East] {
            if grid.is_neighbour_linked(coord, dir) {
                passages.push((coord, coord.offset(dir)));
            }
        }
    }
    passages
}

/// Openings that lead out of the grid rather than into a neighbouring tile, row major.
pub fn boundary_openings(grid: &Grid) -> Vec<(GridCoordinate, CompassPrimary)> {
    grid.tiles()
        .iter()
        .flat_map(|tile| {
            let coord = tile.coordinate();
            tile.openings()
                .directions()
                .into_iter()
                .filter(move |dir| grid.neighbour_at_direction(coord, *dir).is_none())
                .map(move |dir| (coord, dir))
        })
        .collect()
}

/// Number of tiles with exactly one passage to another tile. Entry and exit openings do not
/// count as passages.
pub fn dead_ends(grid: &Grid) -> usize {
    grid.iter()
        .filter(|coord| {
            CompassPrimary::LOOKUP_ORDER
                .iter()
                .filter(|dir| grid.is_neighbour_linked(*coord, **dir))
                .count() == 1
        })
        .count()
}

/// The passages of the grid as an undirected graph, one node per tile in row major order.
pub fn connectivity_graph(grid: &Grid) -> ConnectivityGraph {
    let passages = links(grid);
    let mut graph = ConnectivityGraph::with_capacity(grid.size(), passages.len());
    for coord in grid.iter() {
        let _ = graph.add_node(coord);
    }
    for (a, b) in passages {
        if let (Some(a_index), Some(b_index)) = (grid.coordinate_to_index(a),
                                                 grid.coordinate_to_index(b)) {
            let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
        }
    }
    graph
}

/// Is the grid a perfect maze: exactly one route between any two tiles?
///
/// A connected graph of n nodes and n - 1 edges is a tree.
pub fn is_perfect(grid: &Grid) -> bool {
    let graph = connectivity_graph(grid);
    graph.edge_count() == grid.size() - 1 && algo::connected_components(&graph) == 1
}
