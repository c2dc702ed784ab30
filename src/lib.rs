//! **perfect_mazes** generates perfect mazes (exactly one route between any two tiles) on a
//! rectangular grid and renders them to images.
//!
//! ```no_run
//! use perfect_mazes::maze::Maze;
//! use perfect_mazes::renderers;
//! use perfect_mazes::units::{Height, Width};
//!
//! # fn main() -> perfect_mazes::errors::Result<()> {
//! let mut maze = Maze::new(Width(12), Height(12), "A_Maze")?;
//! maze.generate_growing_tree(90, 30)?;
//! let image = renderers::render(&maze, &renderers::RenderOptions::default())?;
//! renderers::save_image(&maze, &image, None)?;
//! # Ok(())
//! # }
//! ```

// error_chain! expands deeply
#![recursion_limit = "1024"]

pub mod analysis;
pub mod cells;
pub mod config;
pub mod entry_exit;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod maze;
pub mod renderers;
pub mod units;
