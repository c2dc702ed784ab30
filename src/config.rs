use log::debug;
use serde_derive::{Deserialize, Serialize};

use crate::entry_exit::EntryExitPolicy;
use crate::errors::*;
use crate::generators::Algorithm;
use crate::maze::Maze;
use crate::units::{Height, Width};

/// Everything needed to produce one maze. Missing fields fall back to the defaults: a 12x12
/// maze named "A_Maze", Growing-Tree 90/30, corner entry and exit, random seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub width: isize,
    pub height: isize,
    pub name: String,
    pub algorithm: Algorithm,
    pub entry_exit: EntryExitPolicy,
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            width: 12,
            height: 12,
            name: String::from("A_Maze"),
            algorithm: Algorithm::default(),
            entry_exit: EntryExitPolicy::default(),
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Build and generate the described maze.
    pub fn build(&self) -> Result<Maze> {
        debug!("building maze from {:?}", self);
        let (width, height) = (Width(self.width), Height(self.height));
        let mut maze = match self.seed {
            Some(seed) => Maze::with_seed(width, height, &self.name, seed)?,
            None => Maze::new(width, height, &self.name)?,
        };
        maze.set_entry_exit_policy(self.entry_exit);
        maze.generate(self.algorithm)?;
        Ok(maze)
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::analysis;
    use crate::generators::GrowingTreeWeights;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: MazeConfig = serde_json::from_str(r#"{"name": "Sparse"}"#).unwrap();
        assert_eq!(config,
                   MazeConfig {
                       name: String::from("Sparse"),
                       ..MazeConfig::default()
                   });
        assert_eq!(config.algorithm,
                   Algorithm::GrowingTree(GrowingTreeWeights {
                       weight_first: 90,
                       weight_last: 30,
                   }));
    }

    #[test]
    fn full_config() {
        let json = r#"{
            "width": 8,
            "height": 5,
            "name": "ColorMaze",
            "algorithm": {"growing_tree": {"weight_first": 80, "weight_last": 70}},
            "entry_exit": "random",
            "seed": 12
        }"#;
        let config: MazeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.algorithm,
                   Algorithm::GrowingTree(GrowingTreeWeights {
                       weight_first: 80,
                       weight_last: 70,
                   }));
        assert_eq!(config.entry_exit, EntryExitPolicy::Random);

        let maze = config.build().unwrap();
        assert!(maze.is_done());
        assert_eq!((maze.width(), maze.height()), (8, 5));
        assert_eq!(maze.name(), "ColorMaze");
        assert!(analysis::is_perfect(maze.tiles()));

        // Same seed, same maze
        let again = config.build().unwrap();
        assert_eq!(maze.tiles().tiles(), again.tiles().tiles());
    }

    #[test]
    fn prim_by_name() {
        let config: MazeConfig =
            serde_json::from_str(r#"{"algorithm": "prim", "width": 3, "height": 3}"#).unwrap();
        assert_eq!(config.algorithm, Algorithm::Prim);
        let maze = config.build().unwrap();
        assert_eq!(analysis::links(maze.tiles()).len(), 8);
    }

    #[test]
    fn invalid_config_is_reported() {
        let bad_size = MazeConfig {
            width: 0,
            ..MazeConfig::default()
        };
        match bad_size.build() {
            Err(Error(ErrorKind::InvalidDimension(0, 12), _)) => (),
            other => panic!("expected InvalidDimension, got {:?}", other),
        }

        let bad_weights: MazeConfig = serde_json::from_str(
            r#"{"algorithm": {"growing_tree": {"weight_first": 10, "weight_last": 50}}}"#)
            .unwrap();
        match bad_weights.build() {
            Err(Error(ErrorKind::InvalidWeight(10, 50), _)) => (),
            other => panic!("expected InvalidWeight, got {:?}", other),
        }
    }
}
