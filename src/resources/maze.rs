//! Maze definition input.
//!
//! The maze generator hands over a [`MazeDefinition`]: the tiles to spawn and
//! the values of the shared direction variables they reference. It is read
//! from JSON:
//!
//! ```json
//! {
//!   "variables": { "north": [0, 1], "east": [1, 0] },
//!   "tiles": [
//!     { "position": [0, 0], "directions": ["north"] },
//!     { "position": [0, 1], "directions": ["east"], "torch": true }
//!   ]
//! }
//! ```

use std::path::Path;

use glam::IVec2;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("failed to read maze file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse maze definition: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One cell produced by the maze generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeTile {
    pub position: IVec2,
    /// Keys of the shared direction variables for this cell.
    #[serde(default)]
    pub directions: Vec<String>,
    /// Whether a torch is mounted on this tile.
    #[serde(default)]
    pub torch: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MazeDefinition {
    /// Values for the direction variables, keyed by name.
    #[serde(default)]
    pub variables: FxHashMap<String, IVec2>,
    pub tiles: Vec<MazeTile>,
}

impl MazeDefinition {
    pub fn from_json_str(json: &str) -> Result<Self, MazeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// A small corridor with a torch at its end, used when no maze is given.
    pub fn corridor(length: i32) -> Self {
        let mut variables = FxHashMap::default();
        variables.insert("north".to_string(), IVec2::new(0, 1));
        variables.insert("south".to_string(), IVec2::new(0, -1));

        let tiles = (0..length.max(1))
            .map(|y| {
                let mut directions = Vec::new();
                if y + 1 < length {
                    directions.push("north".to_string());
                }
                if y > 0 {
                    directions.push("south".to_string());
                }
                MazeTile {
                    position: IVec2::new(0, y),
                    directions,
                    torch: y + 1 == length,
                }
            })
            .collect();

        Self { variables, tiles }
    }
}
