//! Global shared variables.
//!
//! The [`WorldSignals`] resource stores the grid vectors several behaviors
//! share by name: the player's grid position, the maze direction markers, and
//! the player and torch spawn cells.
//!
//! Each variable has a single writer. The player movement system is the only
//! writer of the player position variable; tiles only read direction
//! variables.

use bevy_ecs::prelude::Resource;
use glam::IVec2;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Integer grid vectors (positions, direction markers).
    pub vectors: FxHashMap<String, IVec2>,
}

impl WorldSignals {
    /// Set a grid vector variable.
    pub fn set_vector(&mut self, key: impl Into<String>, value: IVec2) {
        self.vectors.insert(key.into(), value);
    }
    /// Get a grid vector variable.
    pub fn get_vector(&self, key: &str) -> Option<IVec2> {
        self.vectors.get(key).copied()
    }
}
