//! Maze tile component.
//!
//! A [`Tile`] is a grid cell that fades in and out through its
//! [`ActiveSwitch`](super::activeswitch::ActiveSwitch) and can carry one bound
//! interactable. The activation observer forwards every enable/disable it
//! applies to a tile on to the bound interactable, after starting the tile's
//! own fade (see [`crate::systems::activation`]).
//!
//! Direction markers are keys of shared vector variables in
//! [`WorldSignals`]. The tile only references them; it never owns or writes
//! their values.

use bevy_ecs::prelude::{Component, Entity};
use glam::IVec2;
use smallvec::SmallVec;
use thiserror::Error;

use crate::resources::maze::MazeTile;
use crate::resources::tilelist::TileList;
use crate::resources::worldsignals::WorldSignals;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TileError {
    #[error("tile at {0} was already initialized")]
    AlreadyInitialized(IVec2),
    #[error("grid cell {position} is already taken by {existing:?}")]
    CellOccupied { position: IVec2, existing: Entity },
}

#[derive(Component, Clone, Debug, Default)]
pub struct Tile {
    position: IVec2,
    directions: SmallVec<[String; 4]>,
    interactable: Option<Entity>,
    initialized: bool,
}

impl Tile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt position and directions from the maze and register in `tiles`.
    ///
    /// Can only succeed once per tile.
    pub fn initialize(
        &mut self,
        entity: Entity,
        maze_tile: &MazeTile,
        tiles: &mut TileList,
    ) -> Result<(), TileError> {
        if self.initialized {
            return Err(TileError::AlreadyInitialized(self.position));
        }
        tiles.register_tile(entity, maze_tile.position)?;
        self.position = maze_tile.position;
        self.directions = maze_tile.directions.iter().cloned().collect();
        self.initialized = true;
        Ok(())
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn directions(&self) -> &[String] {
        &self.directions
    }

    /// Current values of the direction variables, skipping unset ones.
    pub fn direction_vectors<'a>(
        &'a self,
        signals: &'a WorldSignals,
    ) -> impl Iterator<Item = IVec2> + 'a {
        self.directions
            .iter()
            .filter_map(|key| signals.get_vector(key))
    }

    pub fn register_interactable(&mut self, interactable: Entity) {
        self.interactable = Some(interactable);
    }

    pub fn interactable(&self) -> Option<Entity> {
        self.interactable
    }

    pub fn contains_interactable(&self) -> bool {
        self.interactable.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
