//! Registry of every tile in the maze.
//!
//! Tiles append themselves once, from [`Tile::initialize`](crate::components::tile::Tile::initialize).
//! The registry keeps insertion order and indexes tiles by grid cell.

use bevy_ecs::prelude::{Entity, Resource};
use glam::IVec2;
use rustc_hash::FxHashMap;

use crate::components::tile::TileError;

#[derive(Resource, Debug, Clone, Default)]
pub struct TileList {
    tiles: Vec<Entity>,
    by_position: FxHashMap<IVec2, Entity>,
}

impl TileList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tile at `position`. A cell can only hold one tile.
    pub fn register_tile(&mut self, tile: Entity, position: IVec2) -> Result<(), TileError> {
        if let Some(existing) = self.by_position.get(&position) {
            return Err(TileError::CellOccupied {
                position,
                existing: *existing,
            });
        }
        self.by_position.insert(position, tile);
        self.tiles.push(tile);
        Ok(())
    }

    /// All tiles, in registration order.
    pub fn tiles(&self) -> &[Entity] {
        &self.tiles
    }

    pub fn get(&self, position: IVec2) -> Option<Entity> {
        self.by_position.get(&position).copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn test_register_keeps_order_and_index() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut list = TileList::new();

        list.register_tile(a, IVec2::new(0, 0)).unwrap();
        list.register_tile(b, IVec2::new(1, 0)).unwrap();

        assert_eq!(list.tiles(), &[a, b]);
        assert_eq!(list.get(IVec2::new(1, 0)), Some(b));
        assert_eq!(list.get(IVec2::new(5, 5)), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_register_rejects_occupied_cell() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut list = TileList::new();

        list.register_tile(a, IVec2::new(2, 3)).unwrap();
        let err = list.register_tile(b, IVec2::new(2, 3)).unwrap_err();
        assert_eq!(
            err,
            TileError::CellOccupied {
                position: IVec2::new(2, 3),
                existing: a
            }
        );
        assert_eq!(list.len(), 1);
    }
}
