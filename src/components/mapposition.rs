//! Continuous world-space position.
//!
//! [`MapPosition`] is the authoritative position of an entity. Grid-facing
//! state (see [`WorldSignals`](crate::resources::worldsignals::WorldSignals))
//! is derived from it, never the other way around.

use bevy_ecs::prelude::Component;
use glam::{IVec2, Vec2};

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    /// Nearest grid cell, rounding halves away from zero.
    pub fn to_grid(&self) -> IVec2 {
        self.pos.round().as_ivec2()
    }
}

impl From<Vec2> for MapPosition {
    fn from(pos: Vec2) -> Self {
        Self { pos }
    }
}

impl From<IVec2> for MapPosition {
    fn from(cell: IVec2) -> Self {
        Self {
            pos: cell.as_vec2(),
        }
    }
}
