//! Great Meadow gameplay core.
//!
//! This module exposes the ECS components, resources, systems, and events of
//! the maze gameplay core for use in integration tests and by the platform
//! layer that renders it.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
