//! Global ECS resources.
//!
//! This module groups the world-level state shared by systems: time, shared
//! variables, input channels, the tile registry, configuration and the audio
//! bridge.
//!
//! Submodules overview:
//! - [`audio`] – bridge to the background audio thread (channels and join handle)
//! - [`gameconfig`] – gameplay tuning loaded from an INI file
//! - [`input`] – action channels and interaction bindings
//! - [`maze`] – maze definition produced by the generator, read from JSON
//! - [`tilelist`] – registry of every tile, indexed by grid cell
//! - [`worldsignals`] – shared variables (grid vectors, points, scalars, flags)
//! - [`worldtime`] – simulation time and delta

pub mod audio;
pub mod gameconfig;
pub mod input;
pub mod maze;
pub mod tilelist;
pub mod worldsignals;
pub mod worldtime;
