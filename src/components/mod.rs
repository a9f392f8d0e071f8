//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the maze world: the player's movement and interaction state, tiles and
//! the objects mounted on them, and the fade machinery they share.
//!
//! Submodules overview:
//! - [`activeswitch`] – enable/disable state driven by opacity fades
//! - [`animation`] – rule-based selection of the animation key from signals
//! - [`interaction`] – interactable capability and the proximity tracker
//! - [`mapposition`] – continuous world-space position of an entity
//! - [`player`] – controller tuning, smoothed input, footsteps and carried torch
//! - [`signals`] – per-entity signal storage for cross-system communication
//! - [`tile`] – maze cell with directions and an optional bound interactable
//! - [`tint`] – color modulation, the target of opacity fades
//! - [`torch`] – torch pickup placed in the maze and its light
//! - [`tween`] – opacity tween used as the transition service

pub mod activeswitch;
pub mod animation;
pub mod interaction;
pub mod mapposition;
pub mod player;
pub mod signals;
pub mod tile;
pub mod tint;
pub mod torch;
pub mod tween;
