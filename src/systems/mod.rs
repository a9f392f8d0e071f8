//! Gameplay systems and observers.
//!
//! This module groups the ECS systems that advance the simulation each frame
//! and the observers that react to collaborator events.
//!
//! Submodules overview
//! - [`activation`] – apply enable/disable to fade elements and cascade to interactables
//! - [`animation`] – select animation keys via rules over signals
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`input`] – route movement and interact events through the action channels
//! - [`interaction`] – arm and disarm the proximity tracker from zone events
//! - [`movement`] – smooth input, integrate position, publish the grid position
//! - [`player`] – player initialization and activation
//! - [`tile`] – spawn maze tiles and their torches
//! - [`time`] – update simulation time and delta
//! - [`torch`] – torch pickup and placement
//! - [`tween`] – advance opacity tweens and report completions

pub mod activation;
pub mod animation;
pub mod audio;
pub mod input;
pub mod interaction;
pub mod movement;
pub mod player;
pub mod tile;
pub mod time;
pub mod torch;
pub mod tween;
