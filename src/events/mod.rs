//! Event types exchanged across systems.
//!
//! This module groups the domain events the gameplay core reacts to and
//! emits. Collaborators outside the core (input devices, the physics overlap
//! layer, the maze generator) talk to it only through these events.
//!
//! Submodules:
//! - [`activation`] – enable/disable commands and fade completions for tiles
//! - [`audio`] – commands and messages for the background audio thread
//! - [`input`] – movement vectors and discrete action phases
//! - [`interaction`] – typed interaction dispatched to interactables
//! - [`player`] – player behavior activation
//! - [`zone`] – interaction-zone enter/exit notifications
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod activation;
pub mod audio;
pub mod input;
pub mod interaction;
pub mod player;
pub mod zone;
