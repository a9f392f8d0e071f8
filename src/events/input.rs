//! Input action events.
//!
//! The input collaborator (window/device layer) translates hardware state into
//! these events and triggers them on the world. The core never polls devices.
//!
//! - [`MovementInputEvent`] carries the 2-axis movement vector and its phase.
//! - [`InputEvent`] carries discrete actions such as interaction.
//!
//! See [`crate::systems::input`] for the observers that consume them.

use bevy_ecs::prelude::*;
use glam::Vec2;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// 2-axis movement (default: WASD / left stick).
    Movement,
    /// Interact with the object in range (default: E).
    Interact,
}

/// Lifecycle phase of an action, as reported by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    Started,
    Performed,
    Canceled,
}

/// Event emitted when the movement vector starts, changes or is released.
///
/// A canceled phase normally carries the zero vector; the value is stored
/// verbatim either way.
#[derive(Event, Debug, Clone, Copy)]
pub struct MovementInputEvent {
    pub value: Vec2,
    pub phase: InputPhase,
}

/// Event emitted when a discrete input action changes phase.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Phase of the action.
    pub phase: InputPhase,
}
