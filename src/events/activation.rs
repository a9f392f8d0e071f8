//! Activation cascade events.
//!
//! - [`ActivationEvent`] asks an element to enable or disable itself.
//! - [`FadeCompletedEvent`] reports that a fade with deferred work reached
//!   its target.
//!
//! # Related
//!
//! - [`crate::components::activeswitch::ActiveSwitch`] – activation state
//! - [`crate::systems::activation`] – the observers applying these events

use bevy_ecs::prelude::*;

use crate::components::activeswitch::{FadeAction, TransitionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationCommand {
    Enable,
    Disable,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationEvent {
    pub entity: Entity,
    pub command: ActivationCommand,
}

impl ActivationEvent {
    pub fn enable(entity: Entity) -> Self {
        Self {
            entity,
            command: ActivationCommand::Enable,
        }
    }

    pub fn disable(entity: Entity) -> Self {
        Self {
            entity,
            command: ActivationCommand::Disable,
        }
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeCompletedEvent {
    pub entity: Entity,
    pub transition: TransitionId,
    pub action: FadeAction,
}
