//! Trigger-zone events.
//!
//! The physics layer owns overlap detection. When the player's interaction
//! zone starts or stops overlapping another entity it triggers one of these
//! events; [`crate::systems::interaction`] decides what they mean.
use bevy_ecs::prelude::*;

/// `other` entered the interaction zone of `actor`.
#[derive(Event, Debug, Clone, Copy)]
pub struct ZoneEnteredEvent {
    pub actor: Entity,
    pub other: Entity,
}

/// `other` left the interaction zone of `actor`.
#[derive(Event, Debug, Clone, Copy)]
pub struct ZoneExitedEvent {
    pub actor: Entity,
    pub other: Entity,
}
