use bevy_ecs::prelude::*;

/// Activate or deactivate the player behavior.
///
/// Activation enables the movement and interaction input channels.
/// Deactivation disables them and releases any interaction binding.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerActivationEvent {
    pub player: Entity,
    pub active: bool,
}
