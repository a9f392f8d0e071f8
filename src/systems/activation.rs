//! Activation cascade observers.
//!
//! - [`activation_observer`] applies an [`ActivationEvent`] to an
//!   [`ActiveSwitch`]: it cancels any running fade, starts the new one and,
//!   when the entity is a [`Tile`] with a bound interactable, forwards the
//!   same command to it.
//! - [`fade_completed_observer`] applies deferred work once a fade reaches its
//!   target, unless a newer transition superseded it.
//!
//! Commands are applied in order, so the forwarded event always runs after the
//! tile's own tween was inserted.

use bevy_ecs::prelude::*;

use crate::components::activeswitch::ActiveSwitch;
use crate::components::tile::Tile;
use crate::components::tint::Tint;
use crate::components::tween::TweenAlpha;
use crate::events::activation::{ActivationCommand, ActivationEvent, FadeCompletedEvent};

/// Enable or disable an element and cascade to its bound interactable.
pub fn activation_observer(
    trigger: On<ActivationEvent>,
    mut commands: Commands,
    mut query: Query<(&mut ActiveSwitch, Option<&Tint>, Option<&Tile>)>,
) {
    let event = trigger.event();
    let Ok((mut switch, tint, tile)) = query.get_mut(event.entity) else {
        log::warn!(
            "activation_observer: entity {:?} has no ActiveSwitch",
            event.entity
        );
        return;
    };

    let request = match event.command {
        ActivationCommand::Enable => switch.enable(),
        ActivationCommand::Disable => switch.disable(),
    };
    log::debug!(
        "{:?} {:?} -> alpha {} (transition {})",
        event.entity,
        event.command,
        request.target_alpha,
        request.transition
    );

    let mut entity_commands = commands.entity(event.entity);
    let from = match tint {
        Some(tint) => tint.alpha,
        None => {
            entity_commands.insert(Tint::transparent());
            0.0
        }
    };
    entity_commands
        .remove::<TweenAlpha>()
        .insert(TweenAlpha::from_request(from, &request));

    if let Some(interactable) = tile.and_then(Tile::interactable) {
        commands.trigger(ActivationEvent {
            entity: interactable,
            command: event.command,
        });
    }
}

/// Finish a fade, ignoring completions of superseded transitions.
pub fn fade_completed_observer(
    trigger: On<FadeCompletedEvent>,
    mut query: Query<&mut ActiveSwitch>,
) {
    let event = trigger.event();
    let Ok(mut switch) = query.get_mut(event.entity) else {
        return;
    };
    if !switch.complete(event.transition, event.action) {
        log::debug!(
            "ignoring stale fade completion {} on {:?} (current {})",
            event.transition,
            event.entity,
            switch.transition()
        );
    }
}
