//! Input observers.
//!
//! The device layer triggers [`MovementInputEvent`] and [`InputEvent`]; these
//! observers route them through the [`InputActions`] channels.
//!
//! - [`movement_input_observer`] stores the movement vector verbatim on every
//!   active player while the movement channel is enabled.
//! - [`interaction_input_observer`] turns a performed interact press into one
//!   [`InteractEvent`] per binding on the interact channel.
use bevy_ecs::prelude::*;

use crate::components::interaction::{InteractionError, InteractionTracker};
use crate::components::player::{MovementInput, PlayerController};
use crate::events::input::{InputAction, InputEvent, InputPhase, MovementInputEvent};
use crate::events::interaction::InteractEvent;
use crate::resources::input::InputActions;

/// Store the movement vector on every active player.
///
/// Started, performed and canceled phases are all stored as given; a cancel
/// normally carries the zero vector, which becomes the new target.
pub fn movement_input_observer(
    trigger: On<MovementInputEvent>,
    mut actions: ResMut<InputActions>,
    mut query: Query<(&PlayerController, &mut MovementInput)>,
) {
    let event = trigger.event();
    actions.record(InputAction::Movement, event.phase);
    if !actions.is_enabled(InputAction::Movement) {
        return;
    }
    for (controller, mut input) in query.iter_mut() {
        if controller.active {
            input.store(event.value);
        }
    }
}

/// Dispatch a performed interact press to the bound interactables.
pub fn interaction_input_observer(
    trigger: On<InputEvent>,
    mut actions: ResMut<InputActions>,
    trackers: Query<&InteractionTracker>,
    mut commands: Commands,
) {
    let event = trigger.event();
    actions.record(event.action, event.phase);
    if event.action != InputAction::Interact || event.phase != InputPhase::Performed {
        return;
    }
    if !actions.is_enabled(InputAction::Interact) {
        log::debug!("interact pressed while the channel is disabled");
        return;
    }

    for &(binding, subscriber) in actions.channel(InputAction::Interact).bindings() {
        let target = trackers
            .get(subscriber)
            .map_err(|_| InteractionError::MissingTracker(subscriber))
            .and_then(|tracker| tracker.interaction_target(binding));
        match target {
            Ok(target) => {
                log::debug!("{:?} interacts with {:?}", subscriber, target);
                commands.trigger(InteractEvent {
                    target,
                    actor: subscriber,
                });
            }
            Err(err) => log::error!("interaction rejected: {}", err),
        }
    }
}
