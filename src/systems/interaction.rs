//! Proximity interaction observers.
//!
//! - [`zone_entered_observer`] arms the actor's [`InteractionTracker`] when
//!   the entering entity has the [`Interactable`] capability and the actor
//!   is not a deactivated player.
//! - [`zone_exited_observer`] disarms it when the bound target leaves.
//! - [`perform_interaction`] resolves and dispatches an interaction for one
//!   actor directly, bypassing the input channel.
use bevy_ecs::prelude::*;

use crate::components::interaction::{Interactable, InteractionError, InteractionTracker};
use crate::components::player::PlayerController;
use crate::events::interaction::InteractEvent;
use crate::events::zone::{ZoneEnteredEvent, ZoneExitedEvent};
use crate::resources::input::InputActions;

pub fn zone_entered_observer(
    trigger: On<ZoneEnteredEvent>,
    mut actions: ResMut<InputActions>,
    mut trackers: Query<&mut InteractionTracker>,
    interactables: Query<&Interactable>,
    controllers: Query<&PlayerController>,
) {
    let event = trigger.event();
    if controllers.get(event.actor).is_ok_and(|c| !c.active) {
        log::debug!(
            "{:?} is inactive, not arming on {:?}",
            event.actor,
            event.other
        );
        return;
    }
    let Ok(interactable) = interactables.get(event.other) else {
        log::debug!(
            "{:?} entered zone of {:?} but is not interactable",
            event.other,
            event.actor
        );
        return;
    };
    let Ok(mut tracker) = trackers.get_mut(event.actor) else {
        log::warn!("zone_entered_observer: {:?} has no InteractionTracker", event.actor);
        return;
    };
    if tracker.arm(event.actor, event.other, &mut actions) {
        log::debug!(
            "{:?} armed on {} {:?}",
            event.actor,
            interactable.kind,
            event.other
        );
    }
}

pub fn zone_exited_observer(
    trigger: On<ZoneExitedEvent>,
    mut actions: ResMut<InputActions>,
    mut trackers: Query<&mut InteractionTracker>,
) {
    let event = trigger.event();
    let Ok(mut tracker) = trackers.get_mut(event.actor) else {
        return;
    };
    if tracker.disarm_from(event.other, &mut actions) {
        log::debug!("{:?} disarmed, {:?} left range", event.actor, event.other);
    }
}

/// Interact with whatever `actor` is armed on.
///
/// Fails with [`InteractionError::NotArmed`] when nothing is in range; the
/// interactable is never invoked in that case.
pub fn perform_interaction(world: &mut World, actor: Entity) -> Result<Entity, InteractionError> {
    let tracker = world
        .get::<InteractionTracker>(actor)
        .ok_or(InteractionError::MissingTracker(actor))?;
    let target = tracker.trigger()?;
    world.trigger(InteractEvent { target, actor });
    world.flush();
    Ok(target)
}
