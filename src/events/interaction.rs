//! Interaction dispatch event.
//!
//! [`InteractEvent`] is the typed `Interact(actor)` call. The proximity
//! tracker triggers it at most once per press while armed; every concrete
//! interactable registers an observer and ignores targets that are not its
//! own kind.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<InteractEvent>, doors: Query<&mut Door>| {
//!     let Ok(mut door) = doors.get_mut(trigger.event().target) else { return };
//!     door.open = true;
//! });
//! ```

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractEvent {
    /// The interactable being used.
    pub target: Entity,
    /// The entity interacting with it.
    pub actor: Entity,
}
