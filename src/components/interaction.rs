//! Proximity-based interaction components.
//!
//! - [`Interactable`] marks an entity as exposing the interaction capability.
//!   What happens on interaction is up to the concrete object: it observes
//!   [`InteractEvent`](crate::events::interaction::InteractEvent) and filters by
//!   its own components (see [`crate::systems::torch`]).
//! - [`InteractionTracker`] lives on the player and is a two-state machine,
//!   [`ProximityState::Idle`] or [`ProximityState::Armed`]. While armed it owns
//!   the [`ActionBinding`] that subscribes the player to the interact action.
//!
//! The tracker never looks at concrete interactable types. Zone observers
//! decide whether a candidate has the capability and call [`InteractionTracker::arm`].

use bevy_ecs::prelude::{Component, Entity};
use thiserror::Error;

use crate::events::input::InputAction;
use crate::resources::input::{ActionBinding, BindingId, InputActions};

/// Capability marker for world objects the player can interact with.
#[derive(Component, Clone, Debug)]
pub struct Interactable {
    /// Human-readable kind, used for logging.
    pub kind: &'static str,
}

impl Interactable {
    pub fn new(kind: &'static str) -> Self {
        Self { kind }
    }
}

/// Faults raised when the interaction trigger fires outside its contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InteractionError {
    #[error("interaction triggered while no interactable is in range")]
    NotArmed,
    #[error("interaction binding {0:?} does not belong to the armed tracker")]
    StaleBinding(BindingId),
    #[error("entity {0:?} has no interaction tracker")]
    MissingTracker(Entity),
}

#[derive(Debug, Default)]
pub enum ProximityState {
    /// Nothing in range, nothing bound.
    #[default]
    Idle,
    /// One interactable in range and the interact action bound to it.
    Armed {
        target: Entity,
        binding: ActionBinding,
    },
}

#[derive(Component, Debug, Default)]
pub struct InteractionTracker {
    state: ProximityState,
}

impl InteractionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ProximityState {
        &self.state
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, ProximityState::Armed { .. })
    }

    /// The interactable currently in range.
    pub fn current(&self) -> Option<Entity> {
        match &self.state {
            ProximityState::Idle => None,
            ProximityState::Armed { target, .. } => Some(*target),
        }
    }

    pub fn binding(&self) -> Option<&ActionBinding> {
        match &self.state {
            ProximityState::Idle => None,
            ProximityState::Armed { binding, .. } => Some(binding),
        }
    }

    /// Enter range of `target`, subscribing `owner` to the interact action.
    ///
    /// Re-arming on the already bound target is a no-op. Arming on a
    /// different target releases the previous binding first, so at most one
    /// binding exists. Returns true when the state changed.
    pub fn arm(&mut self, owner: Entity, target: Entity, actions: &mut InputActions) -> bool {
        if self.current() == Some(target) {
            return false;
        }
        self.release(actions);
        let binding = actions.bind(InputAction::Interact, owner);
        self.state = ProximityState::Armed { target, binding };
        true
    }

    /// Leave range of `exiting`.
    ///
    /// Only disarms when `exiting` is the bound target; exits from anything
    /// else leave the state untouched.
    pub fn disarm_from(&mut self, exiting: Entity, actions: &mut InputActions) -> bool {
        if self.current() != Some(exiting) {
            return false;
        }
        self.release(actions).is_some()
    }

    /// Unconditionally return to idle, releasing any binding.
    pub fn release(&mut self, actions: &mut InputActions) -> Option<Entity> {
        match std::mem::take(&mut self.state) {
            ProximityState::Idle => None,
            ProximityState::Armed { target, binding } => {
                if !actions.unbind(binding) {
                    log::warn!("interaction binding for {:?} was already released", target);
                }
                Some(target)
            }
        }
    }

    /// Resolve the target for a trigger press.
    pub fn trigger(&self) -> Result<Entity, InteractionError> {
        self.current().ok_or(InteractionError::NotArmed)
    }

    /// Resolve the target for a trigger press delivered through `binding`.
    pub fn interaction_target(&self, binding: BindingId) -> Result<Entity, InteractionError> {
        match &self.state {
            ProximityState::Idle => Err(InteractionError::NotArmed),
            ProximityState::Armed {
                target,
                binding: owned,
            } if owned.id() == binding => Ok(*target),
            ProximityState::Armed { .. } => Err(InteractionError::StaleBinding(binding)),
        }
    }
}
