//! Input action channels and bindings.
//!
//! [`InputActions`] is the core's view of the input layer: one channel per
//! [`InputAction`], each of which can be enabled or disabled, remembers the
//! last phase it saw, and holds the bindings subscribed to it.
//!
//! A binding is represented by an owned [`ActionBinding`] handle. It is not
//! `Clone`; releasing it via [`InputActions::unbind`] consumes it, so the
//! holder cannot keep using a subscription it already gave back.
use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::events::input::{InputAction, InputPhase};

/// Opaque identifier of one binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

/// Owned handle to a subscription on an action channel.
#[derive(Debug, PartialEq, Eq)]
pub struct ActionBinding {
    id: BindingId,
    action: InputAction,
}

impl ActionBinding {
    pub fn id(&self) -> BindingId {
        self.id
    }
    pub fn action(&self) -> InputAction {
        self.action
    }
}

#[derive(Debug, Clone, Default)]
/// State of a single action channel.
pub struct ActionChannel {
    /// Whether events on this channel are delivered.
    pub enabled: bool,
    /// Last phase reported by the input layer, if any.
    pub last_phase: Option<InputPhase>,
    bindings: SmallVec<[(BindingId, Entity); 2]>,
}

impl ActionChannel {
    pub fn bindings(&self) -> &[(BindingId, Entity)] {
        &self.bindings
    }
}

/// Resource holding every action channel the gameplay layer reads.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputActions {
    pub movement: ActionChannel,
    pub interact: ActionChannel,
    next_binding: u64,
}

impl InputActions {
    pub fn channel(&self, action: InputAction) -> &ActionChannel {
        match action {
            InputAction::Movement => &self.movement,
            InputAction::Interact => &self.interact,
        }
    }

    pub fn channel_mut(&mut self, action: InputAction) -> &mut ActionChannel {
        match action {
            InputAction::Movement => &mut self.movement,
            InputAction::Interact => &mut self.interact,
        }
    }

    pub fn set_enabled(&mut self, action: InputAction, enabled: bool) {
        self.channel_mut(action).enabled = enabled;
    }

    pub fn is_enabled(&self, action: InputAction) -> bool {
        self.channel(action).enabled
    }

    /// Remember the latest phase seen on `action`.
    pub fn record(&mut self, action: InputAction, phase: InputPhase) {
        self.channel_mut(action).last_phase = Some(phase);
    }

    /// Subscribe `subscriber` to `action`.
    pub fn bind(&mut self, action: InputAction, subscriber: Entity) -> ActionBinding {
        self.next_binding += 1;
        let id = BindingId(self.next_binding);
        self.channel_mut(action).bindings.push((id, subscriber));
        ActionBinding { id, action }
    }

    /// Release a binding. Returns false if it was already gone.
    pub fn unbind(&mut self, binding: ActionBinding) -> bool {
        let bindings = &mut self.channel_mut(binding.action).bindings;
        let before = bindings.len();
        bindings.retain(|(id, _)| *id != binding.id);
        bindings.len() != before
    }

    pub fn is_bound(&self, binding: &ActionBinding) -> bool {
        self.channel(binding.action)
            .bindings
            .iter()
            .any(|(id, _)| *id == binding.id)
    }

    pub fn binding_count(&self, action: InputAction) -> usize {
        self.channel(action).bindings.len()
    }
}
