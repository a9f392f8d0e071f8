//! Fade-driven activation component.
//!
//! [`ActiveSwitch`] is the reusable enable/disable behavior shared by tiles
//! and the interactables mounted on them. It owns the activation flag and a
//! monotonically increasing transition id. Every `enable`/`disable` starts a
//! new transition, so a completion carrying an older id is stale and ignored.
//!
//! The component does not animate anything itself; it hands back a
//! [`FadeRequest`] that the activation observer turns into a
//! [`TweenAlpha`](super::tween::TweenAlpha). See
//! [`crate::systems::activation`].

use bevy_ecs::prelude::Component;

/// Identifier of one fade transition on one entity.
pub type TransitionId = u32;

/// Work deferred until a fade finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeAction {
    /// Mark the element inactive.
    Deactivate,
}

/// A fade the caller must start on the element's tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeRequest {
    pub transition: TransitionId,
    pub target_alpha: f32,
    pub duration: f32,
    pub on_complete: Option<FadeAction>,
}

#[derive(Component, Debug, Clone)]
pub struct ActiveSwitch {
    active: bool,
    fade_time: f32,
    transition: TransitionId,
}

impl ActiveSwitch {
    /// Create an inactive switch that fades over `fade_time` seconds.
    pub fn new(fade_time: f32) -> Self {
        Self {
            active: false,
            fade_time: fade_time.max(0.0),
            transition: 0,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn fade_time(&self) -> f32 {
        self.fade_time
    }

    pub fn transition(&self) -> TransitionId {
        self.transition
    }

    /// Activate immediately and fade in.
    pub fn enable(&mut self) -> FadeRequest {
        self.active = true;
        self.begin(1.0, None)
    }

    /// Fade out; the element stays active until the fade completes.
    pub fn disable(&mut self) -> FadeRequest {
        self.begin(0.0, Some(FadeAction::Deactivate))
    }

    /// Apply the completion of `transition`.
    ///
    /// Returns false and changes nothing when a newer transition has started
    /// since `transition` was issued.
    pub fn complete(&mut self, transition: TransitionId, action: FadeAction) -> bool {
        if transition != self.transition {
            return false;
        }
        match action {
            FadeAction::Deactivate => self.active = false,
        }
        true
    }

    fn begin(&mut self, target_alpha: f32, on_complete: Option<FadeAction>) -> FadeRequest {
        self.transition = self.transition.wrapping_add(1);
        FadeRequest {
            transition: self.transition,
            target_alpha,
            duration: self.fade_time,
            on_complete,
        }
    }
}
