//! Opacity tween component.
//!
//! [`TweenAlpha`] is the transition service the activation cascade relies on:
//! inserting one starts a fade, removing it cancels the fade (and with it any
//! pending completion), and when it runs to the end the tween system fires a
//! [`FadeCompletedEvent`](crate::events::activation::FadeCompletedEvent).
//! See [`crate::systems::tween`] for the update system.

use bevy_ecs::prelude::Component;

use crate::components::activeswitch::{FadeAction, FadeRequest, TransitionId};

/// Animates an entity's [`Tint`](super::tint::Tint) alpha toward a target at
/// constant speed.
#[derive(Component, Clone, Debug)]
pub struct TweenAlpha {
    /// Starting alpha.
    pub from: f32,
    /// Target alpha.
    pub to: f32,
    /// Duration in seconds.
    pub duration: f32,
    /// Whether the tween is still running.
    pub playing: bool,
    /// Seconds elapsed since the tween started.
    pub time: f32,
    /// Transition this tween belongs to.
    pub transition: TransitionId,
    /// Deferred work to report once the tween reaches its target.
    pub on_complete: Option<FadeAction>,
}

impl TweenAlpha {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        TweenAlpha {
            from,
            to,
            duration: duration.max(0.0),
            playing: true,
            time: 0.0,
            transition: 0,
            on_complete: None,
        }
    }

    /// Build the tween that fulfils `request`, starting from the current alpha.
    pub fn from_request(from: f32, request: &FadeRequest) -> Self {
        let mut tween = Self::new(from, request.target_alpha, request.duration);
        tween.transition = request.transition;
        tween.on_complete = request.on_complete;
        tween
    }

    /// Normalized progress in `0.0..=1.0`. Zero-length tweens are complete.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.time / self.duration).clamp(0.0, 1.0)
        }
    }
}
