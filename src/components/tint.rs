//! Color tint component.
//!
//! [`Tint`] carries the color a renderer should modulate an entity with. The
//! activation cascade only ever drives its `alpha` channel; fades are applied
//! by [`TweenAlpha`](super::tween::TweenAlpha).

use bevy_ecs::prelude::Component;

/// RGBA color modulation with channels in `0.0..=1.0`.
#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Tint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
}

impl Tint {
    pub fn new(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// White with zero opacity. Fade elements are spawned this way so the
    /// first `Enable` fades them in.
    pub fn transparent() -> Self {
        Self::new(1.0, 1.0, 1.0, 0.0)
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
}
