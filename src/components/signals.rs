// Per-entity signals read by the animation controller

use bevy_ecs::prelude::Component;
use rustc_hash::{FxHashMap, FxHashSet};

/// Scalars and flags an entity publishes for other systems.
///
/// The movement system writes animation parameters here (`horizontal`,
/// `vertical`, `speed`, `last_move_x`, `last_move_y`) and interactables raise
/// one-shot trigger flags such as `pick_up_torch`.
#[derive(Debug, Clone, Default, Component)]
pub struct Signals {
    pub scalars: FxHashMap<String, f32>,
    pub flags: FxHashSet<String>,
}

impl Signals {
    pub fn with_scalar(mut self, key: impl Into<String>, value: f32) -> Self {
        self.set_scalar(key, value);
        self
    }
    pub fn with_flag(mut self, key: impl Into<String>) -> Self {
        self.set_flag(key);
        self
    }
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }
    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
    /// Remove a flag, reporting whether it was set.
    pub fn take_flag(&mut self, key: &str) -> bool {
        self.flags.remove(key)
    }
}
