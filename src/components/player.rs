//! Player controller components.
//!
//! - [`PlayerController`] – tuning and activation state of the player behavior
//! - [`MovementInput`] – raw, stored and smoothed movement vectors
//! - [`FootstepAudio`] – on/off gate for the footstep loop
//! - [`PlayerTorch`] – the torch the player carries, refilled by torch pickups
//!
//! Systems in [`crate::systems::movement`] and [`crate::systems::player`] read
//! and update these.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Default shared variable receiving the player's grid position.
pub const PLAYER_POSITION_VARIABLE: &str = "player_position";

#[derive(Component, Clone, Debug)]
pub struct PlayerController {
    /// World units per second at full input.
    pub speed: f32,
    /// Exponential smoothing rate; higher converges faster, `<= 0` freezes.
    pub smoothing: f32,
    /// Whether the behavior is running. Inactive players do not move.
    pub active: bool,
    /// Shared vector variable that receives the rounded grid position.
    pub position_variable: String,
}

impl PlayerController {
    pub fn new(speed: f32, smoothing: f32) -> Self {
        Self {
            speed,
            smoothing,
            active: false,
            position_variable: PLAYER_POSITION_VARIABLE.to_string(),
        }
    }

    pub fn with_position_variable(mut self, key: impl Into<String>) -> Self {
        self.position_variable = key.into();
        self
    }
}

/// Fraction of the remaining distance covered in one tick.
///
/// `1 - e^(-rate * dt)`: zero when either input is non-positive, strictly
/// increasing in `rate * dt`, and always below one.
pub fn smoothing_factor(dt: f32, rate: f32) -> f32 {
    if dt <= 0.0 || rate <= 0.0 {
        return 0.0;
    }
    1.0 - (-rate * dt).exp()
}

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct MovementInput {
    /// Last vector delivered by the input layer.
    pub raw: Vec2,
    /// Vector the smoothed value converges toward.
    pub stored: Vec2,
    /// Exponentially smoothed vector used for motion.
    pub smoothed: Vec2,
}

impl MovementInput {
    /// Store an input vector verbatim.
    pub fn store(&mut self, value: Vec2) {
        self.raw = value;
        self.stored = value;
    }

    /// Move `smoothed` toward `stored` by one tick.
    pub fn smooth(&mut self, dt: f32, rate: f32) {
        let t = smoothing_factor(dt, rate);
        self.smoothed = self.smoothed.lerp(self.stored, t);
    }

    /// True when a raw axis is exactly at full deflection.
    pub fn is_cardinal(&self) -> bool {
        self.raw.x.abs() == 1.0 || self.raw.y.abs() == 1.0
    }
}

/// Footstep loop gate: paused while idle, resumed on a cardinal press.
#[derive(Component, Clone, Debug)]
pub struct FootstepAudio {
    /// Music id of the loop in the audio backend.
    pub track: String,
    /// Whether the loop is currently unpaused.
    pub playing: bool,
}

impl FootstepAudio {
    pub fn new(track: impl Into<String>) -> Self {
        Self {
            track: track.into(),
            playing: false,
        }
    }
}

/// Torch carried by the player.
///
/// The crate only refills it. Burning `fuel` down belongs to the light layer
/// of the embedding game, which owns the carried torch's light.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlayerTorch {
    /// Remaining fuel, drained by the embedding game.
    pub fuel: f32,
    pub capacity: f32,
    pub refills: u32,
}

impl PlayerTorch {
    pub fn new(capacity: f32) -> Self {
        Self {
            fuel: capacity,
            capacity,
            refills: 0,
        }
    }

    pub fn refill(&mut self) {
        self.fuel = self.capacity;
        self.refills += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_smoothing_factor_zero_dt_or_rate() {
        assert_eq!(smoothing_factor(0.0, 10.0), 0.0);
        assert_eq!(smoothing_factor(0.1, 0.0), 0.0);
        assert_eq!(smoothing_factor(0.1, -3.0), 0.0);
        assert_eq!(smoothing_factor(-0.1, 3.0), 0.0);
    }

    #[test]
    fn test_smoothing_factor_strictly_increasing_and_bounded() {
        let mut prev = 0.0;
        for i in 1..=20 {
            let t = smoothing_factor(0.05 * i as f32, 2.0);
            assert!(t > prev);
            assert!(t < 1.0);
            prev = t;
        }
    }

    #[test]
    fn test_store_is_verbatim() {
        let mut input = MovementInput::default();
        input.store(Vec2::new(3.0, -7.5));
        assert_eq!(input.raw, Vec2::new(3.0, -7.5));
        assert_eq!(input.stored, Vec2::new(3.0, -7.5));
        assert_eq!(input.smoothed, Vec2::ZERO);
    }

    #[test]
    fn test_smooth_stays_on_segment() {
        let mut input = MovementInput {
            raw: Vec2::new(1.0, 1.0),
            stored: Vec2::new(1.0, 1.0),
            smoothed: Vec2::new(-1.0, 0.0),
        };
        let before = input.smoothed;
        input.smooth(0.2, 3.0);
        let t = smoothing_factor(0.2, 3.0);
        let expected = before + (input.stored - before) * t;
        assert!(approx_eq(input.smoothed.x, expected.x));
        assert!(approx_eq(input.smoothed.y, expected.y));
    }

    #[test]
    fn test_smooth_frozen_rate() {
        let mut input = MovementInput::default();
        input.store(Vec2::X);
        input.smooth(1.0, 0.0);
        assert_eq!(input.smoothed, Vec2::ZERO);
    }

    #[test]
    fn test_is_cardinal() {
        let mut input = MovementInput::default();
        assert!(!input.is_cardinal());
        input.store(Vec2::new(0.0, -1.0));
        assert!(input.is_cardinal());
        input.store(Vec2::new(0.7071, 0.7071));
        assert!(!input.is_cardinal());
    }

    #[test]
    fn test_player_torch_refill() {
        let mut torch = PlayerTorch::new(10.0);
        torch.fuel = 2.0;
        torch.refill();
        assert_eq!(torch.fuel, 10.0);
        assert_eq!(torch.refills, 1);
    }
}
