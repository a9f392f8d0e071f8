//! Player movement systems.
//!
//! - [`input_smoothing_system`] moves each player's smoothed input toward the
//!   stored input.
//! - [`player_movement_system`] integrates the smoothed input into the
//!   player's [`MapPosition`], publishes animation parameters, gates the
//!   footstep loop, and writes the rounded grid position to the shared
//!   position variable.
//!
//! Run them chained, smoothing first. The grid position is derived from the
//! continuous position every frame and never read back, so rounding is lossy
//! but cannot feed back into motion.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::{FootstepAudio, MovementInput, PlayerController};
use crate::components::signals::Signals;
use crate::events::audio::AudioCmd;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

pub const SIGNAL_HORIZONTAL: &str = "horizontal";
pub const SIGNAL_VERTICAL: &str = "vertical";
pub const SIGNAL_SPEED: &str = "speed";
pub const SIGNAL_LAST_MOVE_X: &str = "last_move_x";
pub const SIGNAL_LAST_MOVE_Y: &str = "last_move_y";

/// Advance input smoothing for every active player.
pub fn input_smoothing_system(
    time: Res<WorldTime>,
    mut query: Query<(&PlayerController, &mut MovementInput)>,
) {
    let dt = time.delta.max(0.0);
    for (controller, mut input) in query.iter_mut() {
        if !controller.active {
            continue;
        }
        input.smooth(dt, controller.smoothing);
    }
}

/// Integrate movement and publish the derived per-frame state.
pub fn player_movement_system(
    time: Res<WorldTime>,
    mut world_signals: ResMut<WorldSignals>,
    mut audio: MessageWriter<AudioCmd>,
    mut query: Query<(
        &PlayerController,
        &MovementInput,
        &mut MapPosition,
        Option<&mut Signals>,
        Option<&mut FootstepAudio>,
    )>,
) {
    let dt = time.delta.max(0.0);
    for (controller, input, mut position, signals, footsteps) in query.iter_mut() {
        if !controller.active {
            continue;
        }
        position.pos += input.smoothed * controller.speed * dt;

        if let Some(mut signals) = signals {
            signals.set_scalar(SIGNAL_HORIZONTAL, input.raw.x);
            signals.set_scalar(SIGNAL_VERTICAL, input.raw.y);
            signals.set_scalar(SIGNAL_SPEED, input.raw.length_squared());
            // Latch the facing only on full cardinal presses
            if input.is_cardinal() {
                signals.set_scalar(SIGNAL_LAST_MOVE_X, input.raw.x);
                signals.set_scalar(SIGNAL_LAST_MOVE_Y, input.raw.y);
            }
        }

        if let Some(mut footsteps) = footsteps {
            let walking = input.is_cardinal();
            if walking != footsteps.playing {
                footsteps.playing = walking;
                let id = footsteps.track.clone();
                audio.write(if walking {
                    AudioCmd::ResumeMusic { id }
                } else {
                    AudioCmd::PauseMusic { id }
                });
            }
        }

        world_signals.set_vector(controller.position_variable.as_str(), position.to_grid());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{IVec2, Vec2};

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn make_world(delta: f32) -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta,
            ..Default::default()
        });
        world.insert_resource(WorldSignals::default());
        world.init_resource::<Messages<AudioCmd>>();
        world
    }

    fn active_player(speed: f32, smoothing: f32) -> PlayerController {
        let mut controller = PlayerController::new(speed, smoothing);
        controller.active = true;
        controller
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems((input_smoothing_system, player_movement_system).chain());
        schedule.run(world);
    }

    fn drain_audio(world: &mut World) -> Vec<AudioCmd> {
        world
            .resource_mut::<Messages<AudioCmd>>()
            .drain()
            .collect()
    }

    #[test]
    fn test_integrates_smoothed_input() {
        let mut world = make_world(1.0);
        let input = MovementInput {
            raw: Vec2::new(0.0, 1.0),
            stored: Vec2::new(0.0, 1.0),
            smoothed: Vec2::new(0.0, 1.0),
        };
        let player = world
            .spawn((active_player(0.5, 0.0), input, MapPosition::new(2.0, 2.0)))
            .id();

        tick(&mut world);

        let pos = world.get::<MapPosition>(player).unwrap();
        assert!(approx_eq(pos.pos.x, 2.0));
        assert!(approx_eq(pos.pos.y, 2.5));
        assert_eq!(
            world.resource::<WorldSignals>().get_vector("player_position"),
            Some(IVec2::new(2, 3))
        );
    }

    #[test]
    fn test_inactive_player_does_not_move() {
        let mut world = make_world(1.0);
        let mut input = MovementInput::default();
        input.store(Vec2::X);
        input.smoothed = Vec2::X;
        let player = world
            .spawn((
                PlayerController::new(1.0, 1.0),
                input,
                MapPosition::new(0.0, 0.0),
            ))
            .id();

        tick(&mut world);

        assert_eq!(world.get::<MapPosition>(player).unwrap().pos, Vec2::ZERO);
        assert_eq!(
            world.resource::<WorldSignals>().get_vector("player_position"),
            None
        );
    }

    #[test]
    fn test_signals_latch_last_move_only_on_cardinal() {
        let mut world = make_world(0.1);
        let mut input = MovementInput::default();
        input.store(Vec2::new(-1.0, 0.0));
        let player = world
            .spawn((
                active_player(1.0, 1.0),
                input,
                MapPosition::default(),
                Signals::default(),
            ))
            .id();

        tick(&mut world);
        {
            let signals = world.get::<Signals>(player).unwrap();
            assert_eq!(signals.get_scalar(SIGNAL_HORIZONTAL), Some(-1.0));
            assert_eq!(signals.get_scalar(SIGNAL_SPEED), Some(1.0));
            assert_eq!(signals.get_scalar(SIGNAL_LAST_MOVE_X), Some(-1.0));
            assert_eq!(signals.get_scalar(SIGNAL_LAST_MOVE_Y), Some(0.0));
        }

        world
            .get_mut::<MovementInput>(player)
            .unwrap()
            .store(Vec2::new(0.5, 0.5));
        tick(&mut world);

        let signals = world.get::<Signals>(player).unwrap();
        assert_eq!(signals.get_scalar(SIGNAL_HORIZONTAL), Some(0.5));
        assert!(approx_eq(signals.get_scalar(SIGNAL_SPEED).unwrap(), 0.5));
        assert_eq!(signals.get_scalar(SIGNAL_LAST_MOVE_X), Some(-1.0));
    }

    #[test]
    fn test_footsteps_gate_emits_only_on_change() {
        let mut world = make_world(0.1);
        let player = world
            .spawn((
                active_player(1.0, 1.0),
                MovementInput::default(),
                MapPosition::default(),
                FootstepAudio::new("footsteps"),
            ))
            .id();

        tick(&mut world);
        assert!(drain_audio(&mut world).is_empty());

        world
            .get_mut::<MovementInput>(player)
            .unwrap()
            .store(Vec2::new(0.0, 1.0));
        tick(&mut world);
        tick(&mut world);
        assert_eq!(
            drain_audio(&mut world),
            vec![AudioCmd::ResumeMusic {
                id: "footsteps".into()
            }]
        );

        world
            .get_mut::<MovementInput>(player)
            .unwrap()
            .store(Vec2::ZERO);
        tick(&mut world);
        assert_eq!(
            drain_audio(&mut world),
            vec![AudioCmd::PauseMusic {
                id: "footsteps".into()
            }]
        );
        assert!(!world.get::<FootstepAudio>(player).unwrap().playing);
    }
}
