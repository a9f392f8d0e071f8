//! Opacity tween system.
//!
//! [`tween_alpha_system`] advances every [`TweenAlpha`] and writes the
//! interpolated alpha into the entity's [`Tint`]. A tween that reaches its
//! duration is removed; if it carries deferred work a
//! [`FadeCompletedEvent`](crate::events::activation::FadeCompletedEvent) is
//! triggered with the tween's transition id.
//!
//! Cancelling a fade is just removing the component, so a cancelled tween
//! never reports completion.

use crate::components::tint::Tint;
use crate::components::tween::TweenAlpha;
use crate::events::activation::FadeCompletedEvent;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance tween time. Returns true once the tween reached its end.
pub(crate) fn advance(time: &mut f32, duration: f32, playing: &mut bool, dt: f32) -> bool {
    *time += dt;
    if *time >= duration {
        *time = duration;
        *playing = false;
    }
    !*playing
}

/// Animate tint opacity based on [`TweenAlpha`] components.
pub fn tween_alpha_system(
    world_time: Res<WorldTime>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut Tint, &mut TweenAlpha)>,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut tint, mut tw) in query.iter_mut() {
        let duration = tw.duration;
        let mut t = tw.time;
        let mut playing = tw.playing;
        let finished = advance(&mut t, duration, &mut playing, dt);
        tw.time = t;
        tw.playing = playing;
        tint.alpha = lerp_f32(tw.from, tw.to, tw.progress());

        if finished {
            commands.entity(entity).remove::<TweenAlpha>();
            if let Some(action) = tw.on_complete {
                commands.trigger(FadeCompletedEvent {
                    entity,
                    transition: tw.transition,
                    action,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::activeswitch::FadeAction;
    use std::sync::{Arc, Mutex};

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_lerp_f32() {
        assert!(approx_eq(lerp_f32(0.0, 10.0, 0.5), 5.0));
        assert!(approx_eq(lerp_f32(1.0, 0.0, 0.25), 0.75));
        assert!(approx_eq(lerp_f32(5.0, 5.0, 0.7), 5.0));
    }

    #[test]
    fn test_advance_stops_at_duration() {
        let mut time = 0.0;
        let mut playing = true;
        assert!(!advance(&mut time, 1.0, &mut playing, 0.4));
        assert!(approx_eq(time, 0.4));
        assert!(advance(&mut time, 1.0, &mut playing, 0.8));
        assert_eq!(time, 1.0);
        assert!(!playing);
    }

    // ==================== SYSTEM TESTS ====================

    fn make_world(delta: f32) -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta,
            ..Default::default()
        });
        world
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(tween_alpha_system);
        schedule.run(world);
    }

    #[test]
    fn test_tween_alpha_interpolates_and_finishes() {
        let mut world = make_world(0.25);
        let e = world
            .spawn((Tint::transparent(), TweenAlpha::new(0.0, 1.0, 0.5)))
            .id();

        tick(&mut world);
        assert!(approx_eq(world.get::<Tint>(e).unwrap().alpha, 0.5));
        assert!(world.get::<TweenAlpha>(e).is_some());

        tick(&mut world);
        assert!(approx_eq(world.get::<Tint>(e).unwrap().alpha, 1.0));
        assert!(world.get::<TweenAlpha>(e).is_none());
    }

    #[test]
    fn test_zero_duration_completes_in_one_tick() {
        let mut world = make_world(0.0);
        let e = world
            .spawn((Tint::default(), TweenAlpha::new(1.0, 0.0, 0.0)))
            .id();
        tick(&mut world);
        assert_eq!(world.get::<Tint>(e).unwrap().alpha, 0.0);
        assert!(world.get::<TweenAlpha>(e).is_none());
    }

    #[test]
    fn test_completion_event_carries_transition() {
        let mut world = make_world(1.0);
        let seen: Arc<Mutex<Vec<FadeCompletedEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        world.add_observer(move |trigger: On<FadeCompletedEvent>| {
            sink.lock().unwrap().push(*trigger.event());
        });
        world.flush();

        let mut tween = TweenAlpha::new(1.0, 0.0, 0.5);
        tween.transition = 4;
        tween.on_complete = Some(FadeAction::Deactivate);
        let e = world.spawn((Tint::default(), tween)).id();
        let plain = world
            .spawn((Tint::default(), TweenAlpha::new(1.0, 0.0, 0.5)))
            .id();

        tick(&mut world);

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![FadeCompletedEvent {
                entity: e,
                transition: 4,
                action: FadeAction::Deactivate,
            }]
        );
        assert!(world.get::<TweenAlpha>(plain).is_none());
    }
}
