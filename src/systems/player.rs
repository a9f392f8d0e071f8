//! Player lifecycle.
//!
//! - [`initialize_player`] places a newly added player at the grid position
//!   held in its shared position variable.
//! - [`player_activation_observer`] turns the behavior on or off. Activation
//!   enables the movement and interact channels; deactivation disables them
//!   and drops any interaction binding the player still holds.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::interaction::InteractionTracker;
use crate::components::mapposition::MapPosition;
use crate::components::player::{MovementInput, PlayerController};
use crate::events::input::InputAction;
use crate::events::player::PlayerActivationEvent;
use crate::resources::input::InputActions;
use crate::resources::worldsignals::WorldSignals;

/// Read the starting grid position of freshly spawned players.
pub fn initialize_player(
    world_signals: Res<WorldSignals>,
    mut query: Query<(&PlayerController, &mut MapPosition), Added<PlayerController>>,
) {
    for (controller, mut position) in query.iter_mut() {
        match world_signals.get_vector(&controller.position_variable) {
            Some(grid) => {
                position.pos = grid.as_vec2();
                log::info!("player starts at {}", grid);
            }
            None => log::warn!(
                "position variable '{}' is unset, player stays at {}",
                controller.position_variable,
                position.pos
            ),
        }
    }
}

pub fn player_activation_observer(
    trigger: On<PlayerActivationEvent>,
    mut actions: ResMut<InputActions>,
    mut query: Query<(
        &mut PlayerController,
        Option<&mut MovementInput>,
        Option<&mut InteractionTracker>,
    )>,
) {
    let event = trigger.event();
    let Ok((mut controller, input, tracker)) = query.get_mut(event.player) else {
        log::warn!(
            "player_activation_observer: {:?} has no PlayerController",
            event.player
        );
        return;
    };

    controller.active = event.active;
    actions.set_enabled(InputAction::Movement, event.active);
    actions.set_enabled(InputAction::Interact, event.active);

    if !event.active {
        if let Some(mut input) = input {
            input.store(Vec2::ZERO);
        }
        if let Some(mut tracker) = tracker {
            if let Some(target) = tracker.release(&mut actions) {
                log::debug!("released interaction with {:?} on deactivation", target);
            }
        }
    }
    log::info!(
        "player {:?} {}",
        event.player,
        if event.active { "activated" } else { "deactivated" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::interaction::Interactable;
    use glam::IVec2;

    fn make_world() -> World {
        let mut world = World::new();
        world.insert_resource(InputActions::default());
        world.insert_resource(WorldSignals::default());
        world.spawn(Observer::new(player_activation_observer));
        world.flush();
        world
    }

    #[test]
    fn test_initialize_reads_position_variable() {
        let mut world = make_world();
        world
            .resource_mut::<WorldSignals>()
            .set_vector("player_position", IVec2::new(4, -2));
        let player = world
            .spawn((PlayerController::new(1.0, 1.0), MapPosition::default()))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(initialize_player);
        schedule.run(&mut world);

        assert_eq!(
            world.get::<MapPosition>(player).unwrap().pos,
            Vec2::new(4.0, -2.0)
        );
    }

    #[test]
    fn test_activation_enables_channels() {
        let mut world = make_world();
        let player = world.spawn(PlayerController::new(1.0, 1.0)).id();

        world.trigger(PlayerActivationEvent {
            player,
            active: true,
        });

        assert!(world.get::<PlayerController>(player).unwrap().active);
        let actions = world.resource::<InputActions>();
        assert!(actions.is_enabled(InputAction::Movement));
        assert!(actions.is_enabled(InputAction::Interact));
    }

    #[test]
    fn test_deactivation_releases_binding() {
        let mut world = make_world();
        let torch = world.spawn(Interactable::new("torch")).id();
        let player = world
            .spawn((
                PlayerController::new(1.0, 1.0),
                MovementInput::default(),
                InteractionTracker::new(),
            ))
            .id();
        world.trigger(PlayerActivationEvent {
            player,
            active: true,
        });
        world.resource_scope(|world, mut actions: Mut<InputActions>| {
            let mut tracker = world.get_mut::<InteractionTracker>(player).unwrap();
            tracker.arm(player, torch, &mut actions);
        });

        world.trigger(PlayerActivationEvent {
            player,
            active: false,
        });

        assert!(!world.get::<PlayerController>(player).unwrap().active);
        assert!(!world.get::<InteractionTracker>(player).unwrap().is_armed());
        let actions = world.resource::<InputActions>();
        assert!(!actions.is_enabled(InputAction::Movement));
        assert!(!actions.is_enabled(InputAction::Interact));
        assert_eq!(actions.binding_count(InputAction::Interact), 0);
    }
}
