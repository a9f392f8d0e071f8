//! Proximity interaction integration tests: zone events, the interact
//! channel, torch pickup, and player deactivation.

use std::sync::{Arc, Mutex};

use bevy_ecs::prelude::*;

use greatmeadow::components::interaction::{
    Interactable, InteractionError, InteractionTracker, ProximityState,
};
use greatmeadow::components::player::{MovementInput, PlayerController, PlayerTorch};
use greatmeadow::components::signals::Signals;
use greatmeadow::components::torch::{Torch, TorchLight};
use greatmeadow::events::input::{InputAction, InputEvent, InputPhase};
use greatmeadow::events::interaction::InteractEvent;
use greatmeadow::events::player::PlayerActivationEvent;
use greatmeadow::events::zone::{ZoneEnteredEvent, ZoneExitedEvent};
use greatmeadow::resources::input::InputActions;
use greatmeadow::resources::worldsignals::WorldSignals;
use greatmeadow::systems::interaction::perform_interaction;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(InputActions::default());
    world.insert_resource(WorldSignals::default());
    greatmeadow::game::register_observers(&mut world);
    world
}

fn spawn_player(world: &mut World) -> Entity {
    let player = world
        .spawn((
            PlayerController::new(1.0, 1.0),
            MovementInput::default(),
            InteractionTracker::new(),
            PlayerTorch::new(10.0),
        ))
        .id();
    world.trigger(PlayerActivationEvent {
        player,
        active: true,
    });
    player
}

fn spawn_torch(world: &mut World) -> Entity {
    world
        .spawn((
            Interactable::new("torch"),
            Torch::default(),
            TorchLight::new(1.0),
            Signals::default(),
        ))
        .id()
}

fn record_interactions(world: &mut World) -> Arc<Mutex<Vec<InteractEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    world.add_observer(move |trigger: On<InteractEvent>| {
        sink.lock().unwrap().push(*trigger.event());
    });
    world.flush();
    seen
}

fn press_interact(world: &mut World) {
    world.trigger(InputEvent {
        action: InputAction::Interact,
        phase: InputPhase::Performed,
    });
    world.flush();
}

fn interact_bindings(world: &World) -> usize {
    world
        .resource::<InputActions>()
        .binding_count(InputAction::Interact)
}

#[test]
fn matched_enter_exit_pairs_never_leak_bindings() {
    let mut world = make_world();
    let player = spawn_player(&mut world);
    let torches: Vec<Entity> = (0..3).map(|_| spawn_torch(&mut world)).collect();

    for round in 0..50 {
        let torch = torches[round % torches.len()];
        world.trigger(ZoneEnteredEvent {
            actor: player,
            other: torch,
        });
        assert_eq!(interact_bindings(&world), 1);
        world.trigger(ZoneExitedEvent {
            actor: player,
            other: torch,
        });
    }

    let tracker = world.get::<InteractionTracker>(player).unwrap();
    assert!(matches!(tracker.state(), ProximityState::Idle));
    assert_eq!(interact_bindings(&world), 0);
}

#[test]
fn reentering_a_different_interactable_rebinds() {
    let mut world = make_world();
    let player = spawn_player(&mut world);
    let first = spawn_torch(&mut world);
    let second = spawn_torch(&mut world);
    let seen = record_interactions(&mut world);

    world.trigger(ZoneEnteredEvent {
        actor: player,
        other: first,
    });
    world.trigger(ZoneEnteredEvent {
        actor: player,
        other: second,
    });
    assert_eq!(interact_bindings(&world), 1);

    // the stale exit of the first torch must not drop the second binding
    world.trigger(ZoneExitedEvent {
        actor: player,
        other: first,
    });
    assert_eq!(interact_bindings(&world), 1);

    press_interact(&mut world);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![InteractEvent {
            target: second,
            actor: player,
        }]
    );
}

#[test]
fn interacting_with_a_torch_refills_the_carried_torch() {
    let mut world = make_world();
    let player = spawn_player(&mut world);
    let torch = spawn_torch(&mut world);
    world.get_mut::<PlayerTorch>(player).unwrap().fuel = 2.5;

    world.trigger(ZoneEnteredEvent {
        actor: player,
        other: torch,
    });
    press_interact(&mut world);

    let carried = world.get::<PlayerTorch>(player).unwrap();
    assert_eq!(carried.fuel, 10.0);
    assert_eq!(carried.refills, 1);
    assert_eq!(world.get::<TorchLight>(torch).unwrap().intensity, 0.0);
    assert!(world.get::<Signals>(torch).unwrap().has_flag("pick_up_torch"));
}

#[test]
fn non_interactable_candidates_do_not_arm() {
    let mut world = make_world();
    let player = spawn_player(&mut world);
    let bush = world.spawn(Signals::default()).id();
    let seen = record_interactions(&mut world);

    world.trigger(ZoneEnteredEvent {
        actor: player,
        other: bush,
    });
    press_interact(&mut world);

    assert!(!world.get::<InteractionTracker>(player).unwrap().is_armed());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn trigger_while_idle_is_an_error() {
    let mut world = make_world();
    let player = spawn_player(&mut world);
    let seen = record_interactions(&mut world);

    assert_eq!(
        perform_interaction(&mut world, player),
        Err(InteractionError::NotArmed)
    );
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn perform_interaction_dispatches_to_the_armed_target() {
    let mut world = make_world();
    let player = spawn_player(&mut world);
    let torch = spawn_torch(&mut world);

    world.trigger(ZoneEnteredEvent {
        actor: player,
        other: torch,
    });
    assert_eq!(perform_interaction(&mut world, player), Ok(torch));
    assert_eq!(world.get::<PlayerTorch>(player).unwrap().refills, 1);
}

#[test]
fn deactivation_releases_binding_and_blocks_presses() {
    let mut world = make_world();
    let player = spawn_player(&mut world);
    let torch = spawn_torch(&mut world);
    let seen = record_interactions(&mut world);

    world.trigger(ZoneEnteredEvent {
        actor: player,
        other: torch,
    });
    world.trigger(PlayerActivationEvent {
        player,
        active: false,
    });
    press_interact(&mut world);

    assert!(!world.get::<InteractionTracker>(player).unwrap().is_armed());
    assert_eq!(interact_bindings(&world), 0);
    assert!(!world
        .resource::<InputActions>()
        .is_enabled(InputAction::Interact));
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn entering_a_zone_while_deactivated_creates_no_binding() {
    let mut world = make_world();
    let player = spawn_player(&mut world);
    let torch = spawn_torch(&mut world);
    let seen = record_interactions(&mut world);

    world.trigger(PlayerActivationEvent {
        player,
        active: false,
    });
    world.trigger(ZoneEnteredEvent {
        actor: player,
        other: torch,
    });
    assert!(!world.get::<InteractionTracker>(player).unwrap().is_armed());
    assert_eq!(interact_bindings(&world), 0);

    // reactivating does not resurrect the missed entry
    world.trigger(PlayerActivationEvent {
        player,
        active: true,
    });
    press_interact(&mut world);
    assert!(seen.lock().unwrap().is_empty());

    world.trigger(ZoneEnteredEvent {
        actor: player,
        other: torch,
    });
    assert_eq!(interact_bindings(&world), 1);
}

#[test]
fn torch_plays_pick_up_animation_after_interaction() {
    use greatmeadow::components::animation::AnimationController;
    use greatmeadow::game::{build_update_schedule, setup};
    use greatmeadow::resources::gameconfig::GameConfig;
    use greatmeadow::resources::maze::MazeDefinition;

    let mut world = World::new();
    let session = setup(&mut world, &GameConfig::new(), &MazeDefinition::corridor(2)).unwrap();
    let torch = session.torches(&world)[0];

    let mut update = build_update_schedule();
    update.run(&mut world);
    assert_eq!(
        world.get::<AnimationController>(torch).unwrap().current_key,
        "burning"
    );

    world.trigger(ZoneEnteredEvent {
        actor: session.player,
        other: torch,
    });
    press_interact(&mut world);
    assert!(world.get::<Signals>(torch).unwrap().has_flag("pick_up_torch"));

    for _ in 0..3 {
        update.run(&mut world);
    }
    assert_eq!(
        world.get::<AnimationController>(torch).unwrap().current_key,
        "pick_up"
    );
    assert!(!world.get::<Signals>(torch).unwrap().has_flag("pick_up_torch"));
}
