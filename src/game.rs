//! Game wiring.
//!
//! Builds a playable world out of the pieces in [`crate::systems`]:
//! [`register_observers`] installs every observer, [`spawn_player`] creates
//! the player entity, [`build_update_schedule`] returns the per-frame
//! schedule, and [`setup`] ties them together for a maze.

use bevy_ecs::prelude::*;
use thiserror::Error;

use crate::components::animation::AnimationController;
use crate::components::interaction::InteractionTracker;
use crate::components::mapposition::MapPosition;
use crate::components::player::{FootstepAudio, MovementInput, PlayerController, PlayerTorch};
use crate::components::signals::Signals;
use crate::components::tile::{Tile, TileError};
use crate::components::torch::Torch;
use crate::events::activation::ActivationEvent;
use crate::events::audio::{AudioCmd, AudioMessage};
use crate::events::player::PlayerActivationEvent;
use crate::resources::audio::AudioBridge;
use crate::resources::gameconfig::{ConfigError, GameConfig};
use crate::resources::input::InputActions;
use crate::resources::maze::{MazeDefinition, MazeError};
use crate::resources::tilelist::TileList;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::activation::{activation_observer, fade_completed_observer};
use crate::systems::animation::animation_controller;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::input::{interaction_input_observer, movement_input_observer};
use crate::systems::interaction::{zone_entered_observer, zone_exited_observer};
use crate::systems::movement::{input_smoothing_system, player_movement_system};
use crate::systems::player::{initialize_player, player_activation_observer};
use crate::systems::tile::spawn_maze;
use crate::systems::torch::{set_torch_positions, torch_interact_observer};
use crate::systems::tween::tween_alpha_system;

/// Shared variable holding the cell the player spawned on.
pub const PLAYER_SPAWN_VARIABLE: &str = "player_spawn";

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Tile(#[from] TileError),
    #[error("maze has no tiles")]
    EmptyMaze,
}

/// Entities created by [`setup`].
#[derive(Debug, Clone)]
pub struct MazeSession {
    pub player: Entity,
    pub tiles: Vec<Entity>,
}

impl MazeSession {
    /// Torches mounted on the session's tiles.
    pub fn torches(&self, world: &World) -> Vec<Entity> {
        self.tiles
            .iter()
            .filter_map(|&tile| world.get::<Tile>(tile).and_then(Tile::interactable))
            .filter(|&e| world.get::<Torch>(e).is_some())
            .collect()
    }
}

/// Install every gameplay observer.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(movement_input_observer));
    world.spawn(Observer::new(interaction_input_observer));
    world.spawn(Observer::new(zone_entered_observer));
    world.spawn(Observer::new(zone_exited_observer));
    world.spawn(Observer::new(player_activation_observer));
    world.spawn(Observer::new(torch_interact_observer));
    world.spawn(Observer::new(activation_observer));
    world.spawn(Observer::new(fade_completed_observer));
    // Ensure observers are registered before anything triggers events.
    world.flush();
}

/// Spawn the player, inactive, configured from `config`.
///
/// The footstep loop is started and paused right away so the movement
/// system only has to toggle it.
pub fn spawn_player(world: &mut World, config: &GameConfig) -> Entity {
    let player = world
        .spawn((
            PlayerController::new(config.player_speed, config.smoothing),
            MovementInput::default(),
            MapPosition::default(),
            InteractionTracker::new(),
            Signals::default(),
            FootstepAudio::new(config.footsteps_track.clone()),
            PlayerTorch::new(config.torch_capacity),
            AnimationController::player(),
        ))
        .id();

    if let Some(mut audio) = world.get_resource_mut::<Messages<AudioCmd>>() {
        audio.write(AudioCmd::PlayMusic {
            id: config.footsteps_track.clone(),
            looped: true,
        });
        audio.write(AudioCmd::PauseMusic {
            id: config.footsteps_track.clone(),
        });
    }
    player
}

/// The per-frame update schedule.
///
/// Audio forwarding only runs when an [`AudioBridge`] is present, so the
/// schedule also works headless.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        // audio systems must be together
        (
            // First, advance AudioCmd messages and forward them to the audio thread
            update_bevy_audio_cmds,
            forward_audio_cmds.run_if(resource_exists::<AudioBridge>),
            // Then, pull audio thread messages and advance them
            poll_audio_messages.run_if(resource_exists::<AudioBridge>),
            update_bevy_audio_messages,
        )
            .chain(),
    );
    update.add_systems(
        (
            initialize_player,
            input_smoothing_system,
            player_movement_system,
            tween_alpha_system,
            animation_controller,
        )
            .chain()
            .after(update_bevy_audio_messages),
    );
    update
}

/// Insert the resources gameplay needs, keeping any already present.
pub fn insert_resources(world: &mut World, config: &GameConfig) {
    world.init_resource::<WorldTime>();
    world.init_resource::<WorldSignals>();
    world.init_resource::<InputActions>();
    world.init_resource::<TileList>();
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<AudioMessage>>();
    world.insert_resource(config.clone());
}

/// Build the whole scene: maze, torches, player, and the first fade-in.
///
/// The player spawns on the first tile of the maze and is activated; every
/// tile is enabled, which cascades to the torches bound to them.
pub fn setup(
    world: &mut World,
    config: &GameConfig,
    maze: &MazeDefinition,
) -> Result<MazeSession, SetupError> {
    let spawn_cell = maze.tiles.first().ok_or(SetupError::EmptyMaze)?.position;

    insert_resources(world, config);
    register_observers(world);

    let tiles = spawn_maze(world, maze, config.fade_time)?;

    let player = spawn_player(world, config);
    let position_variable = world
        .get::<PlayerController>(player)
        .map(|c| c.position_variable.clone())
        .unwrap_or_default();
    {
        let mut signals = world.resource_mut::<WorldSignals>();
        signals.set_vector(PLAYER_SPAWN_VARIABLE, spawn_cell);
        signals.set_vector(position_variable, spawn_cell);
    }

    let mut placement = Schedule::default();
    placement.add_systems(set_torch_positions);
    placement.run(world);

    world.trigger(PlayerActivationEvent {
        player,
        active: true,
    });
    for &tile in &tiles {
        world.trigger(ActivationEvent::enable(tile));
    }
    world.flush();

    log::info!(
        "maze ready: {} tiles, player {:?} at {}",
        tiles.len(),
        player,
        spawn_cell
    );
    Ok(MazeSession { player, tiles })
}
