//! Great Meadow headless runner.
//!
//! Drives the gameplay core without a window:
//! - **bevy_ecs** for entity-component-system architecture
//! - **configparser** for the INI gameplay tuning
//! - a background audio thread fed over **crossbeam-channel**
//!
//! The runner loads the configuration and a maze, builds the world with
//! [`game::setup`], then plays a short scripted session: walk the player
//! toward the torch, pick it up through the interaction zone, and fade the
//! maze out. The resulting state is logged.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --maze assets/maze.json --frames 240 --dt 0.016
//! ```

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::components::activeswitch::ActiveSwitch;
use crate::components::mapposition::MapPosition;
use crate::components::player::{PLAYER_POSITION_VARIABLE, PlayerTorch};
use crate::events::activation::ActivationEvent;
use crate::events::input::{InputAction, InputEvent, InputPhase, MovementInputEvent};
use crate::events::zone::{ZoneEnteredEvent, ZoneExitedEvent};
use crate::game::{MazeSession, SetupError};
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::gameconfig::GameConfig;
use crate::resources::maze::MazeDefinition;
use crate::resources::worldsignals::WorldSignals;
use crate::systems::time::update_world_time;
use bevy_ecs::prelude::*;
use clap::Parser;
use glam::{IVec2, Vec2};
use std::path::PathBuf;

/// Great Meadow gameplay core, headless session
#[derive(Parser)]
#[command(version, about = "Runs a scripted Great Meadow session without a window")]
struct Cli {
    /// INI file with gameplay tuning.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON maze definition. A small corridor is used when omitted.
    #[arg(long, value_name = "PATH")]
    maze: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 240)]
    frames: u32,

    /// Fixed frame delta in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Write the effective configuration back to the config file and exit.
    #[arg(long)]
    save_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        log::warn!("{e}; using defaults");
    }

    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &GameConfig) -> Result<(), SetupError> {
    let maze = match &cli.maze {
        Some(path) => MazeDefinition::load_from_file(path)?,
        None => MazeDefinition::corridor(5),
    };

    let mut world = World::new();
    // Init audio before setup so the footstep loop command reaches the thread
    setup_audio(&mut world);
    let session = game::setup(&mut world, config, &maze)?;

    let mut update = game::build_update_schedule();
    let mut script = Script::new(&world, &session);

    for frame in 0..cli.frames {
        script.step(&mut world, &session);
        update_world_time(&mut world, cli.dt);
        update.run(&mut world);
        world.clear_trackers(); // Clear changed components for next frame
        if frame % 60 == 0 {
            log::debug!(
                "frame {frame}: player at {:?}",
                world.get::<MapPosition>(session.player).map(|p| p.pos)
            );
        }
    }

    report(&world, &session);
    shutdown_audio(&mut world);
    Ok(())
}

/// Scripted stand-in for the device and physics collaborators.
struct Script {
    torch: Option<(Entity, IVec2)>,
    walking: bool,
    picked_up: bool,
    faded_out: bool,
}

impl Script {
    fn new(world: &World, session: &MazeSession) -> Self {
        let torch = session.torches(world).into_iter().find_map(|torch| {
            world
                .get::<MapPosition>(torch)
                .map(|position| (torch, position.to_grid()))
        });
        Self {
            torch,
            walking: false,
            picked_up: false,
            faded_out: false,
        }
    }

    fn step(&mut self, world: &mut World, session: &MazeSession) {
        let player_cell = world
            .resource::<WorldSignals>()
            .get_vector(PLAYER_POSITION_VARIABLE)
            .unwrap_or_default();

        match self.torch {
            Some((torch, cell)) if !self.picked_up => {
                if player_cell == cell {
                    self.stop(world);
                    world.trigger(ZoneEnteredEvent {
                        actor: session.player,
                        other: torch,
                    });
                    world.trigger(InputEvent {
                        action: InputAction::Interact,
                        phase: InputPhase::Performed,
                    });
                    world.trigger(ZoneExitedEvent {
                        actor: session.player,
                        other: torch,
                    });
                    self.picked_up = true;
                } else {
                    let delta = cell - player_cell;
                    self.walk(world, cardinal_toward(delta));
                }
            }
            _ if !self.faded_out => {
                self.stop(world);
                for &tile in &session.tiles {
                    world.trigger(ActivationEvent::disable(tile));
                }
                self.faded_out = true;
            }
            _ => {}
        }
    }

    fn walk(&mut self, world: &mut World, direction: Vec2) {
        world.trigger(MovementInputEvent {
            value: direction,
            phase: if self.walking {
                InputPhase::Performed
            } else {
                InputPhase::Started
            },
        });
        self.walking = true;
    }

    fn stop(&mut self, world: &mut World) {
        if self.walking {
            world.trigger(MovementInputEvent {
                value: Vec2::ZERO,
                phase: InputPhase::Canceled,
            });
            self.walking = false;
        }
    }
}

/// Dominant axis of `delta` as a unit cardinal vector.
fn cardinal_toward(delta: IVec2) -> Vec2 {
    if delta.x.abs() >= delta.y.abs() {
        Vec2::new(delta.x.signum() as f32, 0.0)
    } else {
        Vec2::new(0.0, delta.y.signum() as f32)
    }
}

fn report(world: &World, session: &MazeSession) {
    if let Some(position) = world.get::<MapPosition>(session.player) {
        log::info!(
            "player ended at {} (cell {})",
            position.pos,
            position.to_grid()
        );
    }
    if let Some(torch) = world.get::<PlayerTorch>(session.player) {
        log::info!(
            "carried torch: fuel {}/{} after {} refills",
            torch.fuel,
            torch.capacity,
            torch.refills
        );
    }
    let active = session
        .tiles
        .iter()
        .filter(|&&tile| {
            world
                .get::<ActiveSwitch>(tile)
                .is_some_and(ActiveSwitch::is_active)
        })
        .count();
    log::info!("{active}/{} tiles still active", session.tiles.len());
}
