//! Maze spawning.
//!
//! [`spawn_maze`] turns a [`MazeDefinition`] into tile entities. Each tile is
//! initialized once against the [`TileList`], starts hidden and inactive, and
//! gets its torch (if any) bound as the interactable it forwards activation
//! to. The direction variables of the maze are published to
//! [`WorldSignals`] first so tiles can resolve them.
//!
//! A maze either spawns completely or not at all: on a [`TileError`] every
//! tile and torch spawned so far is despawned and the [`TileList`] is put
//! back as it was.
use bevy_ecs::prelude::*;

use crate::components::activeswitch::ActiveSwitch;
use crate::components::animation::AnimationController;
use crate::components::interaction::Interactable;
use crate::components::mapposition::MapPosition;
use crate::components::signals::Signals;
use crate::components::tile::{Tile, TileError};
use crate::components::tint::Tint;
use crate::components::torch::{Torch, TorchLight};
use crate::resources::maze::{MazeDefinition, MazeTile};
use crate::resources::tilelist::TileList;
use crate::resources::worldsignals::WorldSignals;

/// Spawn a torch ready to be bound to a tile.
pub fn spawn_torch(world: &mut World, maze_tile: &MazeTile, fade_time: f32) -> Entity {
    world
        .spawn((
            Interactable::new("torch"),
            Torch::default(),
            TorchLight::new(1.0),
            MapPosition::from(maze_tile.position),
            ActiveSwitch::new(fade_time),
            Tint::transparent(),
            Signals::default(),
            AnimationController::torch(),
        ))
        .id()
}

fn spawn_tile(
    world: &mut World,
    maze_tile: &MazeTile,
    fade_time: f32,
) -> Result<Entity, TileError> {
    let entity = world
        .spawn((
            ActiveSwitch::new(fade_time),
            Tint::transparent(),
            MapPosition::from(maze_tile.position),
        ))
        .id();

    let mut tile = Tile::new();
    let registered = world.resource_scope(|_world, mut tiles: Mut<TileList>| {
        tile.initialize(entity, maze_tile, &mut tiles)
    });
    if let Err(err) = registered {
        world.despawn(entity);
        return Err(err);
    }
    if maze_tile.torch {
        let torch = spawn_torch(world, maze_tile, fade_time);
        tile.register_interactable(torch);
    }
    world.entity_mut(entity).insert(tile);
    Ok(entity)
}

/// Despawn `tiles` together with the interactables bound to them.
fn discard_tiles(world: &mut World, tiles: &[Entity]) {
    for &tile in tiles {
        if let Some(torch) = world.get::<Tile>(tile).and_then(Tile::interactable) {
            world.despawn(torch);
        }
        world.despawn(tile);
    }
}

/// Spawn every tile of `maze`, returning them in definition order.
pub fn spawn_maze(
    world: &mut World,
    maze: &MazeDefinition,
    fade_time: f32,
) -> Result<Vec<Entity>, TileError> {
    {
        let mut signals = world.get_resource_or_insert_with(WorldSignals::default);
        for (key, value) in &maze.variables {
            signals.set_vector(key.as_str(), *value);
        }
    }
    world.init_resource::<TileList>();
    let registry = world.resource::<TileList>().clone();

    let mut spawned = Vec::with_capacity(maze.tiles.len());
    for maze_tile in &maze.tiles {
        match spawn_tile(world, maze_tile, fade_time) {
            Ok(entity) => spawned.push(entity),
            Err(err) => {
                log::warn!(
                    "maze rejected, discarding {} spawned tiles: {err}",
                    spawned.len()
                );
                discard_tiles(world, &spawned);
                world.insert_resource(registry);
                return Err(err);
            }
        }
    }

    log::info!("spawned {} maze tiles", spawned.len());
    Ok(spawned)
}
