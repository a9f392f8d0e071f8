use bevy_ecs::prelude::Component;

/// Torch lying in the maze, picked up by interacting with it.
///
/// Positions are read from shared vector variables so the maze generator and
/// the spawn logic can move torches without touching the entity.
#[derive(Component, Clone, Debug)]
pub struct Torch {
    /// Vector variable holding where the player spawned.
    pub player_spawn_variable: String,
    /// Vector variable receiving the torch spawn point.
    pub spawn_variable: String,
    /// Vector variable holding where the torch should be placed.
    pub position_variable: String,
}

impl Default for Torch {
    fn default() -> Self {
        Self {
            player_spawn_variable: "player_spawn".to_string(),
            spawn_variable: "torch_spawn".to_string(),
            position_variable: "torch_position".to_string(),
        }
    }
}

/// Light emitted by a torch.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct TorchLight {
    pub intensity: f32,
}

impl TorchLight {
    pub fn new(intensity: f32) -> Self {
        Self { intensity }
    }
}
