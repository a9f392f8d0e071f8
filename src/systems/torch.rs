//! Torch behavior.
//!
//! - [`torch_interact_observer`] is the torch's side of the interaction
//!   contract: picking it up fires the pick-up animation trigger, puts the
//!   light out and refills the actor's own torch.
//! - [`set_torch_positions`] publishes the player spawn as the torch spawn
//!   and places every torch at its position variable.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::PlayerTorch;
use crate::components::signals::Signals;
use crate::components::torch::{Torch, TorchLight};
use crate::events::interaction::InteractEvent;
use crate::resources::worldsignals::WorldSignals;

/// Animation trigger raised on a torch when it is picked up.
pub const PICK_UP_TORCH: &str = "pick_up_torch";
/// Signal mirroring the torch's light intensity.
pub const LIGHT_SIGNAL: &str = "light";

pub fn torch_interact_observer(
    trigger: On<InteractEvent>,
    mut torches: Query<(&mut TorchLight, Option<&mut Signals>), With<Torch>>,
    mut carriers: Query<&mut PlayerTorch>,
) {
    let event = trigger.event();
    let Ok((mut light, signals)) = torches.get_mut(event.target) else {
        return;
    };
    light.intensity = 0.0;
    if let Some(mut signals) = signals {
        signals.set_flag(PICK_UP_TORCH);
        signals.set_scalar(LIGHT_SIGNAL, light.intensity);
    }

    match carriers.get_mut(event.actor) {
        Ok(mut carried) => {
            carried.refill();
            log::info!(
                "{:?} picked up torch {:?} (refills: {})",
                event.actor,
                event.target,
                carried.refills
            );
        }
        Err(_) => log::warn!(
            "torch_interact_observer: {:?} carries no torch to refill",
            event.actor
        ),
    }
}

pub fn set_torch_positions(
    mut world_signals: ResMut<WorldSignals>,
    mut query: Query<(&Torch, &mut MapPosition)>,
) {
    for (torch, mut position) in query.iter_mut() {
        if let Some(spawn) = world_signals.get_vector(&torch.player_spawn_variable) {
            world_signals.set_vector(torch.spawn_variable.as_str(), spawn);
        }
        match world_signals.get_vector(&torch.position_variable) {
            Some(cell) => *position = MapPosition::from(cell),
            None => log::debug!(
                "torch position variable '{}' is unset",
                torch.position_variable
            ),
        }
    }
}
