//! Channel ends of the footstep audio backend.
//!
//! The only sound this core drives is the player's footstep loop: started
//! paused by [`spawn_player`](crate::game::spawn_player), then toggled by the
//! movement system with [`AudioCmd`] messages.
//! [`forward_audio_cmds`](crate::systems::audio::forward_audio_cmds) moves
//! those messages onto the backend thread through an [`AudioBridge`].
//!
//! Without a bridge the schedule still runs; commands simply stay in the ECS
//! queue. The headless runner calls [`setup_audio`] before building the maze
//! so the loop's initial play/pause reaches the backend.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::thread::JoinHandle;

#[derive(Resource)]
pub struct AudioBridge {
    /// Footstep commands bound for the backend.
    pub tx_cmd: Sender<AudioCmd>,
    /// Track state replies from the backend.
    pub rx_msg: Receiver<AudioMessage>,
    pub handle: JoinHandle<()>,
}

/// Start the backend thread and insert the bridge plus both message queues.
pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded();
    let (tx_msg, rx_msg) = unbounded();
    let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));

    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<AudioMessage>>();
    log::debug!("footstep audio backend started");
}

/// Stop the backend and wait for it. Does nothing if audio was never set up.
pub fn shutdown_audio(world: &mut World) {
    let Some(bridge) = world.remove_resource::<AudioBridge>() else {
        return;
    };
    if bridge.tx_cmd.send(AudioCmd::Shutdown).is_err() {
        log::warn!("footstep audio backend already gone");
    }
    if bridge.handle.join().is_err() {
        log::error!("footstep audio backend panicked");
    }
}
