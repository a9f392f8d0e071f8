//! Audio bridge systems and the headless audio backend.
//!
//! - [`forward_audio_cmds`] drains ECS [`AudioCmd`] messages into the channel.
//! - [`poll_audio_messages`] non-blockingly drains the backend's replies into
//!   the ECS message queue each frame.
//! - [`update_bevy_audio_cmds`] / [`update_bevy_audio_messages`] advance the
//!   message queues so same-frame readers can observe writes.
//! - [`audio_thread`] is the backend loop. It keeps per-track playback state
//!   and answers every command; mixing and device output are left to the
//!   platform layer that embeds the crate.
//!
//! See also: [`crate::events::audio`] and [`crate::resources::audio`].

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use rustc_hash::FxHashMap;

/// Drain any pending messages from the audio thread into the ECS mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send error on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackState {
    Playing,
    Paused,
}

/// Playback bookkeeping of the backend, one entry per started track.
#[derive(Debug, Default)]
pub struct AudioBackendState {
    tracks: FxHashMap<String, TrackState>,
}

impl AudioBackendState {
    /// Apply one command and produce the reply, if any.
    pub fn apply(&mut self, cmd: AudioCmd) -> Option<AudioMessage> {
        match cmd {
            AudioCmd::PlayMusic { id, looped } => {
                log::debug!("[audio] play id='{}' looped={}", id, looped);
                self.tracks.insert(id.clone(), TrackState::Playing);
                Some(AudioMessage::MusicPlayStarted { id })
            }
            AudioCmd::PauseMusic { id } => match self.tracks.get_mut(&id) {
                Some(state) => {
                    *state = TrackState::Paused;
                    Some(AudioMessage::MusicPaused { id })
                }
                None => Some(AudioMessage::MusicNotPlaying { id }),
            },
            AudioCmd::ResumeMusic { id } => match self.tracks.get_mut(&id) {
                Some(state) => {
                    *state = TrackState::Playing;
                    Some(AudioMessage::MusicResumed { id })
                }
                None => Some(AudioMessage::MusicNotPlaying { id }),
            },
            AudioCmd::Shutdown => None,
        }
    }

    pub fn is_playing(&self, id: &str) -> bool {
        self.tracks.get(id) == Some(&TrackState::Playing)
    }
}

/// Entry point of the dedicated audio thread.
///
/// Blocks on the command channel until it receives [`AudioCmd::Shutdown`] or
/// the sender side is dropped.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    log::info!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );
    let mut state = AudioBackendState::default();

    for cmd in rx_cmd.iter() {
        if matches!(cmd, AudioCmd::Shutdown) {
            break;
        }
        if let Some(msg) = state.apply(cmd) {
            let _ = tx_msg.send(msg);
        }
    }
    log::info!("[audio] thread exiting");
}
