use bevy_ecs::message::Message;

/// Commands sent *to* the audio backend
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    PlayMusic { id: String, looped: bool },
    PauseMusic { id: String },
    ResumeMusic { id: String },
    Shutdown,
}

/// Messages sent *back* from the audio backend
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    MusicPlayStarted { id: String },
    MusicPaused { id: String },
    MusicResumed { id: String },
    MusicNotPlaying { id: String },
}
