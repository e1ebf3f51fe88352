//=========================================================================
// Audio
//=========================================================================
//
// Background music keyed by game phase.
//
// Architecture:
//   phase change ──► AudioDirector ──track_for()──► AudioSink::play / pause
//                         ▲
//   pointer click ────────┘ on_user_interaction(): retry a blocked play
//
// One looping track at a time. Playback failures are never surfaced to
// the game: they are logged and the play is retried on the next pointer
// interaction.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::game::phase::GamePhase;

//=== Track Table =========================================================

pub const TITLE_TRACK: &str = "music/title.mp3";
pub const PARTY_TRACK: &str = "music/party.mp3";
pub const GAME_TRACK: &str = "music/game.mp3";

/// Track for `phase`, or `None` for silence.
pub fn track_for(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::Title => Some(TITLE_TRACK),
        GamePhase::Intro | GamePhase::Party => Some(PARTY_TRACK),
        GamePhase::Blackout | GamePhase::MurderReveal => None,
        GamePhase::Gameplay => Some(GAME_TRACK),
    }
}

//=== AudioError ==========================================================

#[derive(Debug, Error)]
pub enum AudioError {
    /// The host refuses playback until the user interacts.
    #[error("playback blocked until user interaction")]
    Blocked,
}

//=== AudioSink ===========================================================

/// Output for a single looping track.
pub trait AudioSink: Send {
    /// Switches to `track` (looping) and starts it.
    fn play(&mut self, track: &str) -> Result<(), AudioError>;

    fn pause(&mut self);
}

/// Sink that only logs. Used when no audio backend is configured.
#[derive(Debug, Default)]
pub struct LogAudioSink;

impl AudioSink for LogAudioSink {
    fn play(&mut self, track: &str) -> Result<(), AudioError> {
        info!(target: "audio", "Now playing {}", track);
        Ok(())
    }

    fn pause(&mut self) {
        info!(target: "audio", "Music paused");
    }
}

//=== AudioDirector =======================================================

/// Follows the game phase and drives the sink.
pub struct AudioDirector {
    sink: Box<dyn AudioSink>,
    /// Source currently loaded into the sink.
    current: Option<&'static str>,
    playing: bool,
    /// A play failed and should be retried on the next interaction.
    retry_pending: bool,
}

impl AudioDirector {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            sink,
            current: None,
            playing: false,
            retry_pending: false,
        }
    }

    pub fn current_track(&self) -> Option<&'static str> {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn retry_pending(&self) -> bool {
        self.retry_pending
    }

    /// Reacts to a phase change: swaps the source only if the track differs,
    /// pauses on silence.
    pub fn on_phase_change(&mut self, phase: GamePhase) {
        match track_for(phase) {
            None => {
                if self.playing {
                    self.sink.pause();
                }
                self.playing = false;
                self.retry_pending = false;
            }
            Some(track) if self.current == Some(track) && self.playing => {
                debug!(target: "audio", "{} keeps {}", phase, track);
            }
            Some(track) => {
                self.current = Some(track);
                self.try_play(track);
            }
        }
    }

    /// Retries a blocked play after the user clicked.
    pub fn on_user_interaction(&mut self) {
        if !self.retry_pending {
            return;
        }
        if let Some(track) = self.current {
            debug!(target: "audio", "Retrying {} after interaction", track);
            self.try_play(track);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn try_play(&mut self, track: &'static str) {
        match self.sink.play(track) {
            Ok(()) => {
                self.playing = true;
                self.retry_pending = false;
            }
            Err(e) => {
                debug!(target: "audio", "Play of {} failed: {}", track, e);
                self.playing = false;
                self.retry_pending = true;
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
