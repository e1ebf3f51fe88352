//=========================================================================
// Configuration
//=========================================================================
//
// Static tuning for the game and its window.
//
// Every value has a compile-time default. `EngineBuilder::with_config`
// swaps in a customised `GameConfig` before the engine starts; nothing is
// reconfigured while running.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;
use std::time::Duration;

//=== Defaults ============================================================

pub const INTRO_FADE_IN: Duration = Duration::from_millis(1_500);
pub const PARTY_DWELL: Duration = Duration::from_millis(4_000);
pub const BLACKOUT_HOLD: Duration = Duration::from_millis(2_500);
pub const MURDER_REVEAL_HOLD: Duration = Duration::from_millis(3_000);
pub const PARTY_LINE_PERIOD: Duration = Duration::from_millis(2_000);

pub const DEFAULT_SAVE_DIR: &str = "saves";

//=== CutsceneTimings =====================================================

/// Delays between cut-scene phases.
///
/// Each delay starts when its phase is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutsceneTimings {
    /// Intro → Party.
    pub intro: Duration,
    /// Party → Blackout (dwell plus fade-out).
    pub party: Duration,
    /// Blackout → MurderReveal.
    pub blackout: Duration,
    /// MurderReveal → Gameplay.
    pub murder_reveal: Duration,
    /// Rotation period of the party chatter lines. Zero keeps the first line.
    pub party_line_period: Duration,
}

impl Default for CutsceneTimings {
    fn default() -> Self {
        Self {
            intro: INTRO_FADE_IN,
            party: PARTY_DWELL,
            blackout: BLACKOUT_HOLD,
            murder_reveal: MURDER_REVEAL_HOLD,
            party_line_period: PARTY_LINE_PERIOD,
        }
    }
}

impl CutsceneTimings {
    /// Total time from entering Intro to reaching Gameplay.
    pub fn total(&self) -> Duration {
        self.intro + self.party + self.blackout + self.murder_reveal
    }
}

//=== WindowConfig ========================================================

/// Initial window attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        // 16:10, matching the game monitor layout
        Self {
            title: "Hollywood Murder Mystery".to_string(),
            width: 1024,
            height: 640,
        }
    }
}

//=== GameConfig ==========================================================

/// Top-level configuration handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub timings: CutsceneTimings,
    pub window: WindowConfig,
    /// Directory for the file-backed save store.
    pub save_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timings: CutsceneTimings::default(),
            window: WindowConfig::default(),
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
        }
    }
}

impl GameConfig {
    pub fn with_timings(mut self, timings: CutsceneTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
