//=========================================================================
// Game Phase
//=========================================================================
//
// Top-level stage of the scripted narrative.
//
// Sequence:
//   Title ─start─► Intro ─► Party ─► Blackout ─► MurderReveal ─► Gameplay
//     ▲                                                             │
//     └──────────────────────── reset ──────────────────────────────┘
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use serde::{Deserialize, Serialize};

//=== GamePhase ===========================================================

/// Top-level stage of the game. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GamePhase {
    #[default]
    Title,
    Intro,
    Party,
    Blackout,
    MurderReveal,
    Gameplay,
}

impl GamePhase {
    /// All phases in narrative order.
    pub const SEQUENCE: [GamePhase; 6] = [
        GamePhase::Title,
        GamePhase::Intro,
        GamePhase::Party,
        GamePhase::Blackout,
        GamePhase::MurderReveal,
        GamePhase::Gameplay,
    ];

    /// The phase that follows this one, or `None` for the terminal phase.
    pub fn next(self) -> Option<GamePhase> {
        match self {
            Self::Title => Some(Self::Intro),
            Self::Intro => Some(Self::Party),
            Self::Party => Some(Self::Blackout),
            Self::Blackout => Some(Self::MurderReveal),
            Self::MurderReveal => Some(Self::Gameplay),
            Self::Gameplay => None,
        }
    }

    /// Whether this phase is part of the timed cut-scene.
    pub fn is_cutscene(self) -> bool {
        matches!(
            self,
            Self::Intro | Self::Party | Self::Blackout | Self::MurderReveal
        )
    }

    /// Stable string form, as used by the audio table and save files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Intro => "intro",
            Self::Party => "party",
            Self::Blackout => "blackout",
            Self::MurderReveal => "murder-reveal",
            Self::Gameplay => "gameplay",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
