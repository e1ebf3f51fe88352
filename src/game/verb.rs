//=========================================================================
// Verbs
//=========================================================================
//
// Player-selectable action categories and their display names.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use serde::{Deserialize, Serialize};

//=== Verb ================================================================

/// Action category the player applies to a hotspot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Look,
    Pickup,
    Use,
    Open,
    Close,
    Talk,
    Push,
    Pull,
}

impl Verb {
    /// Verb bar order (4x2 grid, left to right, top to bottom).
    pub const BAR: [Verb; 8] = [
        Verb::Open,
        Verb::Close,
        Verb::Push,
        Verb::Pull,
        Verb::Look,
        Verb::Pickup,
        Verb::Talk,
        Verb::Use,
    ];

    /// Raw identifier (`"pickup"`, `"look"`, ...).
    pub fn id(self) -> &'static str {
        match self {
            Self::Look => "look",
            Self::Pickup => "pickup",
            Self::Use => "use",
            Self::Open => "open",
            Self::Close => "close",
            Self::Talk => "talk",
            Self::Push => "push",
            Self::Pull => "pull",
        }
    }

    /// Label shown on the verb bar and in the action line.
    pub fn display_name(self) -> &'static str {
        display_name_for(self.id())
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

//=== Display Table =======================================================

/// Maps a raw verb identifier to its display name.
///
/// Unknown identifiers are returned unchanged.
pub fn display_name_for(raw: &str) -> &str {
    match raw {
        "look" => "Look at",
        "pickup" => "Pick up",
        "use" => "Use",
        "open" => "Open",
        "close" => "Close",
        "talk" => "Talk to",
        "push" => "Push",
        "pull" => "Pull",
        other => other,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
