//=========================================================================
// Commands & Input Context
//=========================================================================
//
// Commands: what a bound key or button asks the game to do.
// Contexts: which set of bindings is live, following the game phase and
// the pause menu.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::game::phase::GamePhase;
use crate::game::verb::Verb;

//=== Command =============================================================

/// High-level request produced by a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Leave the title screen.
    StartGame,

    SelectVerb(Verb),
    ClearVerb,

    /// Select the next inventory item (wrapping to none).
    CycleItem,

    ToggleMenu,
    SaveGame,
    LoadGame,

    /// Ask to restart to the title screen.
    RequestRestart,

    /// Answer a pending confirmation.
    Confirm,
    Decline,
}

//=== InputContext ========================================================

/// Identifies which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputContext {
    #[default]
    Title,

    /// Any timed phase between title and gameplay.
    Cutscene,

    Gameplay,

    /// Pause menu open over gameplay.
    Menu,
}

impl InputContext {
    /// Context for `phase` with the menu open or closed.
    pub fn for_phase(phase: GamePhase, menu_open: bool) -> Self {
        match phase {
            GamePhase::Title => Self::Title,
            GamePhase::Gameplay if menu_open => Self::Menu,
            GamePhase::Gameplay => Self::Gameplay,
            _ => Self::Cutscene,
        }
    }

    /// Whether pointer hover and clicks reach the scene.
    pub fn accepts_pointer(self) -> bool {
        self == Self::Gameplay
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
