//=========================================================================
// Pause Menu
//=========================================================================
//
// Resume / save / load / restart overlay shown during gameplay.
//
//   Closed ◄──toggle──► Open ──request_restart──► ConfirmRestart
//                        ▲                              │
//                        └────────── answer(no) ────────┘
//                                   answer(yes) → Restart (menu closes)
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== MenuState ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
    /// "Restart to title?" awaiting an answer.
    ConfirmRestart,
}

//=== MenuOutcome =========================================================

/// What the game should do after a menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    None,
    Restart,
}

//=== PauseMenu ===========================================================

#[derive(Debug, Default)]
pub struct PauseMenu {
    state: MenuState,
}

impl PauseMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != MenuState::Closed
    }

    /// Opens a closed menu; closes an open one (including a pending
    /// confirmation, which counts as declining).
    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open | MenuState::ConfirmRestart => MenuState::Closed,
        };
        debug!("Menu {:?}", self.state);
    }

    pub fn resume(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Asks for restart confirmation. Only valid from the open menu.
    pub fn request_restart(&mut self) -> bool {
        if self.state != MenuState::Open {
            return false;
        }
        self.state = MenuState::ConfirmRestart;
        true
    }

    /// Answers a pending confirmation.
    pub fn answer(&mut self, accept: bool) -> MenuOutcome {
        if self.state != MenuState::ConfirmRestart {
            return MenuOutcome::None;
        }
        if accept {
            self.state = MenuState::Closed;
            MenuOutcome::Restart
        } else {
            self.state = MenuState::Open;
            MenuOutcome::None
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
