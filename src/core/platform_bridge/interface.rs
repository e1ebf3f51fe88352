//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages and errors crossing the platform/core thread boundary.
//
//   Platform ──PlatformEvent──► Core
//   Platform ◄──CoreEvent────── Core
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;
use crate::game::SceneView;

//=== PlatformEvent =======================================================

/// Events sent from platform to core.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched input for one frame.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested.
    WindowClosed,
}

//=== CoreEvent ===========================================================

/// Events sent from core back to the platform.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CoreEvent {
    /// The presentable view changed.
    View(SceneView),
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug, Error)]
pub(crate) enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(String),

    #[error("event loop error: {0}")]
    EventLoopExecution(String),
}
