//=========================================================================
// Input System
//=========================================================================
//
// Turns raw platform input into game inputs.
//
// Architecture:
//   InputEvent ──► InputSystem ──ActionMapper (context)──► GameInput
//                      │
//                      └─ tracks the last pointer position for clicks
//
// Events are processed one at a time so a command that changes the
// context (opening the menu, say) affects the very next event of the
// same frame.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub(crate) mod action_mapper;
pub mod event;

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use crate::game::hotspot::Position;
use action_mapper::ActionMapper;

//=== Public API ==========================================================

pub use action::{Command, InputContext};
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== GameInput ===========================================================

/// Input the game understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameInput {
    Command(Command),

    /// Pointer at a scene position.
    Hover(Position),

    /// Pointer left the scene.
    Leave,

    /// Unbound primary click at a scene position.
    Click(Position),
}

//=== InputSystem =========================================================

pub struct InputSystem {
    mapper: ActionMapper,
    pointer: Option<Position>,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    /// Creates an input system with the standard bindings.
    pub fn new() -> Self {
        Self {
            mapper: ActionMapper::with_default_bindings(),
            pointer: None,
        }
    }

    //--- Context ----------------------------------------------------------

    pub fn set_context(&mut self, context: InputContext) {
        if self.mapper.current_context() != context {
            trace!(target: "input", "Context {:?}", context);
            self.mapper.set_context(context);
        }
    }

    #[cfg(test)]
    pub(crate) fn pointer(&self) -> Option<Position> {
        self.pointer
    }

    //--- Processing -------------------------------------------------------

    /// Translates one event. Bound presses win over clicks.
    pub fn process(&mut self, event: &InputEvent) -> Option<GameInput> {
        if let Some(command) = self.mapper.map_event(event) {
            trace!(target: "input", "{:?} -> {:?}", event, command);
            return Some(GameInput::Command(command));
        }

        match *event {
            InputEvent::PointerMoved { x, y } => {
                let position = Position::new(x, y);
                self.pointer = Some(position);
                Some(GameInput::Hover(position))
            }
            InputEvent::PointerLeft => {
                self.pointer = None;
                Some(GameInput::Leave)
            }
            InputEvent::MouseButtonDown { button: MouseButton::Left, .. } => {
                let position = self.pointer;
                if position.is_none() {
                    trace!(target: "input", "Click with no known pointer position, ignoring");
                }
                position.map(GameInput::Click)
            }
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
