//=========================================================================
// Input Event Types
//=========================================================================
//
// Platform-independent representation of keyboard and pointer input.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module, pointer already in scene units)
//         ↓
//    InputSystem ──ActionMapper──► GameInput
//         ↓
//    Game
// ```
//
// Equality ignores pointer coordinates so the platform buffer can
// coalesce a frame's worth of motion into the last position.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Side, thumb and macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key (location, not produced character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,

    /// Anything the platform reports that isn't listed above.
    Unidentified,
}

impl KeyCode {
    /// Number-row key for `n` (0-9).
    pub const fn digit(n: u8) -> Option<KeyCode> {
        Some(match n {
            0 => Self::Digit0,
            1 => Self::Digit1,
            2 => Self::Digit2,
            3 => Self::Digit3,
            4 => Self::Digit4,
            5 => Self::Digit5,
            6 => Self::Digit6,
            7 => Self::Digit7,
            8 => Self::Digit8,
            9 => Self::Digit9,
            _ => return None,
        })
    }
}

//=== Modifiers ===========================================================

/// Modifier key state. Bindings require an exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    /// Ctrl (Command on macOS).
    pub ctrl: bool,
    /// Alt (Option on macOS).
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// ```text
/// KeyDown{A, CTRL}   == KeyDown{A, CTRL}     ✓
/// KeyDown{A, CTRL}   == KeyDown{A, SHIFT}    ✗
/// PointerMoved{..}   == PointerMoved{..}     ✓ (coordinates ignored)
/// ```
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
    },

    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },

    MouseButtonDown {
        button: MouseButton,
        modifiers: Modifiers,
    },

    MouseButtonUp {
        button: MouseButton,
        modifiers: Modifiers,
    },

    /// Pointer position in scene units (0-100 on both axes).
    PointerMoved { x: f32, y: f32 },

    /// Pointer left the window.
    PointerLeft,
}

impl InputEvent {
    /// Whether the buffer should keep only the latest event of this kind.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::PointerMoved { .. })
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb })
            | (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                MouseButtonDown { button: a, modifiers: ma },
                MouseButtonDown { button: b, modifiers: mb },
            )
            | (
                MouseButtonUp { button: a, modifiers: ma },
                MouseButtonUp { button: b, modifiers: mb },
            ) => a == b && ma == mb,
            (PointerMoved { .. }, PointerMoved { .. }) => true,
            (PointerLeft, PointerLeft) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::MouseButtonDown { button, modifiers }
            | Self::MouseButtonUp { button, modifiers } => {
                button.hash(state);
                modifiers.hash(state);
            }
            // Coordinates are not part of the identity
            Self::PointerMoved { .. } | Self::PointerLeft => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    //=====================================================================
    // Equality
    //=====================================================================

    #[test]
    fn same_key_and_modifiers_are_equal() {
        assert_eq!(key_down(KeyCode::KeyA), key_down(KeyCode::KeyA));
    }

    #[test]
    fn modifiers_distinguish_keys() {
        let a = key_down(KeyCode::KeyS);
        let b = InputEvent::KeyDown { key: KeyCode::KeyS, modifiers: Modifiers::CTRL };
        assert_ne!(a, b);
    }

    #[test]
    fn press_and_release_differ() {
        let up = InputEvent::KeyUp { key: KeyCode::KeyA, modifiers: Modifiers::NONE };
        assert_ne!(key_down(KeyCode::KeyA), up);
    }

    #[test]
    fn pointer_moves_compare_equal_regardless_of_position() {
        let a = InputEvent::PointerMoved { x: 1.0, y: 2.0 };
        let b = InputEvent::PointerMoved { x: 90.0, y: 50.0 };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, InputEvent::PointerLeft);
    }

    #[test]
    fn key_and_button_families_differ() {
        let button = InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        };
        assert_ne!(key_down(KeyCode::KeyA), button);
    }

    //=====================================================================
    // Hashing
    //=====================================================================

    #[test]
    fn hash_follows_equality() {
        assert_eq!(hash_of(&key_down(KeyCode::Space)), hash_of(&key_down(KeyCode::Space)));
        assert_ne!(hash_of(&key_down(KeyCode::KeyA)), hash_of(&key_down(KeyCode::KeyB)));
    }

    //=====================================================================
    // Helpers
    //=====================================================================

    #[test]
    fn digit_lookup() {
        assert_eq!(KeyCode::digit(0), Some(KeyCode::Digit0));
        assert_eq!(KeyCode::digit(8), Some(KeyCode::Digit8));
        assert_eq!(KeyCode::digit(10), None);
    }

    #[test]
    fn only_pointer_motion_is_continuous() {
        assert!(InputEvent::PointerMoved { x: 0.0, y: 0.0 }.is_continuous());
        assert!(!InputEvent::PointerLeft.is_continuous());
        assert!(!key_down(KeyCode::Tab).is_continuous());
    }
}
