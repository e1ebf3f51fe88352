//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into engine InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (engine type) → InputBuffer
//
// Stateful modifier tracking: Caches modifier state from ModifiersChanged
// events and applies it to all subsequent key/mouse events. Pointer
// positions are converted from physical pixels to scene units (0-100 on
// both axes) so the core never needs the window size.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::ElementState,
    event::{KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputProcessor ======================================================

/// Converts Winit events to engine InputEvents with stateful modifier tracking.
pub(crate) struct InputProcessor {
    current_modifiers: Modifiers,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
        }
    }

    //--- Modifier State Management ----------------------------------------

    /// Updates cached modifier state (applied to subsequent events).
    pub(crate) fn update_modifiers(&mut self, modifiers_state: ModifiersState) {
        self.current_modifiers = Modifiers::from(modifiers_state);
    }

    #[cfg(test)]
    pub(crate) fn current_modifiers(&self) -> Modifiers {
        self.current_modifiers
    }

    //--- Event Processing -------------------------------------------------

    /// Converts Winit KeyEvent to InputEvent (filters unmapped keys and
    /// auto-repeat).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        self.process_key(key_event.physical_key, key_event.state, key_event.repeat)
    }

    fn process_key(&self, physical_key: PhysicalKey, state: ElementState, repeat: bool) -> Option<InputEvent> {
        // Held keys would otherwise toggle and cycle every frame
        if repeat {
            return None;
        }

        let key_code = match physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        if matches!(key_code, KeyCode::Unidentified) {
            return None;
        }

        Some(self.create_key_input_event(key_code, state))
    }

    /// Converts Winit mouse button event to InputEvent (with modifiers).
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let mouse_button = MouseButton::from(button);

        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown {
                button: mouse_button,
                modifiers: self.current_modifiers,
            },
            ElementState::Released => InputEvent::MouseButtonUp {
                button: mouse_button,
                modifiers: self.current_modifiers,
            },
        }
    }

    /// Converts a cursor position to scene units.
    ///
    /// Returns `None` while the window has no area (minimized).
    pub(crate) fn process_pointer_move(
        &self,
        position: PhysicalPosition<f64>,
        window_size: PhysicalSize<u32>,
    ) -> Option<InputEvent> {
        if window_size.width == 0 || window_size.height == 0 {
            return None;
        }

        let x = position.x / f64::from(window_size.width) * 100.0;
        let y = position.y / f64::from(window_size.height) * 100.0;
        Some(InputEvent::PointerMoved {
            x: x.clamp(0.0, 100.0) as f32,
            y: y.clamp(0.0, 100.0) as f32,
        })
    }

    //--- Internal Helpers -------------------------------------------------

    fn create_key_input_event(&self, key: KeyCode, state: ElementState) -> InputEvent {
        match state {
            ElementState::Pressed => InputEvent::KeyDown {
                key,
                modifiers: self.current_modifiers,
            },
            ElementState::Released => InputEvent::KeyUp {
                key,
                modifiers: self.current_modifiers,
            },
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit ModifiersState to engine Modifiers.
///
/// Winit normalizes platform keys (macOS Cmd → Ctrl, Option → Alt).
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Converts Winit physical key codes to engine key codes.
///
/// Maps A-Z, 0-9 and the keys the game binds. Everything else returns
/// `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------

            Digit0 | Numpad0 => KeyCode::Digit0,
            Digit1 | Numpad1 => KeyCode::Digit1,
            Digit2 | Numpad2 => KeyCode::Digit2,
            Digit3 | Numpad3 => KeyCode::Digit3,
            Digit4 | Numpad4 => KeyCode::Digit4,
            Digit5 | Numpad5 => KeyCode::Digit5,
            Digit6 | Numpad6 => KeyCode::Digit6,
            Digit7 | Numpad7 => KeyCode::Digit7,
            Digit8 | Numpad8 => KeyCode::Digit8,
            Digit9 | Numpad9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter | NumpadEnter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Converts Winit mouse buttons to engine buttons.
///
/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_modifiers(shift: bool, ctrl: bool, alt: bool) -> ModifiersState {
        let mut state = ModifiersState::empty();
        if shift { state.insert(ModifiersState::SHIFT); }
        if ctrl { state.insert(ModifiersState::CONTROL); }
        if alt { state.insert(ModifiersState::ALT); }
        state
    }

    fn pointer_at(x: f64, y: f64, width: u32, height: u32) -> Option<InputEvent> {
        InputProcessor::new()
            .process_pointer_move(PhysicalPosition::new(x, y), PhysicalSize::new(width, height))
    }

    #[test]
    fn starts_with_no_modifiers() {
        let processor = InputProcessor::new();
        assert_eq!(processor.current_modifiers(), Modifiers::NONE);
    }

    #[test]
    fn update_modifiers_works() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(make_modifiers(true, false, true));

        let mods = processor.current_modifiers();
        assert!(mods.shift && !mods.ctrl && mods.alt);
    }

    #[test]
    fn key_events_carry_modifiers() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(make_modifiers(false, true, false));

        let down = processor.create_key_input_event(KeyCode::KeyS, ElementState::Pressed);
        assert_eq!(down, InputEvent::KeyDown { key: KeyCode::KeyS, modifiers: Modifiers::CTRL });

        let up = processor.create_key_input_event(KeyCode::KeyS, ElementState::Released);
        assert_eq!(up, InputEvent::KeyUp { key: KeyCode::KeyS, modifiers: Modifiers::CTRL });
    }

    #[test]
    fn auto_repeat_is_dropped() {
        let processor = InputProcessor::new();
        let escape = PhysicalKey::Code(WinitKeyCode::Escape);

        assert_eq!(
            processor.process_key(escape, ElementState::Pressed, false),
            Some(InputEvent::KeyDown { key: KeyCode::Escape, modifiers: Modifiers::NONE })
        );
        assert_eq!(processor.process_key(escape, ElementState::Pressed, true), None);
        assert!(processor.process_key(escape, ElementState::Released, false).is_some());
    }

    #[test]
    fn mouse_button_has_modifiers() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(make_modifiers(true, false, false));

        let event = processor.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed);
        assert_eq!(
            event,
            InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: Modifiers::SHIFT }
        );
    }

    //--- Pointer ----------------------------------------------------------

    #[test]
    fn pointer_is_scaled_to_scene_units() {
        match pointer_at(512.0, 480.0, 1024, 640) {
            Some(InputEvent::PointerMoved { x, y }) => {
                assert_eq!(x, 50.0);
                assert_eq!(y, 75.0);
            }
            other => panic!("Expected PointerMoved, found {:?}", other),
        }
    }

    #[test]
    fn pointer_outside_window_is_clamped() {
        match pointer_at(-10.0, 2000.0, 1024, 640) {
            Some(InputEvent::PointerMoved { x, y }) => assert_eq!((x, y), (0.0, 100.0)),
            other => panic!("Expected PointerMoved, found {:?}", other),
        }
    }

    #[test]
    fn minimized_window_yields_no_pointer() {
        assert!(pointer_at(10.0, 10.0, 0, 0).is_none());
    }

    //--- Conversions ------------------------------------------------------

    #[test]
    fn keycode_conversion_filters_unidentified() {
        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowUp), KeyCode::Unidentified);
    }

    #[test]
    fn keycode_conversion_digits_include_numpad() {
        assert_eq!(KeyCode::from(WinitKeyCode::Digit6), KeyCode::Digit6);
        assert_eq!(KeyCode::from(WinitKeyCode::Numpad6), KeyCode::Digit6);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::Enter);
    }

    #[test]
    fn keycode_conversion_letters_and_special() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::KeyA);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyZ), KeyCode::KeyZ);
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(WinitKeyCode::Tab), KeyCode::Tab);
    }

    #[test]
    fn mouse_button_conversion() {
        assert_eq!(MouseButton::from(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(WinitMouseButton::Right), MouseButton::Right);
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
    }
}
