//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps raw input events to commands based on bindings and context.
//
// Architecture:
//   (key/button, modifiers, context) → HashMap → Command
//
// Only bindings in the active context resolve to commands.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::action::{Command, InputContext};
use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};
use crate::game::verb::Verb;

//=== ActionMapper ========================================================

/// Maps input events to commands via (input, modifiers, context) lookups.
pub(crate) struct ActionMapper {
    key_bindings: HashMap<(KeyCode, Modifiers, InputContext), Command>,
    mouse_bindings: HashMap<(MouseButton, Modifiers, InputContext), Command>,
    current_context: InputContext,
}

impl ActionMapper {
    /// Creates an empty mapper in the title context.
    pub(crate) fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
            mouse_bindings: HashMap::new(),
            current_context: InputContext::Title,
        }
    }

    /// Creates a mapper with the game's standard bindings.
    ///
    /// ```text
    /// Title     Enter / Space / left click  start
    /// Gameplay  1-8   verbs in bar order    0    clear verb
    ///           Tab   cycle inventory       Esc  menu
    /// Menu      S save   L load   R restart?   Y / N answer   Esc resume
    /// ```
    pub(crate) fn with_default_bindings() -> Self {
        let mut mapper = Self::new();

        mapper.bind_key(KeyCode::Enter, Command::StartGame, InputContext::Title);
        mapper.bind_key(KeyCode::Space, Command::StartGame, InputContext::Title);
        mapper.bind_mouse(MouseButton::Left, Command::StartGame, InputContext::Title);

        for (slot, verb) in Verb::BAR.into_iter().enumerate() {
            if let Some(key) = KeyCode::digit(slot as u8 + 1) {
                mapper.bind_key(key, Command::SelectVerb(verb), InputContext::Gameplay);
            }
        }
        mapper.bind_key(KeyCode::Digit0, Command::ClearVerb, InputContext::Gameplay);
        mapper.bind_key(KeyCode::Tab, Command::CycleItem, InputContext::Gameplay);
        mapper.bind_key(KeyCode::Escape, Command::ToggleMenu, InputContext::Gameplay);

        mapper.bind_key(KeyCode::Escape, Command::ToggleMenu, InputContext::Menu);
        mapper.bind_key(KeyCode::KeyS, Command::SaveGame, InputContext::Menu);
        mapper.bind_key(KeyCode::KeyL, Command::LoadGame, InputContext::Menu);
        mapper.bind_key(KeyCode::KeyR, Command::RequestRestart, InputContext::Menu);
        mapper.bind_key(KeyCode::KeyY, Command::Confirm, InputContext::Menu);
        mapper.bind_key(KeyCode::KeyN, Command::Decline, InputContext::Menu);

        mapper
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key (no modifiers).
    pub(crate) fn bind_key(&mut self, key: KeyCode, command: Command, context: InputContext) {
        self.bind_key_with_mods(key, Modifiers::NONE, command, context);
    }

    /// Binds a key with modifiers (exact match required).
    pub(crate) fn bind_key_with_mods(
        &mut self,
        key: KeyCode,
        modifiers: Modifiers,
        command: Command,
        context: InputContext,
    ) {
        self.key_bindings.insert((key, modifiers, context), command);
    }

    /// Binds a mouse button (no modifiers).
    pub(crate) fn bind_mouse(&mut self, button: MouseButton, command: Command, context: InputContext) {
        self.mouse_bindings.insert((button, Modifiers::NONE, context), command);
    }

    //--- Event Mapping ----------------------------------------------------

    /// Maps a press to a command in the active context. Releases and pointer
    /// motion never map.
    pub(crate) fn map_event(&self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::KeyDown { key, modifiers } => self
                .key_bindings
                .get(&(*key, *modifiers, self.current_context))
                .copied(),
            InputEvent::MouseButtonDown { button, modifiers } => self
                .mouse_bindings
                .get(&(*button, *modifiers, self.current_context))
                .copied(),
            _ => None,
        }
    }

    //--- Context ----------------------------------------------------------

    pub(crate) fn set_context(&mut self, context: InputContext) {
        self.current_context = context;
    }

    pub(crate) fn current_context(&self) -> InputContext {
        self.current_context
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn left_click() -> InputEvent {
        InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        }
    }

    fn mapped_in(mapper: &mut ActionMapper, context: InputContext, event: InputEvent) -> Option<Command> {
        mapper.set_context(context);
        mapper.map_event(&event)
    }

    //=====================================================================
    // Basic Binding
    //=====================================================================

    #[test]
    fn bind_and_map_simple_key() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Space, Command::StartGame, InputContext::Title);
        assert_eq!(mapper.map_event(&key_down(KeyCode::Space)), Some(Command::StartGame));
    }

    #[test]
    fn unbound_key_maps_to_nothing() {
        let mapper = ActionMapper::new();
        assert_eq!(mapper.map_event(&key_down(KeyCode::Space)), None);
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key_with_mods(KeyCode::KeyS, Modifiers::CTRL, Command::SaveGame, InputContext::Title);

        assert_eq!(mapper.map_event(&key_down(KeyCode::KeyS)), None);
        let ctrl_s = InputEvent::KeyDown { key: KeyCode::KeyS, modifiers: Modifiers::CTRL };
        assert_eq!(mapper.map_event(&ctrl_s), Some(Command::SaveGame));
    }

    #[test]
    fn releases_and_motion_never_map() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Space, Command::StartGame, InputContext::Title);

        let up = InputEvent::KeyUp { key: KeyCode::Space, modifiers: Modifiers::NONE };
        assert_eq!(mapper.map_event(&up), None);
        assert_eq!(mapper.map_event(&InputEvent::PointerMoved { x: 1.0, y: 1.0 }), None);
    }

    #[test]
    fn rebinding_replaces_previous() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Space, Command::StartGame, InputContext::Title);
        mapper.bind_key(KeyCode::Space, Command::ToggleMenu, InputContext::Title);
        assert_eq!(mapper.map_event(&key_down(KeyCode::Space)), Some(Command::ToggleMenu));
    }

    //=====================================================================
    // Contexts
    //=====================================================================

    #[test]
    fn same_key_differs_by_context() {
        let mut mapper = ActionMapper::with_default_bindings();

        assert_eq!(
            mapped_in(&mut mapper, InputContext::Gameplay, key_down(KeyCode::Escape)),
            Some(Command::ToggleMenu)
        );
        assert_eq!(
            mapped_in(&mut mapper, InputContext::Menu, key_down(KeyCode::KeyS)),
            Some(Command::SaveGame)
        );
        assert_eq!(mapped_in(&mut mapper, InputContext::Gameplay, key_down(KeyCode::KeyS)), None);
    }

    #[test]
    fn cutscene_has_no_bindings() {
        let mut mapper = ActionMapper::with_default_bindings();
        for key in [KeyCode::Enter, KeyCode::Space, KeyCode::Escape, KeyCode::Digit1, KeyCode::Tab] {
            assert_eq!(mapped_in(&mut mapper, InputContext::Cutscene, key_down(key)), None);
        }
        assert_eq!(mapped_in(&mut mapper, InputContext::Cutscene, left_click()), None);
    }

    //=====================================================================
    // Default Bindings
    //=====================================================================

    #[test]
    fn title_starts_on_enter_space_and_click() {
        let mut mapper = ActionMapper::with_default_bindings();
        for event in [key_down(KeyCode::Enter), key_down(KeyCode::Space), left_click()] {
            assert_eq!(mapped_in(&mut mapper, InputContext::Title, event), Some(Command::StartGame));
        }
    }

    #[test]
    fn digits_follow_verb_bar_order() {
        let mut mapper = ActionMapper::with_default_bindings();
        mapper.set_context(InputContext::Gameplay);

        assert_eq!(mapper.map_event(&key_down(KeyCode::Digit1)), Some(Command::SelectVerb(Verb::Open)));
        assert_eq!(mapper.map_event(&key_down(KeyCode::Digit5)), Some(Command::SelectVerb(Verb::Look)));
        assert_eq!(mapper.map_event(&key_down(KeyCode::Digit6)), Some(Command::SelectVerb(Verb::Pickup)));
        assert_eq!(mapper.map_event(&key_down(KeyCode::Digit8)), Some(Command::SelectVerb(Verb::Use)));
        assert_eq!(mapper.map_event(&key_down(KeyCode::Digit9)), None);
        assert_eq!(mapper.map_event(&key_down(KeyCode::Digit0)), Some(Command::ClearVerb));
    }

    #[test]
    fn gameplay_click_is_not_a_command() {
        let mut mapper = ActionMapper::with_default_bindings();
        assert_eq!(mapped_in(&mut mapper, InputContext::Gameplay, left_click()), None);
    }

    #[test]
    fn menu_answers() {
        let mut mapper = ActionMapper::with_default_bindings();
        mapper.set_context(InputContext::Menu);
        assert_eq!(mapper.map_event(&key_down(KeyCode::KeyR)), Some(Command::RequestRestart));
        assert_eq!(mapper.map_event(&key_down(KeyCode::KeyY)), Some(Command::Confirm));
        assert_eq!(mapper.map_event(&key_down(KeyCode::KeyN)), Some(Command::Decline));
        assert_eq!(mapper.map_event(&key_down(KeyCode::KeyL)), Some(Command::LoadGame));
    }

    #[test]
    fn context_switch_is_reported() {
        let mut mapper = ActionMapper::new();
        assert_eq!(mapper.current_context(), InputContext::Title);
        mapper.set_context(InputContext::Menu);
        assert_eq!(mapper.current_context(), InputContext::Menu);
    }
}
