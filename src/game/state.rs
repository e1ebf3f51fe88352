//=========================================================================
// Game State
//=========================================================================
//
// Aggregate root for everything the player can change.
//
// Fields are private. Consumers read through accessors and mutate through
// the operations below; phase writes and full resets are reserved for the
// phase controller (crate-private).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::hotspot::Position;
use super::inventory::{Inventory, InventoryItem};
use super::phase::GamePhase;
use super::verb::Verb;

//=== Constants ===========================================================

/// Set when the cut-scene hands over to gameplay.
pub const MURDER_REVEALED_FLAG: &str = "murderRevealed";

/// Room the player starts in.
pub const INITIAL_ROOM: &str = "breakroom";

const INITIAL_POSITION: Position = Position { x: 50.0, y: 75.0 };

//=== DialogState =========================================================

/// Conversation sub-state. Defined and persisted, not driven by any
/// dialogue tree yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogState {
    pub is_active: bool,
    pub speaker: Option<String>,
    pub node: Option<String>,
}

//=== GameState ===========================================================

/// Complete mutable game state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    phase: GamePhase,
    current_room: String,
    player_position: Position,
    inventory: Inventory,
    selected_verb: Option<Verb>,
    selected_item: Option<InventoryItem>,
    action_text: String,
    flags: BTreeMap<String, bool>,
    dialog: DialogState,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    //--- Construction -----------------------------------------------------

    /// Fresh state: title phase, empty inventory, no selection, no flags.
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Title,
            current_room: INITIAL_ROOM.to_string(),
            player_position: INITIAL_POSITION,
            inventory: Inventory::new(),
            selected_verb: None,
            selected_item: None,
            action_text: String::new(),
            flags: BTreeMap::new(),
            dialog: DialogState::default(),
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_room(&self) -> &str {
        &self.current_room
    }

    pub fn player_position(&self) -> Position {
        self.player_position
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn selected_verb(&self) -> Option<Verb> {
        self.selected_verb
    }

    pub fn selected_item(&self) -> Option<&InventoryItem> {
        self.selected_item.as_ref()
    }

    pub fn action_text(&self) -> &str {
        &self.action_text
    }

    /// Value of `key`; unset flags read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    pub fn flags(&self) -> &BTreeMap<String, bool> {
        &self.flags
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    //--- Selection --------------------------------------------------------

    /// Selects `verb` (or clears with `None`), dropping any selected item.
    pub fn select_verb(&mut self, verb: Option<Verb>) {
        self.selected_verb = verb;
        self.selected_item = None;
        self.action_text = verb.map(Verb::display_name).unwrap_or_default().to_string();
    }

    /// Selects `item` (or clears with `None`). The verb stays selected.
    pub fn select_item(&mut self, item: Option<InventoryItem>) {
        self.action_text = match (self.selected_verb, item.as_ref()) {
            (Some(verb), Some(item)) => format!("{} {}", verb.display_name(), item.name),
            (Some(verb), None) => verb.display_name().to_string(),
            (None, Some(item)) => item.name.clone(),
            (None, None) => String::new(),
        };
        self.selected_item = item;
    }

    pub fn set_action_text(&mut self, text: impl Into<String>) {
        self.action_text = text.into();
    }

    //--- Inventory --------------------------------------------------------

    /// Appends `item`; returns `false` if an item with that id is held.
    pub fn add_to_inventory(&mut self, item: InventoryItem) -> bool {
        debug!("Adding {:?} to inventory", item.id);
        self.inventory.add(item)
    }

    /// Removes the item with `id`, deselecting it if it was selected.
    pub fn remove_from_inventory(&mut self, id: &str) -> Option<InventoryItem> {
        let removed = self.inventory.remove(id)?;
        if self.selected_item.as_ref().is_some_and(|i| i.id == id) {
            self.selected_item = None;
        }
        Some(removed)
    }

    //--- World ------------------------------------------------------------

    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        let key = key.into();
        debug!("Flag {} = {}", key, value);
        self.flags.insert(key, value);
    }

    /// Commits a resolved click: the player walks to `walk_to` and `text`,
    /// when present, replaces the action line.
    pub fn complete_interaction(&mut self, walk_to: Position, text: Option<String>) {
        self.player_position = walk_to;
        if let Some(text) = text {
            self.action_text = text;
        }
    }

    pub fn change_room(&mut self, room: impl Into<String>, position: Position) {
        self.current_room = room.into();
        self.player_position = position;
    }

    //--- Dialog -----------------------------------------------------------

    pub fn start_dialog(&mut self, speaker: impl Into<String>, node: impl Into<String>) {
        self.dialog = DialogState {
            is_active: true,
            speaker: Some(speaker.into()),
            node: Some(node.into()),
        };
    }

    /// Moves to `next`, or ends the conversation with `None`.
    pub fn advance_dialog(&mut self, next: Option<String>) {
        match next {
            Some(node) => self.dialog.node = Some(node),
            None => self.dialog = DialogState::default(),
        }
    }

    //--- Controller-only --------------------------------------------------

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
