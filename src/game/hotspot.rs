//=========================================================================
// Hotspots
//=========================================================================
//
// Static, scene-scoped interactive regions.
//
// Architecture:
//   Hotspot
//     ├─ region: Region            (0-100 scene units)
//     ├─ effects: Verb → Effect
//     ├─ item_effects: item id → Effect   (Use + selected item)
//     └─ visibility: Visibility    (evaluated against GameState)
//
// Effects are a tagged variant, so dispatch is decided when the scene is
// authored rather than by inspecting values at click time.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::state::GameState;
use super::verb::Verb;

//=== Geometry ============================================================

/// Point in scene units (0-100 on both axes, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

//=== Effect ==============================================================

/// Procedure run against the live state; `None` leaves the action line as is.
pub type EffectFn = fn(&mut GameState) -> Option<String>;

/// What a verb does to a hotspot.
#[derive(Clone, Copy)]
pub enum Effect {
    /// Fixed line of text.
    Text(&'static str),

    /// May mutate flags and inventory, then optionally report text.
    Procedure(EffectFn),
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Procedure(_) => f.write_str("Procedure(..)"),
        }
    }
}

//=== Visibility ==========================================================

/// Whether a hotspot is part of the interactive set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Always,

    /// Hidden once the named flag is set (e.g. an item that was taken).
    UnlessFlag(&'static str),
}

impl Visibility {
    pub fn is_visible(self, state: &GameState) -> bool {
        match self {
            Self::Always => true,
            Self::UnlessFlag(flag) => !state.flag(flag),
        }
    }
}

//=== Hotspot =============================================================

/// Named interactive region with per-verb effects.
#[derive(Debug, Clone)]
pub struct Hotspot {
    id: &'static str,
    name: &'static str,
    region: Region,
    walk_to: Position,
    effects: HashMap<Verb, Effect>,
    item_effects: HashMap<&'static str, Effect>,
    visibility: Visibility,
}

impl Hotspot {
    //--- Construction -----------------------------------------------------

    /// Creates a hotspot with no effects. The walk-to point defaults to the
    /// bottom-centre of the region.
    pub fn new(id: &'static str, name: &'static str, region: Region) -> Self {
        Self {
            id,
            name,
            region,
            walk_to: Position::new(region.x + region.width / 2.0, region.y + region.height),
            effects: HashMap::new(),
            item_effects: HashMap::new(),
            visibility: Visibility::Always,
        }
    }

    pub fn text(mut self, verb: Verb, text: &'static str) -> Self {
        self.effects.insert(verb, Effect::Text(text));
        self
    }

    pub fn procedure(mut self, verb: Verb, procedure: EffectFn) -> Self {
        self.effects.insert(verb, Effect::Procedure(procedure));
        self
    }

    /// Effect when the named item is used on this hotspot.
    pub fn with_item(mut self, item_id: &'static str, effect: Effect) -> Self {
        self.item_effects.insert(item_id, effect);
        self
    }

    pub fn walk_to(mut self, position: Position) -> Self {
        self.walk_to = position;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    //--- Queries ----------------------------------------------------------

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn walk_to_position(&self) -> Position {
        self.walk_to
    }

    pub fn effect(&self, verb: Verb) -> Option<Effect> {
        self.effects.get(&verb).copied()
    }

    pub fn item_effect(&self, item_id: &str) -> Option<Effect> {
        self.item_effects.get(item_id).copied()
    }

    pub fn is_visible(&self, state: &GameState) -> bool {
        self.visibility.is_visible(state)
    }

    pub fn contains(&self, point: Position) -> bool {
        self.region.contains(point)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_contains_is_half_open() {
        let region = Region::new(10.0, 20.0, 5.0, 5.0);
        assert!(region.contains(Position::new(10.0, 20.0)));
        assert!(region.contains(Position::new(14.9, 24.9)));
        assert!(!region.contains(Position::new(15.0, 22.0)));
        assert!(!region.contains(Position::new(12.0, 25.0)));
        assert!(!region.contains(Position::new(9.9, 22.0)));
    }

    #[test]
    fn region_center() {
        assert_eq!(
            Region::new(0.0, 0.0, 10.0, 20.0).center(),
            Position::new(5.0, 10.0)
        );
    }

    #[test]
    fn builder_registers_effects() {
        fn noop(_: &mut GameState) -> Option<String> {
            None
        }

        let hotspot = Hotspot::new("lamp", "Lamp", Region::new(0.0, 0.0, 1.0, 1.0))
            .text(Verb::Look, "A lamp.")
            .procedure(Verb::Push, noop);

        assert!(matches!(hotspot.effect(Verb::Look), Some(Effect::Text("A lamp."))));
        assert!(matches!(hotspot.effect(Verb::Push), Some(Effect::Procedure(_))));
        assert!(hotspot.effect(Verb::Talk).is_none());
    }

    #[test]
    fn default_walk_to_is_bottom_center() {
        let hotspot = Hotspot::new("door", "Door", Region::new(10.0, 10.0, 20.0, 40.0));
        assert_eq!(hotspot.walk_to_position(), Position::new(20.0, 50.0));
    }

    #[test]
    fn unless_flag_hides_after_flag_set() {
        let hotspot = Hotspot::new("key", "Key", Region::new(0.0, 0.0, 1.0, 1.0))
            .visibility(Visibility::UnlessFlag("keyTaken"));
        let mut state = GameState::new();

        assert!(hotspot.is_visible(&state));
        state.set_flag("keyTaken", true);
        assert!(!hotspot.is_visible(&state));
    }

    #[test]
    fn effect_debug_hides_fn_pointer() {
        fn noop(_: &mut GameState) -> Option<String> {
            None
        }
        assert_eq!(format!("{:?}", Effect::Procedure(noop)), "Procedure(..)");
        assert_eq!(format!("{:?}", Effect::Text("hi")), "Text(\"hi\")");
    }
}
