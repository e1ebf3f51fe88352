//=========================================================================
// Scene
//=========================================================================
//
// Authored description of one room: its background and hotspot set.
//
// The interactive set is recomputed from the current state on every
// query, so a hotspot hidden by a flag disappears on the very next hover
// or click after the flag is set.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::hotspot::{Hotspot, Position};
use super::state::GameState;

//=== Scene ===============================================================

/// Immutable room description.
#[derive(Debug, Clone)]
pub struct Scene {
    id: &'static str,
    name: &'static str,
    background: &'static str,
    hotspots: Vec<Hotspot>,
}

impl Scene {
    /// Creates a scene. Hotspots later in the list are drawn on top and win
    /// hit tests where regions overlap.
    pub fn new(
        id: &'static str,
        name: &'static str,
        background: &'static str,
        hotspots: Vec<Hotspot>,
    ) -> Self {
        Self {
            id,
            name,
            background,
            hotspots,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn background(&self) -> &'static str {
        self.background
    }

    /// Every authored hotspot, visible or not.
    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    /// Hotspot by id, if it is currently interactive.
    pub fn find(&self, id: &str, state: &GameState) -> Option<&Hotspot> {
        self.hotspots
            .iter()
            .find(|h| h.id() == id && h.is_visible(state))
    }

    /// Hotspots whose visibility predicate currently holds.
    pub fn interactive<'a>(&'a self, state: &'a GameState) -> impl Iterator<Item = &'a Hotspot> {
        self.hotspots.iter().filter(move |h| h.is_visible(state))
    }

    /// Topmost interactive hotspot under `point`.
    pub fn hotspot_at(&self, point: Position, state: &GameState) -> Option<&Hotspot> {
        self.hotspots
            .iter()
            .rev()
            .find(|h| h.is_visible(state) && h.contains(point))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
