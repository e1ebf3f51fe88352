//=========================================================================
// Input Buffer
//=========================================================================
//
// Per-frame store of platform input, split into two categories:
//
// - discrete:   presses, releases and the pointer leaving (order kept)
// - continuous: pointer position (only the latest survives the frame)
//
// The pointer leaving and re-entering within one frame collapses to
// whichever happened last, since the core replays continuous input first.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;
        const CONTINUOUS_BASE: usize = 4;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Continuous Event Handling ---------------------------------------

    /// Replaces any earlier event of the same kind.
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        if event.is_continuous() {
            self.discrete.retain(|e| *e != InputEvent::PointerLeft);
        }
        self.continuous.replace(event);
    }

    //--- Discrete Event Handling -----------------------------------------

    /// Appends a one-shot event. Key repeat duplicates are dropped.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if event == InputEvent::PointerLeft {
            self.continuous.clear();
        }
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Takes this frame's `(discrete, continuous)` events, or `None` when
    /// nothing was buffered.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = std::mem::take(&mut self.discrete);
        let continuous = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
