//=========================================================================
// Phase Controller
//=========================================================================
//
// Owns the game state and drives the scripted cut-scene.
//
// Timers (single-shot unless noted, scheduled when the phase is entered):
//
//   Title ──press_start──► Intro ──intro──► Party ──party──► Blackout
//                                             │
//                              (repeating: rotate chatter line)
//
//   Blackout ──blackout──► MurderReveal ──murder_reveal──► on_intro_complete
//                                                            │
//                                   set murderRevealed, then Gameplay
//
// Every timer is owned by the phase that scheduled it. Leaving a phase
// cancels its timers; reaching Gameplay or Title tears the cut-scene view
// down and cancels whatever is left.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::phase::GamePhase;
use super::state::{GameState, MURDER_REVEALED_FLAG};
use crate::config::CutsceneTimings;
use crate::core::scheduler::Scheduler;

//=== CutsceneCue =========================================================

/// Payload of a cut-scene timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CutsceneCue {
    /// Move on to the given phase.
    Advance(GamePhase),

    /// Show the next party chatter line.
    RotateLine,

    /// Cut-scene finished.
    Complete,
}

//=== PhaseController =====================================================

/// Cut-scene state machine and owner of [`GameState`].
pub struct PhaseController {
    state: GameState,
    timers: Scheduler<GamePhase, CutsceneCue>,
    timings: CutsceneTimings,
    party_lines: &'static [&'static str],
    party_line: usize,
    cutscene_mounted: bool,
    intro_completed: bool,
}

impl PhaseController {
    //--- Construction -----------------------------------------------------

    pub fn new(timings: CutsceneTimings, party_lines: &'static [&'static str]) -> Self {
        Self {
            state: GameState::new(),
            timers: Scheduler::new(),
            timings,
            party_lines,
            party_line: 0,
            cutscene_mounted: false,
            intro_completed: false,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// Chatter line currently shown during the party.
    pub fn party_line(&self) -> Option<&'static str> {
        if self.phase() == GamePhase::Party {
            self.party_lines.get(self.party_line).copied()
        } else {
            None
        }
    }

    pub fn is_cutscene_mounted(&self) -> bool {
        self.cutscene_mounted
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    //--- Transitions ------------------------------------------------------

    /// Starts the cut-scene from the title screen. Ignored elsewhere.
    ///
    /// Returns `true` if the game started.
    pub fn press_start(&mut self, now: Duration) -> bool {
        if self.phase() != GamePhase::Title {
            debug!("Start pressed in {}, ignoring", self.phase());
            return false;
        }
        info!("Starting game ({:?} cut-scene)", self.timings.total());
        self.set_phase(GamePhase::Intro, now);
        true
    }

    /// Overwrites the current phase unconditionally.
    ///
    /// `at` is the instant the phase is entered; its timers count from
    /// there. Setting the current phase again keeps the pending timers.
    pub fn set_phase(&mut self, phase: GamePhase, at: Duration) {
        let previous = self.state.phase();
        if previous != phase {
            self.timers.cancel_owner(previous);
            debug!("Phase {} -> {} at {:?}", previous, phase, at);
        }

        self.state.set_phase(phase);

        match phase {
            GamePhase::Title => {
                self.intro_completed = false;
                self.teardown_cutscene();
            }
            GamePhase::Gameplay => self.teardown_cutscene(),
            _ => {
                if previous != phase {
                    match phase {
                        // A new run of the cut-scene may complete again
                        GamePhase::Intro => self.intro_completed = false,
                        GamePhase::Party => self.party_line = 0,
                        _ => {}
                    }
                }
                self.cutscene_mounted = true;
                self.schedule_phase_timers(phase, at);
            }
        }
    }

    /// Ends the cut-scene: sets `murderRevealed`, then enters Gameplay.
    ///
    /// Runs at most once per run of the cut-scene.
    pub fn on_intro_complete(&mut self, at: Duration) {
        if self.intro_completed {
            debug!("Intro already completed, ignoring");
            return;
        }
        self.intro_completed = true;
        self.state.set_flag(MURDER_REVEALED_FLAG, true);
        self.set_phase(GamePhase::Gameplay, at);
        info!("Cut-scene complete, gameplay begins");
    }

    /// Fires every timer due at `now`, one at a time in deadline order.
    ///
    /// Returns `true` if the phase changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let before = self.phase();

        while let Some(fired) = self.timers.pop_due(now) {
            match fired.payload {
                CutsceneCue::Advance(next) => self.set_phase(next, fired.due),
                CutsceneCue::RotateLine => self.rotate_party_line(),
                CutsceneCue::Complete => self.on_intro_complete(fired.due),
            }
        }

        self.phase() != before
    }

    /// Discards the cut-scene view and every timer it scheduled.
    pub fn teardown_cutscene(&mut self) {
        let cancelled = self.timers.cancel_all();
        if self.cutscene_mounted || cancelled > 0 {
            debug!("Cut-scene torn down ({} timer(s) cancelled)", cancelled);
        }
        self.cutscene_mounted = false;
    }

    /// Back to a fresh title screen.
    pub fn reset(&mut self) {
        info!("Resetting to title");
        self.teardown_cutscene();
        self.state.reset();
        self.party_line = 0;
        self.intro_completed = false;
    }

    /// Replaces the state with a snapshot and resumes its phase.
    pub(crate) fn restore(&mut self, state: GameState, now: Duration) {
        self.teardown_cutscene();
        self.intro_completed = state.phase() == GamePhase::Gameplay;
        self.party_line = 0;
        let phase = state.phase();
        self.state = state;
        self.set_phase(phase, now);
        info!("Restored snapshot in {}", phase);
    }

    //--- Internal Helpers -------------------------------------------------

    fn schedule_phase_timers(&mut self, phase: GamePhase, at: Duration) {
        let t = self.timings;
        match phase {
            GamePhase::Intro => {
                self.timers.schedule_once(phase, at, t.intro, CutsceneCue::Advance(GamePhase::Party));
            }
            GamePhase::Party => {
                self.timers.schedule_once(phase, at, t.party, CutsceneCue::Advance(GamePhase::Blackout));
                if self.party_lines.is_empty() || t.party_line_period.is_zero() {
                    debug!("Party chatter does not rotate");
                } else {
                    self.timers.schedule_repeating(phase, at, t.party_line_period, CutsceneCue::RotateLine);
                }
            }
            GamePhase::Blackout => {
                self.timers.schedule_once(
                    phase,
                    at,
                    t.blackout,
                    CutsceneCue::Advance(GamePhase::MurderReveal),
                );
            }
            GamePhase::MurderReveal => {
                self.timers.schedule_once(phase, at, t.murder_reveal, CutsceneCue::Complete);
            }
            GamePhase::Title | GamePhase::Gameplay => {}
        }
    }

    fn rotate_party_line(&mut self) {
        if !self.party_lines.is_empty() {
            self.party_line = (self.party_line + 1) % self.party_lines.len();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
