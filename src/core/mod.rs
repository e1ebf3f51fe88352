//=========================================================================
// Core Systems Orchestrator
//=========================================================================
//
// Central coordinator running the game on the logic (non-platform) thread.
//
// Architecture:
//   Receiver<PlatformEvent> ──► EventCollector ──► InputSystem ──► Game
//                                                                   │
//   Sender<CoreEvent>  ◄──────────── SceneView (on change) ◄────────┘
//
// Each tick:
//   1. Collect platform events (exit on close or disconnect)
//   2. Feed them through the input system one at a time
//   3. Fire due cut-scene timers
//   4. Publish the scene view if it changed
//   5. Sleep to hold the fixed tick rate
//
// Game time is the wall-clock time since the thread started, so a stalled
// tick catches up on the next one instead of drifting.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod input;
pub(crate) mod platform_bridge;
pub mod scheduler;

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::game::{Game, SceneView};
use input::InputSystem;
use platform_bridge::{CoreEvent, EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================

/// Owns the game and everything that feeds it on the logic thread.
pub(crate) struct CoreSystemsOrchestrator {
    game: Game,
    input_system: InputSystem,
    collector: EventCollector,
    outbox: Sender<CoreEvent>,
    last_view: Option<SceneView>,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(game: Game, receiver: Receiver<PlatformEvent>, outbox: Sender<CoreEvent>) -> Self {
        let mut input_system = InputSystem::new();
        input_system.set_context(game.input_context());

        Self {
            game,
            input_system,
            collector: EventCollector::new(receiver),
            outbox,
            last_view: None,
        }
    }

    //--- Thread -----------------------------------------------------------

    /// Spawns the logic thread ticking at `tps` until the platform closes.
    pub(crate) fn spawn_core_thread(self, tps: f64) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut core = self;
            let started = Instant::now();
            info!("Core thread running at {} TPS", tps);

            loop {
                let frame_start = Instant::now();

                if core.step(started.elapsed()) == TickControl::Exit {
                    info!("Core thread exiting.");
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }

    //--- Tick -------------------------------------------------------------

    /// Runs one tick at game time `now`.
    pub(crate) fn step(&mut self, now: Duration) -> TickControl {
        //--- Step 1: Gather platform events ------------------------------
        if self.collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        //--- Step 2: Inputs, one at a time --------------------------------
        for event in self.collector.events() {
            self.input_system.set_context(self.game.input_context());
            if let Some(input) = self.input_system.process(event) {
                self.game.handle(input, now);
            }
        }

        //--- Step 3: Timers -----------------------------------------------
        self.game.tick(now);
        self.input_system.set_context(self.game.input_context());

        //--- Step 4: Publish ----------------------------------------------
        self.publish_view()
    }

    #[cfg(test)]
    pub(crate) fn game(&self) -> &Game {
        &self.game
    }

    //--- Internal Helpers -------------------------------------------------

    fn publish_view(&mut self) -> TickControl {
        let view = self.game.view();
        if self.last_view.as_ref() == Some(&view) {
            return TickControl::Continue;
        }

        if self.outbox.send(CoreEvent::View(view.clone())).is_err() {
            debug!("Platform receiver dropped");
            return TickControl::Exit;
        }
        self.last_view = Some(view);
        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
