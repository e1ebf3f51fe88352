//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side drain of platform messages into one ordered list of input
// events per tick.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → frame_events → TickControl
//
// Within each platform frame the coalesced pointer position goes ahead of
// that frame's presses, so a click lands where the pointer ended up.
// Draining is bounded so a flood of messages cannot stall a tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    frame_events: Vec<InputEvent>,
}

impl EventCollector {
    /// Platform messages taken per tick; the rest wait for the next one.
    const MAX_MESSAGES_PER_TICK: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            frame_events: Vec::with_capacity(16),
        }
    }

    /// Replaces the previous tick's events with whatever the platform sent
    /// since. Returns `Exit` on window close or a dropped sender.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.frame_events.clear();

        for taken in 0..Self::MAX_MESSAGES_PER_TICK {
            let message = match self.receiver.try_recv() {
                Ok(message) => message,
                Err(TryRecvError::Empty) => {
                    if taken > 0 {
                        trace!(target: "core", "{} platform messages this tick", taken);
                    }
                    return TickControl::Continue;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
            };

            match message {
                PlatformEvent::Inputs { discrete, continuous } => {
                    self.frame_events.extend(continuous);
                    self.frame_events.extend(discrete);
                }
                PlatformEvent::WindowClosed => return TickControl::Exit,
            }
        }

        warn!(
            "Platform backlog: {} messages left for next tick",
            self.receiver.len()
        );
        TickControl::Continue
    }

    /// This tick's events in processing order.
    pub(crate) fn events(&self) -> impl Iterator<Item = &InputEvent> {
        self.frame_events.iter()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
