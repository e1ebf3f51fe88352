//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the windowing layer and the core logic thread.
//
// Components:
// - `interface`: messages in both directions and platform errors
// - `event_collector`: core-side draining of platform messages
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{CoreEvent, PlatformError, PlatformEvent};
