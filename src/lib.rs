//=========================================================================
// Hollywood Murder Mystery: Library Root
//=========================================================================
//
// Public API surface of the game.
//
// Layout:
// - `game`: phase machine, scene, verbs, inventory, interaction resolver
// - `core`: input mapping, scheduler and the logic-thread orchestrator
// - `audio`, `persistence`: collaborators behind traits
// - `config`: timings, window and save settings
//
// `platform` (winit) and `engine` stay private; applications go through
// `EngineBuilder`:
// ```no_run
// use hollywood_mystery::EngineBuilder;
//
// fn main() {
//     EngineBuilder::new().build().run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod audio;
pub mod config;
pub mod core;
pub mod game;
pub mod persistence;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
