//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use hollywood_mystery::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};

// Configuration
pub use crate::config::{CutsceneTimings, GameConfig, WindowConfig};

// Game model
pub use crate::game::hotspot::{Hotspot, Position, Region};
pub use crate::game::inventory::InventoryItem;
pub use crate::game::phase::GamePhase;
pub use crate::game::state::GameState;
pub use crate::game::verb::Verb;
pub use crate::game::{Game, SceneView};

// Input
pub use crate::core::input::{Command, GameInput, InputContext, KeyCode, Modifiers, MouseButton};

// Collaborators
pub use crate::audio::{AudioDirector, AudioError, AudioSink, LogAudioSink};
pub use crate::persistence::{FileStore, MemoryStore, SaveData, SaveError, SaveStore};
