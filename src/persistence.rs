//=========================================================================
// Persistence
//=========================================================================
//
// Best-effort snapshot of the game state in a key-value store.
//
// Architecture:
//   GameState ──SaveData──serde_json──► SaveStore::write(SAVE_KEY, blob)
//   GameState ◄──SaveData──serde_json── SaveStore::read(SAVE_KEY)
//
// The snapshot is opaque: no schema version, no partial saves. Callers
// decide what to do with errors; the game only logs them.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::game::state::GameState;

//=== Constants ===========================================================

/// Fixed key the snapshot is stored under.
pub const SAVE_KEY: &str = "hollywood-murder-mystery-save";

pub const DEFAULT_SLOT: u32 = 1;

//=== SaveError ===========================================================

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("save data is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no saved game under {0:?}")]
    NotFound(String),
}

//=== SaveStore ===========================================================

/// Key-value blob storage.
pub trait SaveStore: Send {
    fn write(&mut self, key: &str, blob: &str) -> Result<(), SaveError>;

    /// Returns `None` if nothing is stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, SaveError>;
}

//--- FileStore -----------------------------------------------------------

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SaveStore for FileStore {
    fn write(&mut self, key: &str, blob: &str) -> Result<(), SaveError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        fs::write(&path, blob)?;
        debug!("Wrote {} bytes to {}", blob.len(), path.display());
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>, SaveError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

//--- MemoryStore ---------------------------------------------------------

/// In-process store, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn write(&mut self, key: &str, blob: &str) -> Result<(), SaveError> {
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>, SaveError> {
        Ok(self.blobs.get(key).cloned())
    }
}

//=== SaveData ============================================================

/// Serialized snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveData {
    pub slot: u32,
    pub saved_at: DateTime<Utc>,
    pub game_state: GameState,
}

impl SaveData {
    pub fn new(slot: u32, game_state: GameState) -> Self {
        Self {
            slot,
            saved_at: Utc::now(),
            game_state,
        }
    }
}

//=== Operations ==========================================================

/// Snapshots `state` into `store` under [`SAVE_KEY`].
pub fn save_game(store: &mut dyn SaveStore, state: &GameState, slot: u32) -> Result<SaveData, SaveError> {
    let data = SaveData::new(slot, state.clone());
    let blob = serde_json::to_string_pretty(&data)?;
    store.write(SAVE_KEY, &blob)?;
    info!("Game saved (slot {}, phase {})", slot, state.phase());
    Ok(data)
}

/// Reads the snapshot stored under [`SAVE_KEY`].
pub fn load_game(store: &dyn SaveStore) -> Result<SaveData, SaveError> {
    let blob = store
        .read(SAVE_KEY)?
        .ok_or_else(|| SaveError::NotFound(SAVE_KEY.to_string()))?;
    let data: SaveData = serde_json::from_str(&blob)?;
    info!("Game loaded (slot {}, saved {})", data.slot, data.saved_at);
    Ok(data)
}

//=========================================================================
// Unit Tests
//=========================================================================
