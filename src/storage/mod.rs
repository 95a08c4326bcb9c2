//! # Storage Module - Saved Traveler State
//!
//! Persists the traveler's lives between sessions in an embedded sled database.
//!
//! ## Layout
//!
//! ```text
//! <data_dir>/victory_road.db/     ← sled database
//!   tree "travelers"
//!     travelers:<lowercased name> → bincode(SaveRecord)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use victory_road::storage::TravelerStore;
//!
//! fn main() -> Result<(), victory_road::errors::StorageError> {
//!     let store = TravelerStore::open("./data")?;
//!     store.save_lives("Traveler1", 4)?;
//!     assert_eq!(store.load_lives("Traveler1")?, Some(4));
//!     store.close()
//! }
//! ```
//!
//! Saves are upserts: one record per traveler, replaced on every save and
//! flushed before the call returns. The database handle is released when the
//! store is closed or dropped, so error paths never leave it open.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use sled::IVec;

use crate::errors::StorageError;

pub const SAVE_SCHEMA_VERSION: u8 = 1;
pub const DB_DIR_NAME: &str = "victory_road.db";

const TREE_TRAVELERS: &str = "travelers";
const KEY_PREFIX: &str = "travelers:";

/// One saved traveler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub name: String,
    pub lives: u32,
    pub updated_at: DateTime<Utc>,
    pub schema_version: u8,
}

impl SaveRecord {
    pub fn new(name: &str, lives: u32) -> Self {
        Self {
            name: name.to_string(),
            lives,
            updated_at: Utc::now(),
            schema_version: SAVE_SCHEMA_VERSION,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Sled-backed persistence for saved lives.
pub struct TravelerStore {
    db: sled::Db,
    travelers: sled::Tree,
    path: PathBuf,
}

impl TravelerStore {
    /// Open (or create) the store under `data_dir`.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, StorageError> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;
        let path = data_dir.join(DB_DIR_NAME);
        let db = sled::open(&path)?;
        let travelers = db.open_tree(TREE_TRAVELERS)?;
        debug!("opened traveler store at {}", path.display());
        Ok(Self {
            db,
            travelers,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn traveler_key(name: &str) -> Vec<u8> {
        format!("{}{}", KEY_PREFIX, name.to_ascii_lowercase()).into_bytes()
    }

    fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, StorageError> {
        Ok(bincode::serialize(value)?)
    }

    fn deserialize<T: serde::de::DeserializeOwned>(bytes: IVec) -> Result<T, StorageError> {
        Ok(bincode::deserialize::<T>(&bytes)?)
    }

    /// Insert or update a traveler record.
    pub fn put_record(&self, mut record: SaveRecord) -> Result<(), StorageError> {
        record.schema_version = SAVE_SCHEMA_VERSION;
        record.touch();
        let key = Self::traveler_key(&record.name);
        let bytes = Self::serialize(&record)?;
        self.travelers.insert(key, bytes)?;
        self.travelers.flush()?;
        Ok(())
    }

    /// Fetch a traveler record, `None` if the traveler has never saved.
    pub fn get_record(&self, name: &str) -> Result<Option<SaveRecord>, StorageError> {
        let key = Self::traveler_key(name);
        let Some(bytes) = self.travelers.get(&key)? else {
            return Ok(None);
        };
        let record: SaveRecord = Self::deserialize(bytes)?;
        if record.schema_version != SAVE_SCHEMA_VERSION {
            return Err(StorageError::SchemaMismatch {
                entity: "traveler",
                expected: SAVE_SCHEMA_VERSION,
                found: record.schema_version,
            });
        }
        Ok(Some(record))
    }

    pub fn save_lives(&self, name: &str, lives: u32) -> Result<(), StorageError> {
        self.put_record(SaveRecord::new(name, lives))?;
        debug!("saved lives={} for {}", lives, name);
        Ok(())
    }

    pub fn load_lives(&self, name: &str) -> Result<Option<u32>, StorageError> {
        Ok(self.get_record(name)?.map(|r| r.lives))
    }

    /// Remove a traveler's save. Returns whether a record existed.
    pub fn delete(&self, name: &str) -> Result<bool, StorageError> {
        let existed = self.travelers.remove(Self::traveler_key(name))?.is_some();
        self.travelers.flush()?;
        Ok(existed)
    }

    /// All saved traveler names (lowercased keys).
    pub fn list_travelers(&self) -> Result<Vec<String>, StorageError> {
        let mut names = Vec::new();
        for entry in self.travelers.scan_prefix(KEY_PREFIX.as_bytes()) {
            let (key, _) = entry?;
            let text = String::from_utf8_lossy(&key);
            if let Some(name) = text.strip_prefix(KEY_PREFIX) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Flush and release the database.
    pub fn close(self) -> Result<(), StorageError> {
        self.db.flush()?;
        debug!("closed traveler store at {}", self.path.display());
        Ok(())
    }
}

impl Drop for TravelerStore {
    fn drop(&mut self) {
        if let Err(e) = self.db.flush() {
            warn!("failed to flush traveler store {}: {}", self.path.display(), e);
        }
    }
}
