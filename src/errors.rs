use thiserror::Error;

/// Errors that can arise while reading or writing saved traveler state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Wrapper around sled's error type.
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),

    /// Wrapper around bincode serialization and deserialization errors.
    #[error("serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    /// Wrapper around IO errors (directory creation, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when deserializing a record with an unexpected schema version.
    #[error("schema mismatch for {entity}: expected {expected}, got {found}")]
    SchemaMismatch {
        entity: &'static str,
        expected: u8,
        found: u8,
    },
}

/// Errors that end a game session early.
#[derive(Debug, Error)]
pub enum GameError {
    /// Saved state could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Console read/write failure.
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while the game was waiting for an answer.
    #[error("input closed before the game finished")]
    InputClosed,

    /// Internal error (task join errors, unexpected conditions)
    #[error("internal error: {0}")]
    Internal(String),
}

impl GameError {
    pub fn is_storage(&self) -> bool {
        matches!(self, GameError::Storage(_))
    }
}
