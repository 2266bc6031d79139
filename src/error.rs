use thiserror::Error;

/// The one failure mode the store surfaces: the backing storage could
/// not be read or written. Everything else (empty input, stale
/// selection) is a defined no-op, not an error.
#[derive(Debug, Error)]
pub enum StorageFailure {
    #[error("task storage unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("task data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageFailure>;
