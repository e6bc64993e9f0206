use thiserror::Error;

/// Store errors outside command validation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Replayed state drifted: expected checksum {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
