use rusqlite::{ffi, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Flight Number '{0}' already exists. Please use a unique Flight Number.")]
    DuplicateKey(String),

    #[error("No reservation found for Flight Number: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    StorageUnavailable(#[from] rusqlite::Error),

    #[error("couldn't prepare the database directory: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Maps a failed write on `flight_number`. Key collisions become
    /// `DuplicateKey`, everything else stays a storage fault.
    pub(super) fn from_write(err: rusqlite::Error, flight_number: &str) -> Self {
        if let rusqlite::Error::SqliteFailure(e, _) = &err {
            if e.code == ErrorCode::ConstraintViolation
                && (e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    || e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE)
            {
                return StoreError::DuplicateKey(flight_number.to_string());
            }
        }
        StoreError::StorageUnavailable(err)
    }
}
