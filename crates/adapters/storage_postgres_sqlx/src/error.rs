//! Storage-specific error type wrapping sqlx errors.

use roomtemp_domain::error::{ConflictError, RoomTempError};
use roomtemp_domain::id::RoomId;

/// Errors originating from the `PostgreSQL` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for RoomTempError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Map a failed reading insert, turning a foreign-key violation on
/// `temperatures.room_id` into [`ConflictError::UnknownRoom`].
pub(crate) fn reading_insert_error(err: sqlx::Error, room_id: RoomId) -> RoomTempError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            ConflictError::UnknownRoom(room_id).into()
        }
        other => StorageError::from(other).into(),
    }
}
