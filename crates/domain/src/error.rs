//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RoomTempError`] via `#[from]`.

use crate::id::RoomId;

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum RoomTempError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("conflict")]
    Conflict(#[from] ConflictError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input rejected before touching storage.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid date `{value}`, expected MM-DD-YYYY HH:MM:SS")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// The store refused a write because of a referential constraint.
#[derive(Debug, thiserror::Error)]
pub enum ConflictError {
    #[error("room {0} does not exist")]
    UnknownRoom(RoomId),
}
