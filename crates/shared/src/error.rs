//! Error types for the alumni network

use thiserror::Error;

/// The kind of record an id failed to resolve against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Alumni,
    Event,
    MentorshipRequest,
    PendingVerification,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::Alumni => "Alumni",
            RecordKind::Event => "Event",
            RecordKind::MentorshipRequest => "Mentorship request",
            RecordKind::PendingVerification => "Pending verification",
        };
        f.write_str(name)
    }
}

/// General alumni-network error type
#[derive(Debug, Error)]
pub enum AlumniError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: RecordKind, id: u64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse failure: {0}")]
    ParseFailure(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Another load or import is still in progress")]
    Busy,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AlumniError {
    pub fn not_found(kind: RecordKind, id: u64) -> Self {
        AlumniError::NotFound { kind, id }
    }

    /// True for errors that mean "the referenced record does not exist"
    pub fn is_not_found(&self) -> bool {
        matches!(self, AlumniError::NotFound { .. })
    }
}

impl From<serde_json::Error> for AlumniError {
    fn from(err: serde_json::Error) -> Self {
        AlumniError::ParseFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AlumniError>;
