//! Error types for the onboarding engine.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Submission error: {0}")]
    Submit(#[from] SubmitError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Progress-storage errors.
///
/// These never cross the wizard boundary: the store absorbs them and logs a
/// diagnostic, so step-UI collaborators only ever see successful calls.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to open storage: {0}")]
    Open(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Terminal submission errors.
///
/// The only failure class that propagates out of `complete()` — the caller
/// has to know whether to offer a retry.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Submission rejected: {reason}")]
    Rejected { reason: String },

    #[error("Submission endpoint unavailable: {0}")]
    Unavailable(String),
}

/// Step-record validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be under {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} needs at least {min} entries")]
    TooFew { field: &'static str, min: usize },

    #[error("{field} allows at most {max} entries")]
    TooMany { field: &'static str, max: usize },

    #[error("Invalid {field}: {message}")]
    Invalid {
        field: &'static str,
        message: &'static str,
    },

    #[error("Declaration {field} must be accepted")]
    DeclarationRequired { field: &'static str },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
