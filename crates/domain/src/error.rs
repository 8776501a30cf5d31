//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`InkwellError`] via `From`.

use std::error::Error as StdError;

/// Top-level error returned by application services and ports.
#[derive(Debug, thiserror::Error)]
pub enum InkwellError {
    /// The request is missing required data.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed; the transaction was rolled back.
    #[error("{0}")]
    Storage(Box<dyn StdError + Send + Sync>),
}

/// Reasons a change set is rejected before touching storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title or content is required to save a draft")]
    MissingTitleOrContent,

    #[error("Title is required to publish")]
    MissingTitle,

    #[error("Content is required to publish")]
    MissingContent,

    /// The request body could not be decoded.
    #[error("{0}")]
    MalformedBody(String),
}

/// A lookup by identifier matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Name of the missing record kind (e.g. `"Blog"`).
    pub entity: &'static str,
    /// Identifier that was looked up.
    pub id: String,
}
