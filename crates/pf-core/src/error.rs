//! # AppError
//!
//! Centralized error handling for the post feed.
//! Nothing in here is fatal to a whole feed: callers degrade a single
//! element (skip a post, show an inline message) and carry on.

use thiserror::Error;

/// The primary error type for all pf-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A `publishedAt` value that cannot be read as an instant.
    /// Raised while building a `Post`, never while formatting one.
    #[error("invalid instant {raw:?}: {reason}")]
    InvalidInstant { raw: String, reason: String },

    /// The feed document itself is unreadable (bad JSON, wrong shape)
    #[error("malformed feed: {0}")]
    Feed(String),

    /// Template rendering failed
    #[error("render error: {0}")]
    Render(String),
}

/// A specialized Result type for post feed logic.
pub type Result<T> = std::result::Result<T, AppError>;
