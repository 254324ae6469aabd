//! Structured error type for lawctl-core.
//!
//! Uses `thiserror` for library consumers; the CLI binary wraps these in
//! `anyhow` for display. Nothing is caught or translated on the way up:
//! driver errors (connectivity, authentication, constraint conflicts)
//! surface to the caller exactly as sqlx reports them.

use thiserror::Error;

/// Main error type for lawctl-core operations
#[derive(Error, Debug)]
pub enum DbError {
    /// Any failure reported by the database driver or connection pool
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type alias for lawctl-core operations
pub type Result<T> = std::result::Result<T, DbError>;
