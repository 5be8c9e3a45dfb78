//! Kernel error types.

use thiserror::Error;

/// Kernel errors.
///
/// Content resolution never produces one of these — the resolver degrades
/// to its fallback string instead (a page must always have something to
/// render). Errors are reserved for the storage boundary and for explicit
/// validation entry points.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("site not found: {0}")]
    SiteNotFound(String),

    #[error("invalid language code: {0}")]
    InvalidLanguage(String),

    #[error("storage error")]
    Storage(#[from] anyhow::Error),
}

/// Result type alias using KernelError.
pub type KernelResult<T> = Result<T, KernelError>;
