//! Shared-kernel error model.

use thiserror::Error;

/// Result type used across the shared kernel.
pub type KernelResult<T> = Result<T, KernelError>;

/// Shared-kernel error.
///
/// The object model itself is inert (field reads and writes cannot fail), so the
/// only failure surface is parsing strongly-typed identifiers from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl KernelError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
