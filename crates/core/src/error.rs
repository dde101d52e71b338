//! Error types for input validation.

use thiserror::Error;

/// Result alias used across the edgepack crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation failure for caller-supplied input.
///
/// A rectangle that merely does not fit is not an error; the packer reports
/// that case as an absent placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Rectangle dimensions must be strictly positive.
    #[error("rectangle dimensions must be positive, got {w}x{h}")]
    InvalidSize { w: i32, h: i32 },
}
