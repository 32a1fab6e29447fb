//! Crate-wide error types

use thiserror::Error;

/// Errors produced by geometry construction and the enclosing computations
///
/// Every other operation in the crate is total over well-formed inputs and
/// does not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A rectangle was constructed with a negative width or height
    #[error("rectangle dimensions must be non-negative, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    /// An enclosing rectangle was requested for an empty point set
    #[error("cannot compute an enclosing rectangle for an empty point set")]
    EmptyPointSet,
}
