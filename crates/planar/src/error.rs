//! Typed failures for the partial operations of the kernel.
//!
//! Most operations are total. The exceptions are listed here; IEEE edge
//! cases (`lerp` over a zero-length range, non-unit ray directions) are not
//! errors and propagate as infinities or NaN.

use thiserror::Error;

/// Error type for geometry operations.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum GeomError {
    /// Vector too short (or not finite) to normalize.
    #[error("could not compute unit vector of length {length} (ε = {eps})", eps = crate::scalar::EPSILON)]
    DegenerateVector { length: f64 },
    /// Reduction that needs at least one input got none.
    #[error("{op} requires at least one point")]
    EmptyInput { op: &'static str },
    /// Matrix whose bottom row is not `(0, 0, 1)`.
    #[error("not an affine transform, bottom row is {bottom_row:?}")]
    NotAffine { bottom_row: [f64; 3] },
}
