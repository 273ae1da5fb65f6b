//! Error type for tree evaluation.

use thiserror::Error;

/// Error type for orthogonal-polynomial tree evaluation.
///
/// Configuration errors (dimension/shape mismatches, malformed coefficient
/// vectors) and numeric domain errors (invalid square roots) are both fatal
/// for the advance call that triggered them; nothing is retried.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Point set arity does not match the domain.
    #[error("domain needs {expected} coordinate arrays, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Coordinate arrays must share one shape.
    #[error("coordinate array {axis} has {found} points, axis 0 has {expected}")]
    ShapeMismatch {
        axis: usize,
        expected: usize,
        found: usize,
    },

    /// Coefficient provider returned a vector of the wrong length.
    #[error("level {level}: coefficient vector `{name}` has length {found}, expected {expected}")]
    CoefficientShape {
        level: usize,
        name: &'static str,
        expected: usize,
        found: usize,
    },

    /// Square root of a negative quantity.
    #[error("square root of negative value {value}")]
    NegativeSqrt { value: f64 },

    /// Square root with no exact rational result.
    #[error("no exact rational square root of {value}")]
    IrrationalSqrt { value: String },
}
