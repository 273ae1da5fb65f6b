//! Numeric mode adapter.
//!
//! The evaluators are generic over a [`Scalar`] type that supplies the three
//! primitives whose meaning differs between numeric modes: broadcasting a
//! constant to the shape of the evaluation-point array, square roots, and
//! rational division. Instantiating an evaluator at `f64` selects floating
//! arithmetic; instantiating it at `num_rational::BigRational` selects exact
//! arithmetic. The evaluators themselves never branch on the mode.

mod rational;
mod scalar;

pub use scalar::{broadcast, Scalar};
