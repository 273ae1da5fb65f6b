//! The `Scalar` trait and its floating-point implementation.

use std::fmt::Debug;
use std::ops::{Div, Neg, Sub};

use num_traits::{One, Zero};

use crate::error::TreeError;

/// Arithmetic interface shared by the floating and exact numeric modes.
///
/// `Zero`/`One` bring in addition and multiplication; the remaining bounds
/// cover subtraction, negation and division. The two fallible operations are
/// the ones with restricted domains:
/// - [`Scalar::sqrt`] rejects negative radicands (floating mode) and
///   radicands without a rational root (exact mode) instead of producing
///   NaN or an approximation.
/// - [`Scalar::from_ratio`] is exact division in exact mode and floating
///   division in floating mode.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + Zero
    + One
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Div<Output = Self>
{
    /// Embed an integer.
    fn from_int(n: i64) -> Self;

    /// Embed the fraction `num / den`.
    ///
    /// # Panics
    /// Panics if `den` is zero.
    fn from_ratio(num: i64, den: i64) -> Self;

    /// Domain-checked square root.
    fn sqrt(&self) -> Result<Self, TreeError>;

    /// Convert to `f64`, rounding in exact mode.
    fn to_f64(&self) -> f64;
}

impl Scalar for f64 {
    #[inline]
    fn from_int(n: i64) -> Self {
        n as f64
    }

    #[inline]
    fn from_ratio(num: i64, den: i64) -> Self {
        assert!(den != 0, "zero denominator");
        num as f64 / den as f64
    }

    fn sqrt(&self) -> Result<Self, TreeError> {
        if *self < 0.0 {
            return Err(TreeError::NegativeSqrt { value: *self });
        }
        Ok(f64::sqrt(*self))
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        *self
    }
}

/// Broadcast a constant to the shape of an evaluation-point array.
pub fn broadcast<S: Scalar>(value: &S, len: usize) -> Vec<S> {
    vec![value.clone(); len]
}
