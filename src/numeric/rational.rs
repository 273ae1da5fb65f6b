//! Exact-rational implementation of the `Scalar` trait.
//!
//! Square roots are taken exactly or not at all: √(p/q) exists in ℚ iff both
//! p and q are perfect squares once the fraction is reduced. Anything else is
//! reported as an error rather than approximated, so exact trees stay exact.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::scalar::Scalar;
use crate::error::TreeError;

impl Scalar for BigRational {
    fn from_int(n: i64) -> Self {
        BigRational::from_integer(BigInt::from(n))
    }

    fn from_ratio(num: i64, den: i64) -> Self {
        assert!(den != 0, "zero denominator");
        BigRational::new(BigInt::from(num), BigInt::from(den))
    }

    fn sqrt(&self) -> Result<Self, TreeError> {
        if self.is_negative() {
            return Err(TreeError::NegativeSqrt {
                value: ToPrimitive::to_f64(self).unwrap_or(f64::NAN),
            });
        }
        if self.is_zero() {
            return Ok(BigRational::zero());
        }
        // `BigRational` keeps fractions reduced with a positive denominator,
        // so numerator and denominator can be rooted independently.
        let num_root = self.numer().sqrt();
        let den_root = self.denom().sqrt();
        if &(&num_root * &num_root) == self.numer() && &(&den_root * &den_root) == self.denom() {
            Ok(BigRational::new(num_root, den_root))
        } else {
            Err(TreeError::IrrationalSqrt {
                value: self.to_string(),
            })
        }
    }

    fn to_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(num: i64, den: i64) -> BigRational {
        BigRational::from_ratio(num, den)
    }

    #[test]
    fn test_ratio_reduces() {
        assert_eq!(q(2, 4), q(1, 2));
        assert_eq!(q(3, -6), q(-1, 2));
    }

    #[test]
    fn test_exact_sqrt() {
        assert_eq!(Scalar::sqrt(&q(9, 4)).unwrap(), q(3, 2));
        assert_eq!(Scalar::sqrt(&q(16, 25)).unwrap(), q(4, 5));
        assert_eq!(Scalar::sqrt(&q(0, 1)).unwrap(), q(0, 1));
        assert_eq!(Scalar::sqrt(&q(1, 1)).unwrap(), q(1, 1));
    }

    #[test]
    fn test_irrational_sqrt_is_error() {
        assert!(matches!(
            Scalar::sqrt(&q(2, 1)),
            Err(TreeError::IrrationalSqrt { .. })
        ));
        assert!(matches!(
            Scalar::sqrt(&q(4, 3)),
            Err(TreeError::IrrationalSqrt { .. })
        ));
    }

    #[test]
    fn test_negative_sqrt_is_error() {
        assert!(matches!(
            Scalar::sqrt(&q(-4, 1)),
            Err(TreeError::NegativeSqrt { .. })
        ));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Scalar::to_f64(&q(1, 2)), 0.5);
        assert_eq!(Scalar::to_f64(&q(-7, 4)), -1.75);
    }
}
