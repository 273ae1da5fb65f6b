//! Chebyshev recurrence coefficients.

use crate::error::TreeError;
use crate::numeric::Scalar;

use super::ThreeTermRecurrence;

/// Chebyshev polynomials of the first kind: T_0 = 1, T_1 = x,
/// T_{k+1} = 2x T_k - T_{k-1}.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChebyshevT;

impl<S: Scalar> ThreeTermRecurrence<S> for ChebyshevT {
    fn p0(&self) -> S {
        S::one()
    }

    fn coeffs(&self, k: usize) -> Result<(S, S, S), TreeError> {
        let a = if k == 0 { S::one() } else { S::from_int(2) };
        Ok((a, S::zero(), S::one()))
    }
}
