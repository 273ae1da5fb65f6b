//! Legendre recurrence coefficients.
//!
//! Legendre polynomials P_n(x) are orthogonal on [-1, 1] with weight 1:
//! ∫_{-1}^{1} P_m(x) P_n(x) dx = 2/(2n+1) δ_{mn}
//!
//! The classical recurrence is
//! (k+1) P_{k+1}(x) = (2k+1) x P_k(x) - k P_{k-1}(x)

use crate::error::TreeError;
use crate::numeric::Scalar;

use super::ThreeTermRecurrence;

/// Classical (unnormalized) Legendre polynomials: P_0 = 1, P_n(1) = 1.
///
/// All coefficients are rational, so this family works in both numeric
/// modes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Legendre;

impl<S: Scalar> ThreeTermRecurrence<S> for Legendre {
    fn p0(&self) -> S {
        S::one()
    }

    fn coeffs(&self, k: usize) -> Result<(S, S, S), TreeError> {
        let k = k as i64;
        Ok((
            S::from_ratio(2 * k + 1, k + 1),
            S::zero(),
            S::from_ratio(k, k + 1),
        ))
    }
}

/// Orthonormal Legendre polynomials: φ_n(x) = √((2n+1)/2) P_n(x),
/// satisfying ∫ φ_m φ_n dx = δ_{mn}.
///
/// The normalization folds into the recurrence as
/// φ_{k+1} = φ_k · x · √((2k+1)(2k+3))/(k+1) − φ_{k−1} · (k/(k+1))·√((2k+3)/(2k−1))
/// with φ_0 = 1/√2. Irrational coefficients, floating mode only.
#[derive(Clone, Copy, Debug, Default)]
pub struct LegendreNormalized;

impl ThreeTermRecurrence<f64> for LegendreNormalized {
    fn p0(&self) -> f64 {
        (1.0f64 / 2.0).sqrt()
    }

    fn coeffs(&self, k: usize) -> Result<(f64, f64, f64), TreeError> {
        let kf = k as f64;
        let a = ((2.0 * kf + 1.0) * (2.0 * kf + 3.0)).sqrt() / (kf + 1.0);
        // c_0 multiplies a nonexistent degree -1 value; keep it finite.
        let c = if k == 0 {
            0.0
        } else {
            kf / (kf + 1.0) * ((2.0 * kf + 3.0) / (2.0 * kf - 1.0)).sqrt()
        };
        Ok((a, 0.0, c))
    }
}
