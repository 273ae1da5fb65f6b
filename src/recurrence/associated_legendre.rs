//! Associated-Legendre recurrence coefficients in a factorial-scaled
//! convention.
//!
//! The tree values are q(ℓ, m) = P_ℓ^{|m|}(x) / (ℓ + |m|)!, which makes the
//! level symmetric in ±m. Substituting into the stable increasing-ℓ
//! recurrence
//!
//!   (ℓ − m) P_ℓ^m = (2ℓ − 1) x P_{ℓ−1}^m − (ℓ − 1 + m) P_{ℓ−2}^m
//!
//! gives purely rational coefficients:
//!
//!   q(ℓ, m) = (2ℓ−1)/(ℓ² − m²) · x · q(ℓ−1, m) − 1/(ℓ² − m²) · q(ℓ−2, m)
//!
//! and the boundary rungs q(ℓ, ±ℓ) = √(1 − x²)/(2ℓ) · q(ℓ−1, ±(ℓ−1)).
//! Because nothing here needs a square root, this family works in both
//! numeric modes; in exact mode the whole tree is exact whenever 1 − x² is
//! a perfect rational square (the auxiliary factors can also be supplied
//! directly to sidestep the root entirely).

use crate::error::TreeError;
use crate::numeric::Scalar;

use super::{SphericalCoeffs, SphericalRecurrence};

/// Factorial-scaled associated-Legendre family: q(ℓ, m) = P_ℓ^{|m|}/(ℓ+|m|)!.
#[derive(Clone, Copy, Debug, Default)]
pub struct AssociatedLegendre;

impl<S: Scalar> SphericalRecurrence<S> for AssociatedLegendre {
    fn p0(&self) -> S {
        S::one()
    }

    fn coeffs(&self, level: usize) -> Result<SphericalCoeffs<S>, TreeError> {
        let l = level as i64;
        let z = S::from_ratio(1, 2 * l);
        let c0 = (-(l - 1)..=(l - 1))
            .map(|m| S::from_ratio(2 * l - 1, l * l - m * m))
            .collect();
        let c1 = (-(l - 2)..=(l - 2))
            .map(|m| S::from_ratio(1, l * l - m * m))
            .collect();
        Ok(SphericalCoeffs {
            z0: z.clone(),
            z1: z,
            c0,
            c1,
        })
    }
}
