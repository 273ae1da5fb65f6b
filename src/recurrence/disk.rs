//! Recurrence coefficients for orthonormal polynomials on the unit disk.
//!
//! The triangular recurrence follows Yuan Xu, "Orthogonal polynomials of
//! several variables" (arXiv:1701.02709), eq. (3.4), specialized to the
//! Lebesgue measure (Gegenbauer parameter μ = 1/2). The base value
//! p0 = 1/√π normalizes the constant against the disk area, so every level
//! is orthonormal with respect to plain area measure.

use std::f64::consts::PI;

use crate::error::TreeError;

use super::{DiskCoeffs, DiskRecurrence};

const MU: f64 = 0.5;

/// Orthonormal disk harmonics (μ = 1/2). Floating mode only: p0 and the
/// level coefficients are irrational.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiskXu;

impl DiskRecurrence<f64> for DiskXu {
    fn p0(&self) -> f64 {
        1.0 / PI.sqrt()
    }

    fn coeffs(&self, level: usize) -> Result<DiskCoeffs<f64>, TreeError> {
        let n = level as f64;

        let alpha = (0..level)
            .map(|k| {
                let k = k as f64;
                2.0 * (((n + MU + 0.5) * (n + MU - 0.5)) / ((n - k) * (n + k + 2.0 * MU))).sqrt()
            })
            .collect();

        let beta = 2.0 * (((n + MU - 1.0) * (n + MU + 0.5)) / ((n + 2.0 * MU - 1.0) * n)).sqrt();

        let gamma = (0..level.saturating_sub(1))
            .map(|k| {
                let k = k as f64;
                (((n - 1.0 - k) * (n + MU + 0.5) * (n + k + 2.0 * MU - 1.0))
                    / ((n - k) * (n + MU - 1.5) * (n + k + 2.0 * MU)))
                    .sqrt()
            })
            .collect();

        // delta feeds the correction that only exists from level 2 on
        let delta = if level > 1 {
            (((n - 1.0) * (n + 2.0 * MU - 2.0) * (n + MU - 0.5) * (n + MU + 0.5))
                / (n * (n + 2.0 * MU - 1.0) * (n + MU - 1.0) * (n + MU - 2.0)))
                .sqrt()
        } else {
            0.0
        };

        Ok(DiskCoeffs {
            alpha,
            beta,
            gamma,
            delta,
        })
    }
}
