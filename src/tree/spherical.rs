//! Associated-Legendre 1-3-5 tree evaluator.
//!
//! Level k holds the 2k+1 values indexed m = -k..k:
//!
//! ```text
//!                     (0, 0)
//!           (-1, 1)   (0, 1)   (1, 1)
//! (-2, 2)   (-1, 2)   (0, 2)   (1, 2)   (2, 2)
//! ```
//!
//! Each new level grows one boundary slot on each side, scaled by the
//! auxiliary factors `xi`: by default √(1 − x²) on both sides, but callers
//! may supply the two factors directly (e.g. √(1 − x²)·e^{∓iφ} split into
//! separate real channels) to build spherical-harmonic variants.

use crate::error::TreeError;
use crate::numeric::{broadcast, Scalar};
use crate::recurrence::SphericalRecurrence;

use super::LevelEval;

/// Incremental evaluator for the 2k+1-wide associated-Legendre tree.
pub struct SphericalEval<S, R> {
    rc: R,
    x: Vec<S>,
    xi: [Vec<S>; 2],
    k: usize,
    last: [Vec<Vec<S>>; 2],
}

impl<S: Scalar, R: SphericalRecurrence<S>> SphericalEval<S, R> {
    /// Bind a provider to the points with the default auxiliary factors
    /// √(1 − x²).
    ///
    /// Fails fast on out-of-range points (floating mode) or points whose
    /// 1 − x² has no rational root (exact mode).
    pub fn new(rc: R, x: &[S]) -> Result<Self, TreeError> {
        let xi: Vec<S> = x
            .iter()
            .map(|x| (S::one() - x.clone() * x.clone()).sqrt())
            .collect::<Result<_, _>>()?;
        Self::with_xi(rc, x, xi.clone(), xi)
    }

    /// Bind a provider with explicit auxiliary factors for the low and high
    /// boundary slots.
    pub fn with_xi(rc: R, x: &[S], xi0: Vec<S>, xi1: Vec<S>) -> Result<Self, TreeError> {
        for (axis, xi) in [&xi0, &xi1].into_iter().enumerate() {
            if xi.len() != x.len() {
                return Err(TreeError::ShapeMismatch {
                    axis: axis + 1,
                    expected: x.len(),
                    found: xi.len(),
                });
            }
        }
        Ok(Self {
            rc,
            x: x.to_vec(),
            xi: [xi0, xi1],
            k: 0,
            last: [Vec::new(), Vec::new()],
        })
    }
}

impl<S: Scalar, R: SphericalRecurrence<S>> LevelEval for SphericalEval<S, R> {
    type Level = Vec<Vec<S>>;

    fn advance(&mut self) -> Result<Vec<Vec<S>>, TreeError> {
        let k = self.k;
        let out = if k == 0 {
            vec![broadcast(&self.rc.p0(), self.x.len())]
        } else {
            let co = self.rc.coeffs(k)?;
            let width = 2 * k + 1;
            if co.c0.len() != width - 2 {
                return Err(TreeError::CoefficientShape {
                    level: k,
                    name: "c0",
                    expected: width - 2,
                    found: co.c0.len(),
                });
            }
            let c1_expected = if k > 1 { 2 * k - 3 } else { 0 };
            if co.c1.len() != c1_expected {
                return Err(TreeError::CoefficientShape {
                    level: k,
                    name: "c1",
                    expected: c1_expected,
                    found: co.c1.len(),
                });
            }

            let last0 = &self.last[0];
            let mut out: Vec<Vec<S>> = Vec::with_capacity(width);

            // new low boundary, m = -k
            out.push(
                last0[0]
                    .iter()
                    .zip(&self.xi[0])
                    .map(|(p, xi)| p.clone() * xi.clone() * co.z0.clone())
                    .collect(),
            );
            // interior band, m = -k+1 ..= k-1
            for (row, c0) in last0.iter().zip(&co.c0) {
                out.push(
                    row.iter()
                        .zip(&self.x)
                        .map(|(p, x)| p.clone() * c0.clone() * x.clone())
                        .collect(),
                );
            }
            // new high boundary, m = k
            let top = &last0[last0.len() - 1];
            out.push(
                top.iter()
                    .zip(&self.xi[1])
                    .map(|(p, xi)| p.clone() * xi.clone() * co.z1.clone())
                    .collect(),
            );

            // the strictly interior sub-band has a value two levels back
            if k > 1 {
                let last1 = &self.last[1];
                for (j, c1) in co.c1.iter().enumerate() {
                    for (o, p2) in out[2 + j].iter_mut().zip(&last1[j]) {
                        *o = o.clone() - p2.clone() * c1.clone();
                    }
                }
            }
            out
        };

        self.last.swap(0, 1);
        self.last[0] = out.clone();
        self.k += 1;
        Ok(out)
    }
}
