//! Unit-disk tree evaluator.
//!
//! Level L holds L+1 values arranged triangularly across levels:
//!
//! ```text
//! (0, 0)
//! (0, 1)   (1, 1)
//! (0, 2)   (1, 2)   (2, 2)
//! ```
//!
//! The first L slots advance the previous level against x0; the one new
//! boundary slot advances the previous level's last entry against x1. From
//! level 2 on, both parts receive a two-levels-back correction, the boundary
//! one carrying the geometric factor (1 − x0²).

use crate::error::TreeError;
use crate::numeric::{broadcast, Scalar};
use crate::recurrence::DiskRecurrence;

use super::LevelEval;

/// Incremental evaluator for orthogonal polynomials on the unit disk.
pub struct DiskEval<S, R> {
    rc: R,
    x0: Vec<S>,
    x1: Vec<S>,
    one_min_x0sq: Vec<S>,
    k: usize,
    last: [Vec<Vec<S>>; 2],
}

impl<S: Scalar, R: DiskRecurrence<S>> DiskEval<S, R> {
    /// Bind a provider to the two Cartesian coordinate arrays.
    pub fn new(rc: R, x0: &[S], x1: &[S]) -> Result<Self, TreeError> {
        if x1.len() != x0.len() {
            return Err(TreeError::ShapeMismatch {
                axis: 1,
                expected: x0.len(),
                found: x1.len(),
            });
        }
        let one_min_x0sq = x0
            .iter()
            .map(|x| S::one() - x.clone() * x.clone())
            .collect();
        Ok(Self {
            rc,
            x0: x0.to_vec(),
            x1: x1.to_vec(),
            one_min_x0sq,
            k: 0,
            last: [Vec::new(), Vec::new()],
        })
    }
}

impl<S: Scalar, R: DiskRecurrence<S>> LevelEval for DiskEval<S, R> {
    type Level = Vec<Vec<S>>;

    fn advance(&mut self) -> Result<Vec<Vec<S>>, TreeError> {
        let l = self.k;
        let out = if l == 0 {
            vec![broadcast(&self.rc.p0(), self.x0.len())]
        } else {
            let co = self.rc.coeffs(l)?;
            if co.alpha.len() != l {
                return Err(TreeError::CoefficientShape {
                    level: l,
                    name: "alpha",
                    expected: l,
                    found: co.alpha.len(),
                });
            }
            if co.gamma.len() != l - 1 {
                return Err(TreeError::CoefficientShape {
                    level: l,
                    name: "gamma",
                    expected: l - 1,
                    found: co.gamma.len(),
                });
            }

            let last0 = &self.last[0];
            let mut out: Vec<Vec<S>> = Vec::with_capacity(l + 1);
            for (row, alpha) in last0.iter().zip(&co.alpha) {
                out.push(
                    row.iter()
                        .zip(&self.x0)
                        .map(|(p, x)| p.clone() * alpha.clone() * x.clone())
                        .collect(),
                );
            }
            // boundary slot from the previous level's last row
            let top = &last0[last0.len() - 1];
            out.push(
                top.iter()
                    .zip(&self.x1)
                    .map(|(p, x)| p.clone() * co.beta.clone() * x.clone())
                    .collect(),
            );

            if l > 1 {
                let last1 = &self.last[1];
                for (j, gamma) in co.gamma.iter().enumerate() {
                    for (o, p2) in out[j].iter_mut().zip(&last1[j]) {
                        *o = o.clone() - p2.clone() * gamma.clone();
                    }
                }
                let p2_top = &last1[last1.len() - 1];
                let boundary = &mut out[l];
                for ((o, p2), w) in boundary
                    .iter_mut()
                    .zip(p2_top)
                    .zip(&self.one_min_x0sq)
                {
                    *o = o.clone() - p2.clone() * co.delta.clone() * w.clone();
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
