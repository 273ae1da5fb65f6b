//! Univariate three-term recurrence evaluator.

use crate::error::TreeError;
use crate::numeric::{broadcast, Scalar};
use crate::recurrence::ThreeTermRecurrence;

use super::LevelEval;

/// Incremental evaluator for a univariate orthogonal-polynomial family.
///
/// The k-th advance yields the degree-k polynomial evaluated at every point:
/// P_0 = p0 broadcast over the points, then
/// P_k = P_{k-1} · (x·a_{k-1} − b_{k-1}) − P_{k-2} · c_{k-1},
/// with the subtractive term active from k = 2 on. Only the two most recent
/// levels are retained.
pub struct UnivariateEval<S, R> {
    rc: R,
    x: Vec<S>,
    k: usize,
    last: [Vec<S>; 2],
}

impl<S: Scalar, R: ThreeTermRecurrence<S>> UnivariateEval<S, R> {
    /// Bind a coefficient provider to a set of evaluation points.
    pub fn new(rc: R, x: &[S]) -> Self {
        Self {
            rc,
            x: x.to_vec(),
            k: 0,
            last: [Vec::new(), Vec::new()],
        }
    }
}

impl<S: Scalar, R: ThreeTermRecurrence<S>> LevelEval for UnivariateEval<S, R> {
    type Level = Vec<S>;

    fn advance(&mut self) -> Result<Vec<S>, TreeError> {
        let out = if self.k == 0 {
            broadcast(&self.rc.p0(), self.x.len())
        } else {
            let (a, b, c) = self.rc.coeffs(self.k - 1)?;
            let mut out: Vec<S> = self.last[0]
                .iter()
                .zip(&self.x)
                .map(|(p, x)| p.clone() * (x.clone() * a.clone() - b.clone()))
                .collect();
            if self.k > 1 {
                for (o, p2) in out.iter_mut().zip(&self.last[1]) {
                    *o = o.clone() - p2.clone() * c.clone();
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
