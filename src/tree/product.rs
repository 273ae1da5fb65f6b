//! Product-domain evaluator: the full simplex of multivariate orthogonal
//! polynomials over a tensor-product domain.
//!
//! Level L holds one value per degree vector of length dim summing to L, in
//! the canonical order of [`super::degrees`]. Each level is assembled axis by
//! axis: axis i advances the sub-population of the previous level whose
//! axes 0..i are all zero (the tail of the previous level's flat array),
//! and the last axis contributes the single remaining entry.
//!
//! Entries reach a given slot having taken different numbers of recurrence
//! steps along each axis, so the step coefficients are kept in growing
//! per-step arrays `a`, `b`, `c` indexed by steps along the axis rather than
//! by the level number. One provider lookup per level appends one element to
//! each array; all axes share them.

use crate::error::TreeError;
use crate::numeric::{broadcast, Scalar};
use crate::recurrence::ThreeTermRecurrence;

use super::degrees::simplex_size;
use super::LevelEval;

/// One level of a product-domain tree: `values[j]` is the evaluation-point
/// array of the polynomial with degree vector `degrees[j]`.
#[derive(Clone, Debug)]
pub struct ProductLevel<S> {
    pub values: Vec<Vec<S>>,
    pub degrees: Vec<Vec<usize>>,
}

/// Incremental evaluator for a dim-dimensional tensor-product domain.
pub struct ProductEval<S, R> {
    rc: R,
    points: Vec<Vec<S>>,
    dim: usize,
    p0n: S,
    // per-axis-step coefficient history, one element appended per level
    a: Vec<S>,
    b: Vec<S>,
    c: Vec<S>,
    k: usize,
    last_values: [Vec<Vec<S>>; 2],
    last_degrees: Vec<Vec<usize>>,
}

impl<S: Scalar, R: ThreeTermRecurrence<S>> ProductEval<S, R> {
    /// Bind a coefficient provider to `dim` coordinate arrays of equal
    /// length.
    pub fn new(rc: R, points: &[Vec<S>]) -> Result<Self, TreeError> {
        let dim = points.len();
        if dim == 0 {
            return Err(TreeError::DimensionMismatch {
                expected: 1,
                found: 0,
            });
        }
        let npts = points[0].len();
        for (axis, p) in points.iter().enumerate().skip(1) {
            if p.len() != npts {
                return Err(TreeError::ShapeMismatch {
                    axis,
                    expected: npts,
                    found: p.len(),
                });
            }
        }
        let mut p0n = S::one();
        for _ in 0..dim {
            p0n = p0n * rc.p0();
        }
        Ok(Self {
            rc,
            points: points.to_vec(),
            dim,
            p0n,
            a: Vec::new(),
            b: Vec::new(),
            c: Vec::new(),
            k: 0,
            last_values: [Vec::new(), Vec::new()],
            last_degrees: Vec::new(),
        })
    }

    /// Number of coordinate axes.
    pub fn dim(&self) -> usize {
        self.dim
    }
}

impl<S: Scalar, R: ThreeTermRecurrence<S>> LevelEval for ProductEval<S, R> {
    type Level = ProductLevel<S>;

    fn advance(&mut self) -> Result<ProductLevel<S>, TreeError> {
        let l = self.k;
        let dim = self.dim;
        let npts = self.points[0].len();

        let (values, degrees) = if l == 0 {
            (vec![broadcast(&self.p0n, npts)], vec![vec![0usize; dim]])
        } else {
            let (aa, bb, cc) = self.rc.coeffs(l - 1)?;
            self.a.push(aa);
            self.b.push(bb);
            self.c.push(cc);

            let n_entries = simplex_size(l, dim);
            let mut values: Vec<Vec<S>> = Vec::with_capacity(n_entries);
            let mut degrees: Vec<Vec<usize>> = Vec::with_capacity(n_entries);

            let prev = &self.last_values[0];
            let prev2 = &self.last_values[1];
            // true where the previous-level entry has zero degree in every
            // axis before the one being processed
            let mut mask = vec![true; self.last_degrees.len()];

            for i in 0..dim - 1 {
                // the masked sub-population is the tail of the flat array
                let t0 = prev.len() - simplex_size(l - 1, dim - i);
                let t1 = if l > 1 {
                    prev2.len() - simplex_size(l - 2, dim - i)
                } else {
                    0
                };

                let xi = &self.points[i];
                let mut r = 0;
                // group g collects the entries leaving g degrees to the
                // axes right of i; their axis-i degree steps from
                // l-1-g to l-g, which is step number l-g-1
                for g in 0..l {
                    let m = simplex_size(g, dim - i - 1);
                    let idx = l - g - 1;
                    let a = &self.a[idx];
                    let b = &self.b[idx];
                    for j in r..r + m {
                        let mut val: Vec<S> = prev[t0 + j]
                            .iter()
                            .zip(xi)
                            .map(|(p, x)| p.clone() * (x.clone() * a.clone() - b.clone()))
                            .collect();
                        if l - g > 1 {
                            let c = &self.c[idx];
                            for (v, p2) in val.iter_mut().zip(&prev2[t1 + j]) {
                                *v = v.clone() - p2.clone() * c.clone();
                            }
                        }
                        values.push(val);
                    }
                    r += m;
                }

                for (deg, keep) in self.last_degrees.iter().zip(&mask) {
                    if *keep {
                        let mut d = deg.clone();
                        d[i] += 1;
                        degrees.push(d);
                    }
                }
                for (keep, deg) in mask.iter_mut().zip(&self.last_degrees) {
                    *keep = *keep && deg[i] == 0;
                }
            }

            // last axis: the one surviving all-zero-prefix entry, a plain
            // univariate step with no masking
            let idx = l - 1;
            let xn = &self.points[dim - 1];
            let p_last = &prev[prev.len() - 1];
            let mut val: Vec<S> = p_last
                .iter()
                .zip(xn)
                .map(|(p, x)| {
                    p.clone() * (x.clone() * self.a[idx].clone() - self.b[idx].clone())
                })
                .collect();
            if l > 1 {
                let p2_last = &prev2[prev2.len() - 1];
                for (v, p2) in val.iter_mut().zip(p2_last) {
                    *v = v.clone() - p2.clone() * self.c[idx].clone();
                }
            }
            values.push(val);
            let mut d = self.last_degrees[self.last_degrees.len() - 1].clone();
            d[dim - 1] += 1;
            degrees.push(d);

            debug_assert_eq!(values.len(), n_entries);
            debug_assert_eq!(degrees.len(), n_entries);
            (values, degrees)
        };

        self.last_values.swap(0, 1);
        self.last_values[0] = values.clone();
        self.last_degrees = degrees.clone();
        self.k += 1;
        Ok(ProductLevel { values, degrees })
    }
}
