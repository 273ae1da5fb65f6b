//! Tree evaluators and the driver that materializes full trees.
//!
//! All four domain evaluators share the [`LevelEval`] contract: one
//! `advance` call produces the next level and moves the internal counter
//! forward; pulls are monotone, never replay a level, and the sequence has
//! no end. [`collect_levels`] drives an evaluator up to a bound; the
//! `*_tree` functions below bundle construction and collection for the
//! common one-shot case.

pub mod degrees;

mod disk;
mod product;
mod spherical;
mod univariate;

pub use disk::DiskEval;
pub use product::{ProductEval, ProductLevel};
pub use spherical::SphericalEval;
pub use univariate::UnivariateEval;

use crate::error::TreeError;
use crate::numeric::Scalar;
use crate::recurrence::{DiskRecurrence, SphericalRecurrence, ThreeTermRecurrence};

/// Incremental level-by-level evaluation.
///
/// Implementors own their evaluation state exclusively; independent
/// evaluator instances may run concurrently, but a single instance must be
/// advanced from one thread at a time.
pub trait LevelEval {
    /// The per-level output.
    type Level;

    /// Produce the next level and advance the internal counter by one.
    fn advance(&mut self) -> Result<Self::Level, TreeError>;
}

/// Pull levels `0..=max_level` from an evaluator.
pub fn collect_levels<E: LevelEval>(
    eval: &mut E,
    max_level: usize,
) -> Result<Vec<E::Level>, TreeError> {
    let mut out = Vec::with_capacity(max_level + 1);
    for _ in 0..=max_level {
        out.push(eval.advance()?);
    }
    Ok(out)
}

/// Evaluate a univariate family at `x` for all degrees `0..=max_level`.
pub fn univariate_tree<S, R>(rc: R, x: &[S], max_level: usize) -> Result<Vec<Vec<S>>, TreeError>
where
    S: Scalar,
    R: ThreeTermRecurrence<S>,
{
    collect_levels(&mut UnivariateEval::new(rc, x), max_level)
}

/// Evaluate the full simplex tree of a product domain.
pub fn product_tree<S, R>(
    rc: R,
    points: &[Vec<S>],
    max_level: usize,
) -> Result<Vec<ProductLevel<S>>, TreeError>
where
    S: Scalar,
    R: ThreeTermRecurrence<S>,
{
    collect_levels(&mut ProductEval::new(rc, points)?, max_level)
}

/// Evaluate a 1-3-5 tree with the default auxiliary factors √(1 − x²).
pub fn spherical_tree<S, R>(
    rc: R,
    x: &[S],
    max_level: usize,
) -> Result<Vec<Vec<Vec<S>>>, TreeError>
where
    S: Scalar,
    R: SphericalRecurrence<S>,
{
    collect_levels(&mut SphericalEval::new(rc, x)?, max_level)
}

/// Evaluate a 1-3-5 tree with caller-supplied auxiliary factors.
pub fn spherical_tree_with_xi<S, R>(
    rc: R,
    x: &[S],
    xi0: Vec<S>,
    xi1: Vec<S>,
    max_level: usize,
) -> Result<Vec<Vec<Vec<S>>>, TreeError>
where
    S: Scalar,
    R: SphericalRecurrence<S>,
{
    collect_levels(&mut SphericalEval::with_xi(rc, x, xi0, xi1)?, max_level)
}

/// Evaluate a unit-disk tree at the coordinate arrays `(x0, x1)`.
pub fn disk_tree<S, R>(
    rc: R,
    x0: &[S],
    x1: &[S],
    max_level: usize,
) -> Result<Vec<Vec<Vec<S>>>, TreeError>
where
    S: Scalar,
    R: DiskRecurrence<S>,
{
    collect_levels(&mut DiskEval::new(rc, x0, x1)?, max_level)
}
