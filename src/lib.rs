//! # ortho-rs
//!
//! A library for evaluating entire trees of orthogonal polynomials by
//! driving their recurrence relations incrementally.
//!
//! This crate provides the core building blocks:
//! - Univariate three-term recurrences (Legendre, Chebyshev, ...)
//! - Tensor-product domains in any dimension, with simplex-ordered levels
//!   and explicit degree-vector bookkeeping
//! - Associated-Legendre 1-3-5 trees for spherical harmonics
//! - Orthogonal polynomials on the unit disk
//! - Floating-point and exact-rational arithmetic behind one algorithmic
//!   skeleton
//!
//! Recurrence coefficients are consumed through provider traits; a handful
//! of reference families ship in [`recurrence`]. A tree is either pulled
//! level by level from an evaluator or materialized in one call:
//!
//! ```
//! use ortho_rs::{univariate_tree, Legendre};
//!
//! let tree = univariate_tree(Legendre, &[0.5f64], 3).unwrap();
//! assert_eq!(tree[1], vec![0.5]); // P_1(0.5)
//! ```

pub mod error;
pub mod numeric;
pub mod recurrence;
pub mod tree;

// Re-export main types for convenience
pub use error::TreeError;
pub use numeric::{broadcast, Scalar};
pub use recurrence::{
    AssociatedLegendre, ChebyshevT, DiskCoeffs, DiskRecurrence, DiskXu, Legendre,
    LegendreNormalized, SphericalCoeffs, SphericalRecurrence, ThreeTermRecurrence,
};
pub use tree::degrees::{binomial, degree_index, level_degrees, simplex_size};
pub use tree::{
    collect_levels, disk_tree, product_tree, spherical_tree, spherical_tree_with_xi,
    univariate_tree, DiskEval, LevelEval, ProductEval, ProductLevel, SphericalEval,
    UnivariateEval,
};
