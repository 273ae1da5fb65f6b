//! Floating and exact-rational evaluation agree on rational families.
//!
//! The same tree is evaluated at `f64` and at `BigRational`; converting the
//! exact results to floating point must land within floating tolerance for
//! every level up to a moderate depth.

use num_rational::BigRational;
use ortho_rs::{
    product_tree, spherical_tree, univariate_tree, AssociatedLegendre, ChebyshevT, Legendre,
    Scalar,
};

const MAX_LEVEL: usize = 8;
const TOL: f64 = 1e-12;

fn q(num: i64, den: i64) -> BigRational {
    BigRational::from_ratio(num, den)
}

#[test]
fn test_univariate_legendre_agreement() {
    let points = [(3i64, 10i64), (-1, 2), (9, 10)];
    let x_f: Vec<f64> = points.iter().map(|&(n, d)| f64::from_ratio(n, d)).collect();
    let x_q: Vec<BigRational> = points.iter().map(|&(n, d)| q(n, d)).collect();

    let tree_f = univariate_tree(Legendre, &x_f, MAX_LEVEL).unwrap();
    let tree_q = univariate_tree(Legendre, &x_q, MAX_LEVEL).unwrap();

    for (level, (lf, lq)) in tree_f.iter().zip(&tree_q).enumerate() {
        for (vf, vq) in lf.iter().zip(lq) {
            assert!(
                (vf - vq.to_f64()).abs() < TOL,
                "level {}: {} vs {}",
                level,
                vf,
                vq.to_f64()
            );
        }
    }
}

#[test]
fn test_univariate_chebyshev_agreement() {
    let tree_f = univariate_tree(ChebyshevT, &[0.25f64], MAX_LEVEL).unwrap();
    let tree_q = univariate_tree(ChebyshevT, &[q(1, 4)], MAX_LEVEL).unwrap();
    for (lf, lq) in tree_f.iter().zip(&tree_q) {
        assert!((lf[0] - lq[0].to_f64()).abs() < TOL);
    }
}

#[test]
fn test_product_agreement_3d() {
    let coords = [(1i64, 2i64), (-1, 3), (2, 5)];
    let points_f: Vec<Vec<f64>> = coords
        .iter()
        .map(|&(n, d)| vec![f64::from_ratio(n, d)])
        .collect();
    let points_q: Vec<Vec<BigRational>> = coords.iter().map(|&(n, d)| vec![q(n, d)]).collect();

    let tree_f = product_tree(Legendre, &points_f, MAX_LEVEL).unwrap();
    let tree_q = product_tree(Legendre, &points_q, MAX_LEVEL).unwrap();

    for (level, (lf, lq)) in tree_f.iter().zip(&tree_q).enumerate() {
        assert_eq!(lf.degrees, lq.degrees, "level {} degree layout", level);
        for ((vf, vq), deg) in lf.values.iter().zip(&lq.values).zip(&lf.degrees) {
            assert!(
                (vf[0] - vq[0].to_f64()).abs() < TOL,
                "level {} degree {:?}: {} vs {}",
                level,
                deg,
                vf[0],
                vq[0].to_f64()
            );
        }
    }
}

#[test]
fn test_spherical_agreement() {
    // x = 3/5 keeps the auxiliary factor rational: sqrt(1 - 9/25) = 4/5
    let tree_f = spherical_tree(AssociatedLegendre, &[0.6f64], MAX_LEVEL).unwrap();
    let tree_q = spherical_tree(AssociatedLegendre, &[q(3, 5)], MAX_LEVEL).unwrap();

    for (level, (lf, lq)) in tree_f.iter().zip(&tree_q).enumerate() {
        assert_eq!(lf.len(), lq.len());
        for (slot, (vf, vq)) in lf.iter().zip(lq).enumerate() {
            assert!(
                (vf[0] - vq[0].to_f64()).abs() < TOL,
                "level {} slot {}: {} vs {}",
                level,
                slot,
                vf[0],
                vq[0].to_f64()
            );
        }
    }
}

#[test]
fn test_exact_spherical_values_are_exact() {
    // not just close: the exact tree reproduces hand-reduced fractions
    let tree = spherical_tree(AssociatedLegendre, &[q(3, 5)], 2).unwrap();
    // level 1: [s/2, x, s/2] with x = 3/5, s = 4/5
    assert_eq!(tree[1][0][0], q(2, 5));
    assert_eq!(tree[1][1][0], q(3, 5));
    assert_eq!(tree[1][2][0], q(2, 5));
    // level 2 center: (3x^2 - 1)/4 = 1/50
    assert_eq!(tree[2][2][0], q(1, 50));
}
