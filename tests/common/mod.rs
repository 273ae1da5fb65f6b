//! Shared quadrature support for the integration tests.
//!
//! Reference rules used to check orthonormality claims:
//! - Gauss-Lobatto-Legendre nodes/weights on [-1, 1] (exact for polynomials
//!   up to degree 2N-1), found by Newton iteration on (1-x²)P'_N(x).
//! - A polar product rule on the unit disk, exact for bivariate polynomials:
//!   Gauss-Lobatto in the radius against a uniform angular grid.

use ortho_rs::{univariate_tree, Legendre};

/// Evaluate P_n(x) and P'_n(x) through the crate's own univariate tree.
pub fn legendre_and_derivative(n: usize, x: f64) -> (f64, f64) {
    let tree = univariate_tree(Legendre, &[x], n).unwrap();
    let p_n = tree[n][0];
    if n == 0 {
        return (p_n, 0.0);
    }
    let dp = if (x * x - 1.0).abs() < 1e-14 {
        let sign = if x > 0.0 || n % 2 == 1 { 1.0 } else { -1.0 };
        sign * (n * (n + 1)) as f64 / 2.0
    } else {
        n as f64 * (x * p_n - tree[n - 1][0]) / (x * x - 1.0)
    };
    (p_n, dp)
}

/// Gauss-Lobatto-Legendre nodes for polynomial order N: the endpoints plus
/// the roots of P'_N, found by Newton iteration from Chebyshev-Lobatto
/// starting values.
pub fn gauss_lobatto_nodes(order: usize) -> Vec<f64> {
    let n = order;
    if n == 0 {
        return vec![0.0];
    }
    if n == 1 {
        return vec![-1.0, 1.0];
    }

    let mut nodes: Vec<f64> = (0..=n)
        .map(|j| -(std::f64::consts::PI * j as f64 / n as f64).cos())
        .collect();
    nodes[0] = -1.0;
    nodes[n] = 1.0;

    for node in nodes.iter_mut().take(n).skip(1) {
        let mut x = *node;
        for _ in 0..100 {
            let (p_n, dp_n) = legendre_and_derivative(n, x);
            // Newton step for the roots of (1-x²)P'_N, whose derivative
            // collapses to -N(N+1)P_N
            let update = (1.0 - x * x) * dp_n / ((n * (n + 1)) as f64 * p_n);
            if update.abs() < 1e-15 {
                break;
            }
            x += update;
        }
        *node = x;
    }
    nodes
}

/// Gauss-Lobatto-Legendre weights: w_j = 2 / (N(N+1) [P_N(x_j)]²).
pub fn gauss_lobatto_weights(order: usize, nodes: &[f64]) -> Vec<f64> {
    let n = order;
    if n == 0 {
        return vec![2.0];
    }
    let denom = (n * (n + 1)) as f64;
    nodes
        .iter()
        .map(|&x| {
            let (p_n, _) = legendre_and_derivative(n, x);
            2.0 / (denom * p_n * p_n)
        })
        .collect()
}

/// Nodes and weights together.
pub fn gauss_lobatto_rule(order: usize) -> (Vec<f64>, Vec<f64>) {
    let nodes = gauss_lobatto_nodes(order);
    let weights = gauss_lobatto_weights(order, &nodes);
    (nodes, weights)
}

/// Quadrature rule on the unit disk, exact for bivariate polynomials of
/// total degree <= `degree`. Returns (x, y, w) triples.
///
/// Uses ∫∫ f dA = ∫₀¹ ∫₀^{2π} f(r cosθ, r sinθ) r dθ dr: the radial factor
/// is polynomial in r, so a mapped Gauss-Lobatto rule handles it, and a
/// uniform angular grid is exact for trigonometric polynomials below its
/// point count.
pub fn disk_rule(degree: usize) -> Vec<(f64, f64, f64)> {
    let (r_nodes, r_weights) = gauss_lobatto_rule(degree + 1);
    let n_theta = 2 * degree + 2;
    let theta_weight = 2.0 * std::f64::consts::PI / n_theta as f64;

    let mut rule = Vec::with_capacity(r_nodes.len() * n_theta);
    for (&t, &wt) in r_nodes.iter().zip(&r_weights) {
        // map [-1, 1] -> [0, 1]
        let r = (t + 1.0) / 2.0;
        let wr = wt / 2.0;
        for j in 0..n_theta {
            let theta = theta_weight * j as f64;
            rule.push((r * theta.cos(), r * theta.sin(), wr * theta_weight * r));
        }
    }
    rule
}

pub fn factorial(n: usize) -> f64 {
    (1..=n).map(|i| i as f64).product()
}
