//! Degree-vector bookkeeping for simplex-ordered multivariate levels.
//!
//! Level L of a dim-dimensional product tree holds one value per degree
//! vector of length dim summing to L, laid out in a fixed triangular
//! decomposition: the axis-0 block is the whole previous level with axis 0
//! incremented, the axis-i block is the zero-prefix tail of the previous
//! level with axis i incremented, ending in a single entry at the last axis.
//! For three dimensions the levels look like
//!
//! ```text
//! L = 2:        (2, 0, 0)
//!          (1, 1, 0) (1, 0, 1)
//!     (0, 2, 0) (0, 1, 1) (0, 0, 2)
//! ```
//!
//! The functions here size, enumerate, and invert that layout; the product
//! evaluator's recurrence slicing is built on the same counts.

/// Binomial coefficient C(n, k), 0 when k > n.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut out: usize = 1;
    for i in 0..k {
        // exact at every step: the running product of i+1 consecutive
        // integers is divisible by (i+1)!
        out = out * (n - i) / (i + 1);
    }
    out
}

/// Number of degree vectors of length `dim` summing to `degree`:
/// C(degree + dim - 1, dim - 1). This is the entry count of level `degree`.
pub fn simplex_size(degree: usize, dim: usize) -> usize {
    debug_assert!(dim >= 1);
    binomial(degree + dim - 1, dim - 1)
}

/// All degree vectors of level `level` in canonical order.
pub fn level_degrees(level: usize, dim: usize) -> Vec<Vec<usize>> {
    assert!(dim >= 1, "need at least one axis");
    let mut current = vec![vec![0usize; dim]];
    for _ in 0..level {
        current = next_level_degrees(&current, dim);
    }
    current
}

/// Degree vectors of the next level, built from the previous level by the
/// triangular decomposition rule.
pub fn next_level_degrees(prev: &[Vec<usize>], dim: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    for i in 0..dim {
        for deg in prev.iter().filter(|d| d[..i].iter().all(|&v| v == 0)) {
            let mut d = deg.clone();
            d[i] += 1;
            out.push(d);
        }
    }
    out
}

/// Position of a degree vector within its level's canonical order.
///
/// Within each axis block, larger leading degrees come first; the remaining
/// axes recurse on the leftover degree.
pub fn degree_index(degree: &[usize]) -> usize {
    let dim = degree.len();
    assert!(dim >= 1, "need at least one axis");
    let mut level: usize = degree.iter().sum();
    let mut pos = 0;
    for (i, &d) in degree.iter().take(dim - 1).enumerate() {
        for v in (d + 1)..=level {
            pos += simplex_size(level - v, dim - i - 1);
        }
        level -= d;
    }
    pos
}
