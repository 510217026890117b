//! Gauss-Legendre rules for the unit interval `[0, 1]`.

use std::f64::consts::PI;

/// Evaluates the Legendre polynomial `P_n` and its derivative at `x ∈ (-1, 1)`.
///
/// The derivative formula is singular at `|x| == 1`, which never occurs for interior roots.
fn legendre(n: usize, x: f64) -> (f64, f64) {
    // m P_m(x) = (2m - 1) x P_{m - 1}(x) - (m - 1) P_{m - 2}(x)
    let mut p_current = 1.0;
    let mut p_previous = 0.0;
    for m in 1..=n {
        let m = m as f64;
        let p_next = ((2.0 * m - 1.0) * x * p_current - (m - 1.0) * p_previous) / m;
        p_previous = p_current;
        p_current = p_next;
    }

    let n = n as f64;
    let dp = n * (x * p_current - p_previous) / (x * x - 1.0);
    (p_current, dp)
}

/// Gauss-Legendre quadrature on `[0, 1]` with `num_points` points.
///
/// Returns `(weights, points)` with weights summing to one. The rule integrates polynomials
/// of degree up to `2 n - 1` exactly. Points are returned in increasing order.
///
/// # Panics
///
/// Panics if zero points are requested.
pub fn gauss_legendre(num_points: usize) -> (Vec<f64>, Vec<f64>) {
    let n = num_points;
    assert!(n > 0, "number of points must be positive");

    // Roots of P_n on (-1, 1) come in symmetric pairs, so we only search for the positive half
    // with Newton's method and mirror them afterwards
    let half = (n + 1) / 2;
    let mut roots = Vec::with_capacity(half);
    for i in 0..half {
        let mut x = (PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
        let (mut p, mut dp) = legendre(n, x);
        loop {
            let dx = -p / dp;
            x += dx;
            (p, dp) = legendre(n, x);
            if dx.abs() <= 1e-15 {
                break;
            }
        }
        let w = 2.0 / ((1.0 - x * x) * dp * dp);
        roots.push((x, w));
    }

    let mut weights = vec![0.0; n];
    let mut points = vec![0.0; n];
    for (i, &(x, w)) in roots.iter().enumerate() {
        // Map [-1, 1] -> [0, 1], which halves the weights
        let (lower, upper) = (i, n - 1 - i);
        points[lower] = 0.5 * (1.0 - x);
        points[upper] = 0.5 * (1.0 + x);
        weights[lower] = 0.5 * w;
        weights[upper] = 0.5 * w;
    }

    (weights, points)
}
