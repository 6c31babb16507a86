//! Uniform sampling of the unit interval.

/// `n` uniformly spaced points over [0, 1]. Both endpoints are exact.
/// For `n < 2` only the left endpoint is returned.
pub fn uniform_points(n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![0.0; n];
    }
    let intervals = (n - 1) as f64;
    (0..n).map(|i| i as f64 / intervals).collect()
}

/// Midpoints of the `n - 1` equal cells that partition [0, 1].
pub fn midpoints(n: usize) -> Vec<f64> {
    if n < 2 {
        return Vec::new();
    }
    let intervals = (n - 1) as f64;
    (0..n - 1).map(|i| (i as f64 + 0.5) / intervals).collect()
}

/// Evaluates `f` on [uniform_points] and returns parallel x and y vectors.
pub fn sample<F: Fn(f64) -> f64>(f: F, n: usize) -> (Vec<f64>, Vec<f64>) {
    let x = uniform_points(n);
    let y = x.iter().map(|x| f(*x)).collect();
    (x, y)
}
