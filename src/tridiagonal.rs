use std::{error::Error, fmt::Display};

use nalgebra::DVector;

/// Solves tridiagonal system `A u = d` with the Thomas algorithm.
/// - `a` - sub-diagonal, `a[0]` is not used,
/// - `b` - main diagonal,
/// - `c` - super-diagonal, `c[n-1]` is not used,
/// - `d` - right hand side.
///
/// Pivots are not checked, system is expected to be diagonally dominant.
/// # Example
/// ```
/// use cubic_spline_interpolation::solve_tridiagonal;
///
/// let a = [0.0, 1.0, 1.0];
/// let b = [4.0, 4.0, 4.0];
/// let c = [1.0, 1.0, 0.0];
/// let d = [5.0, 6.0, 5.0];
/// let u = solve_tridiagonal(&a, &b, &c, &d).unwrap();
///
/// assert!((u[0] - 1.0).abs() < 1e-12);
/// assert!((u[1] - 1.0).abs() < 1e-12);
/// assert!((u[2] - 1.0).abs() < 1e-12);
/// ```
/// # Errors
/// Error is returned when diagonals and right hand side differ in length or are empty.
pub fn solve_tridiagonal(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> Result<DVector<f64>, Box<dyn Error>> {
    let n = b.len();
    if a.len() != n || c.len() != n || d.len() != n {
        return Err(Box::new(SolverError(format!(
            "diagonals and right hand side lengths differ: a={}, b={}, c={}, d={}",
            a.len(), b.len(), c.len(), d.len()
        ))));
    }
    if n == 0 {
        return Err(Box::new(SolverError("system has no equations".to_string())));
    }
    if n == 1 {
        return Ok(DVector::from_element(1, d[0] / b[0]));
    }

    let mut alpha = vec![0.0; n - 1];
    let mut beta = vec![0.0; n - 1];
    alpha[0] = -c[0] / b[0];
    beta[0] = d[0] / b[0];

    for i in 1..n - 1 {
        let pivot = b[i] + alpha[i - 1] * a[i];
        alpha[i] = -c[i] / pivot;
        beta[i] = (d[i] - beta[i - 1] * a[i]) / pivot;
    }

    let mut u = DVector::<f64>::zeros(n);
    u[n - 1] = (d[n - 1] - beta[n - 2] * a[n - 1]) / (b[n - 1] + alpha[n - 2] * a[n - 1]);
    for i in (0..n - 1).rev() {
        u[i] = alpha[i] * u[i + 1] + beta[i];
    }
    Ok(u)
}

#[derive(Debug)]
pub struct SolverError(String);

impl Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in tridiagonal solver: {}", self.0)
    }
}

impl Error for SolverError {}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use nalgebra::DMatrix;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    #[test]
    fn identity_system() {
        let d = vec![3.5, -1.25, 0.0, 7.0, 1e-12];
        let n = d.len();
        let zeros = vec![0.0; n];
        let ones = vec![1.0; n];

        let u = solve_tridiagonal(&zeros, &ones, &zeros, &d).unwrap();

        assert_eq!(n, u.len());
        for i in 0..n {
            assert_eq!(d[i], u[i]);
        }
    }

    #[test]
    fn single_equation() {
        let u = solve_tridiagonal(&[0.0], &[4.0], &[0.0], &[2.0]).unwrap();
        assert_eq!(1, u.len());
        assert_approx_eq!(u[0], 0.5, 1e-15);
    }

    #[test]
    fn two_equations() {
        // 2 u0 + u1 = 4, u0 + 3 u1 = 7
        let u = solve_tridiagonal(&[0.0, 1.0], &[2.0, 3.0], &[1.0, 0.0], &[4.0, 7.0]).unwrap();
        assert_approx_eq!(u[0], 1.0, 1e-12);
        assert_approx_eq!(u[1], 2.0, 1e-12);
    }

    #[test]
    fn matches_dense_lu() {
        let eps = 1e-10;
        let mut rng = StdRng::seed_from_u64(7);
        let n = 25;

        let mut a: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let mut c: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let b: Vec<f64> = (0..n).map(|_| rng.gen_range(3.0..5.0)).collect();
        let d: Vec<f64> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
        a[0] = 0.0;
        c[n - 1] = 0.0;

        let mut matrix = DMatrix::<f64>::zeros(n, n);
        for i in 0..n {
            matrix[(i, i)] = b[i];
            if i > 0 {
                matrix[(i, i - 1)] = a[i];
            }
            if i < n - 1 {
                matrix[(i, i + 1)] = c[i];
            }
        }
        let expected = matrix.lu().solve(&DVector::from_vec(d.clone())).unwrap();

        let u = solve_tridiagonal(&a, &b, &c, &d).unwrap();
        for i in 0..n {
            assert_approx_eq!(u[i], expected[i], eps);
        }
    }

    #[test]
    fn length_mismatch() {
        let result = solve_tridiagonal(&[0.0, 1.0], &[2.0, 2.0, 2.0], &[1.0, 1.0, 0.0], &[1.0, 1.0, 1.0]);
        assert!(result.is_err());

        let result = solve_tridiagonal(&[0.0, 1.0, 1.0], &[2.0, 2.0, 2.0], &[1.0, 1.0, 0.0], &[1.0, 1.0]);
        let error = result.unwrap_err();
        assert!(error.downcast_ref::<SolverError>().is_some());
    }

    #[test]
    fn empty_system() {
        assert!(solve_tridiagonal(&[], &[], &[], &[]).is_err());
    }
}
