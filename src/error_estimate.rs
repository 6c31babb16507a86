use crate::{sampler, spline::Spline};

/// Maximal absolute deviation between `f` and `spline` over midpoints of `n - 1` equal cells
/// of [0, 1]. Knots themselves are not sampled.
///
/// A NaN deviation makes the result NaN. For `n < 2` there are no cells and the result is `0.0`.
/// # Example
/// ```
/// use cubic_spline_interpolation::{max_error, Boundary, Spline};
///
/// let f = |x: f64| 2.0 * x - 1.0;
/// let spline = Spline::from_function(f, 5, Boundary::natural()).unwrap();
/// assert!(max_error(f, &spline, 100) < 1e-12);
/// ```
pub fn max_error<F: Fn(f64) -> f64>(f: F, spline: &Spline, n: usize) -> f64 {
    let points = sampler::midpoints(n);
    let values = spline.evaluate_many(&points);

    points
        .iter()
        .zip(values)
        .map(|(x, s)| (f(*x) - s).abs())
        .fold(0.0, |max, deviation| if deviation.is_nan() || deviation > max { deviation } else { max })
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::{
        function::{FunctionFamily, FunctionSpec},
        grid::Grid,
        spline::{Boundary, BoundaryCondition},
    };

    #[test]
    fn delta_bump_on_eleven_points() {
        let spec = FunctionSpec::new(FunctionFamily::Delta, 0.1);
        let f = spec.evaluator();
        assert_eq!(1.0, f(0.5));

        let spline = Spline::from_function(&f, 11, spec.boundary(BoundaryCondition::Natural)).unwrap();
        assert_approx_eq!(spline.evaluate(0.5), 1.0, 1e-3);

        let error = max_error(&f, &spline, 11);
        assert!(error > 0.0);
        assert!(error < 0.05);

        let dense_error = max_error(&f, &spline, 1000);
        assert!(dense_error > 0.0);
        assert!(dense_error < 0.05);
    }

    #[test]
    fn linear_function_has_no_error() {
        let f = |x: f64| 4.0 * x - 2.5;
        let boundaries = [
            Boundary::natural(),
            Boundary::FirstDerivative { start: 4.0, end: 4.0 },
            Boundary::SecondDerivative { start: 0.0, end: 0.0 },
        ];
        for boundary in boundaries {
            let spline = Spline::from_function(f, 7, boundary).unwrap();
            assert!(max_error(f, &spline, 500) < 1e-12, "{:?}", boundary);
        }
    }

    #[test]
    fn exact_boundary_derivatives_reduce_error() {
        let spec = FunctionSpec::new(FunctionFamily::First, 0.05);
        let f = spec.evaluator();

        let natural = Spline::from_function(&f, 50, spec.boundary(BoundaryCondition::Natural)).unwrap();
        let clamped = Spline::from_function(&f, 50, spec.boundary(BoundaryCondition::FirstDerivative)).unwrap();
        let pinned = Spline::from_function(&f, 50, spec.boundary(BoundaryCondition::SecondDerivative)).unwrap();

        let natural_error = max_error(&f, &natural, 50);
        assert!(max_error(&f, &clamped, 50) < natural_error);
        assert!(max_error(&f, &pinned, 50) < natural_error);
    }

    #[test]
    fn nan_is_reported() {
        let grid = Grid::new(vec![0.0, 0.5, 1.0], vec![0.0, 0.5, 1.0]).unwrap();
        let spline = Spline::fit(grid, Boundary::natural()).unwrap();

        let error = max_error(|x| if x > 0.7 { f64::NAN } else { x }, &spline, 5);
        assert!(error.is_nan());
    }

    #[test]
    fn no_cells() {
        let spline = Spline::from_function(|x| x * x, 4, Boundary::natural()).unwrap();
        assert_eq!(0.0, max_error(|x| x * x, &spline, 1));
    }
}
