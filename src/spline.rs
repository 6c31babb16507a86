use std::error::Error;

use log::debug;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::{grid::Grid, tridiagonal::solve_tridiagonal};

/// Kind of boundary condition requested for a spline. Values imposed at the ends are
/// supplied separately, see [Boundary].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryCondition {
    SecondDerivative,
    FirstDerivative,
    Natural,
}

impl BoundaryCondition {
    pub const ALL: [BoundaryCondition; 3] = [
        BoundaryCondition::SecondDerivative,
        BoundaryCondition::FirstDerivative,
        BoundaryCondition::Natural,
    ];

    /// Pairs the condition with values at the start and end of the grid.
    /// Values are ignored for [BoundaryCondition::Natural].
    pub fn with_values(self, start: f64, end: f64) -> Boundary {
        match self {
            BoundaryCondition::FirstDerivative => Boundary::FirstDerivative { start, end },
            BoundaryCondition::SecondDerivative => Boundary::SecondDerivative { start, end },
            BoundaryCondition::Natural => Boundary::natural(),
        }
    }
}

/// Equations closing the spline system at both ends of the grid.
/// - `FirstDerivative` - spline slope is fixed at both ends,
/// - `SecondDerivative` - spline moment is fixed at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    FirstDerivative { start: f64, end: f64 },
    SecondDerivative { start: f64, end: f64 },
}

impl Boundary {
    /// Natural spline, both end moments are zero.
    pub fn natural() -> Self {
        Boundary::SecondDerivative { start: 0.0, end: 0.0 }
    }
}

/// Interpolating cubic spline fitted on a [Grid].
///
/// Spline is stored as its moments `M[i]`, second derivative values at the knots.
/// Once created it is never modified, all queries take `&self`.
/// # Example
/// ```
/// use cubic_spline_interpolation::{Boundary, Grid, Spline};
/// use assert_approx_eq::assert_approx_eq;
///
/// let grid = Grid::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
/// let spline = Spline::fit(grid, Boundary::natural()).unwrap();
///
/// assert_approx_eq!(1.0, spline.evaluate(1.0), 1e-12);
/// assert_approx_eq!(0.6875, spline.evaluate(0.5), 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Spline {
    grid: Grid,
    boundary: Boundary,
    moments: DVector<f64>,
}

impl Spline {
    /// Solves for moments of spline passing through `grid` and satisfying `boundary`.
    pub fn fit(grid: Grid, boundary: Boundary) -> Result<Self, Box<dyn Error>> {
        let moments = Self::calculate_moments(&grid, boundary)?;
        debug!(
            "fitted spline on {} points ({} spacing) with {:?}",
            grid.len(),
            if grid.is_spacing_uniform() { "uniform" } else { "general" },
            boundary
        );
        Ok(Spline { grid, boundary, moments })
    }

    /// Samples `f` on `n` uniform points over [0, 1] and fits spline through them.
    pub fn from_function<F: Fn(f64) -> f64>(f: F, n: usize, boundary: Boundary) -> Result<Self, Box<dyn Error>> {
        let grid = Grid::sample(f, n)?;
        Spline::fit(grid, boundary)
    }

    /// Fits spline again from the same grid and boundary. Result has the same moments.
    pub fn refit(&self) -> Result<Self, Box<dyn Error>> {
        Spline::fit(self.grid.clone(), self.boundary)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn moments(&self) -> &DVector<f64> {
        &self.moments
    }

    /// Spline value at `x`. Points outside of the grid are evaluated with the closest
    /// boundary piece.
    pub fn evaluate(&self, x: f64) -> f64 {
        let index = self.grid.locate(x);
        self.evaluate_piece(index, x)
    }

    /// Evaluates every element of `x_vector`, order is preserved.
    pub fn evaluate_many(&self, x_vector: &[f64]) -> Vec<f64> {
        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            index = self.grid.locate_with_hint(index, *x);
            results.push(self.evaluate_piece(index, *x));
        }
        results
    }

    /// First derivative of the spline at `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        let i = self.grid.locate(x);
        let (x0, x1, h) = self.piece_bounds(i);
        let (y0, y1) = (self.grid.y()[i], self.grid.y()[i + 1]);
        let (m0, m1) = (self.moments[i], self.moments[i + 1]);

        m1 * (x - x0).powi(2) / (2.0 * h) - m0 * (x1 - x).powi(2) / (2.0 * h) + (y1 - y0) / h
            - h * (m1 - m0) / 6.0
    }

    /// Second derivative of the spline at `x`, linear between moments.
    pub fn second_derivative(&self, x: f64) -> f64 {
        let i = self.grid.locate(x);
        let (x0, x1, h) = self.piece_bounds(i);
        (self.moments[i] * (x1 - x) + self.moments[i + 1] * (x - x0)) / h
    }

    fn evaluate_piece(&self, i: usize, x: f64) -> f64 {
        let (x0, x1, h) = self.piece_bounds(i);
        let (y0, y1) = (self.grid.y()[i], self.grid.y()[i + 1]);
        let (m0, m1) = (self.moments[i], self.moments[i + 1]);

        let right_cubic = m1 * (x - x0).powi(3) / (6.0 * h);
        let left_cubic = m0 * (x1 - x).powi(3) / (6.0 * h);
        let right_linear = (y1 - h * h * m1 / 6.0) * (x - x0) / h;
        let left_linear = (y0 - h * h * m0 / 6.0) * (x1 - x) / h;
        right_cubic + left_cubic + right_linear + left_linear
    }

    fn piece_bounds(&self, i: usize) -> (f64, f64, f64) {
        (self.grid.x()[i], self.grid.x()[i + 1], self.grid.spacing()[i])
    }

    fn calculate_moments(grid: &Grid, boundary: Boundary) -> Result<DVector<f64>, Box<dyn Error>> {
        let n = grid.len();
        let y = grid.y();
        let h = grid.spacing();

        let mut a = vec![0.0; n];
        let mut b = vec![0.0; n];
        let mut c = vec![0.0; n];
        let mut d = vec![0.0; n];

        for i in 1..n - 1 {
            a[i] = h[i - 1];
            b[i] = 2.0 * (h[i - 1] + h[i]);
            c[i] = h[i];
            d[i] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
        }

        let last = n - 1;
        match boundary {
            Boundary::FirstDerivative { start, end } => {
                b[0] = 2.0 * h[0];
                c[0] = h[0];
                d[0] = 6.0 * ((y[1] - y[0]) / h[0] - start);

                a[last] = h[last - 1];
                b[last] = 2.0 * h[last - 1];
                d[last] = 6.0 * (end - (y[last] - y[last - 1]) / h[last - 1]);
            }
            Boundary::SecondDerivative { start, end } => {
                b[0] = 1.0;
                c[0] = 0.0;
                d[0] = start;

                a[last] = 0.0;
                b[last] = 1.0;
                d[last] = end;
            }
        }

        solve_tridiagonal(&a, &b, &c, &d)
    }
}
