use std::{error::Error, fmt::Display};

use crate::sampler;

/// Relative tolerance under which interval widths are treated as equal.
const UNIFORM_SPACING_TOLERANCE: f64 = 1e-9;

/// Grid represents points through which spline passes.
/// - `x` - strictly increasing abscissas,
/// - `y` - ordinates, `y[i]` belongs to `x[i]`,
/// - `spacing` - interval widths, `spacing[i] = x[i+1] - x[i]`,
/// - `is_spacing_uniform` - whether interval index may be computed directly from `x`.
#[derive(Debug, Clone)]
pub struct Grid {
    x: Vec<f64>,
    y: Vec<f64>,
    spacing: Vec<f64>,
    is_spacing_uniform: bool,
}

impl Grid {
    /// Creates [Grid] from paired abscissas and ordinates.
    /// # Example
    /// ```
    /// use cubic_spline_interpolation::Grid;
    ///
    /// let grid = Grid::new(vec![0.0, 0.5, 1.0], vec![1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(3, grid.len());
    /// assert!(grid.is_spacing_uniform());
    /// ```
    /// # Errors
    /// Error is returned when `x` and `y` lengths differ, when there are fewer than 3 points
    /// or when `x` is not strictly increasing.
    /// ```
    /// use cubic_spline_interpolation::Grid;
    ///
    /// let grid = Grid::new(vec![0.0, 0.5, 0.3, 1.0], vec![0.0, 1.0, 2.0, 3.0]);
    /// assert!(grid.is_err());
    /// ```
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, Box<dyn Error>> {
        if x.len() != y.len() {
            return Err(Box::new(GridError(format!(
                "x has {} points while y has {}",
                x.len(),
                y.len()
            ))));
        }
        if x.len() < 3 {
            return Err(Box::new(GridError("grid must have at least 3 points".to_string())));
        }

        // negated comparison also rejects NaN
        if let Some(i) = x.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(Box::new(GridError(format!(
                "x is not strictly increasing at index {}: {} followed by {}",
                i + 1,
                x[i],
                x[i + 1]
            ))));
        }

        let spacing: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let first = spacing[0];
        let is_spacing_uniform = spacing
            .iter()
            .all(|h| (h - first).abs() <= UNIFORM_SPACING_TOLERANCE * first);

        Ok(Grid { x, y, spacing, is_spacing_uniform })
    }

    /// Samples `f` on `n` uniformly spaced points over [0, 1].
    pub fn sample<F: Fn(f64) -> f64>(f: F, n: usize) -> Result<Self, Box<dyn Error>> {
        let (x, y) = sampler::sample(f, n);
        Grid::new(x, y)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn spacing(&self) -> &[f64] {
        &self.spacing
    }

    pub fn is_spacing_uniform(&self) -> bool {
        self.is_spacing_uniform
    }

    /// Index `i` of interval `[x[i], x[i+1])` containing `x`. Queries outside of the grid
    /// are clamped to the first or last interval.
    pub fn locate(&self, x: f64) -> usize {
        if self.is_spacing_uniform {
            self.locate_uniform(x)
        } else {
            self.locate_bisect(x)
        }
    }

    /// Same as [Grid::locate] but checks `hint` and its successor first.
    pub fn locate_with_hint(&self, hint: usize, x: f64) -> usize {
        let last = self.last_interval();
        if hint <= last && self.is_in_interval(hint, x) {
            return hint;
        }
        if hint < last && self.is_in_interval(hint + 1, x) {
            return hint + 1;
        }
        self.locate(x)
    }

    fn locate_bisect(&self, x: f64) -> usize {
        let mut min = 0;
        let mut max = self.x.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.x[mid] {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn locate_uniform(&self, x: f64) -> usize {
        let last = self.last_interval();
        let n = self.x.len();
        let relative_x = (x - self.x[0]) / (self.x[n - 1] - self.x[0]);
        // saturating cast maps negative and NaN to 0
        let mut index = ((relative_x * last as f64).floor() as usize).min(last);

        // rounding in relative_x may land one interval off near knots
        if index > 0 && x < self.x[index] {
            index -= 1;
        } else if index < last && x >= self.x[index + 1] {
            index += 1;
        }
        index
    }

    fn is_in_interval(&self, interval: usize, x: f64) -> bool {
        let last = self.last_interval();
        let above_start = interval == 0 || self.x[interval] <= x;
        let below_end = interval == last || x < self.x[interval + 1];
        above_start && below_end
    }

    fn last_interval(&self) -> usize {
        self.x.len() - 2
    }
}

#[derive(Debug)]
pub struct GridError(String);

impl Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Grid: {}", self.0)
    }
}

impl Error for GridError {}
