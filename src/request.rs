use std::{error::Error, fmt::Display};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error_estimate::max_error,
    function::{FunctionFamily, FunctionSpec},
    grid::Grid,
    sampler,
    spline::{BoundaryCondition, Spline},
};

pub const DEFAULT_REFERENCE_POINTS: usize = 1000;
pub const MAX_SAMPLE_POINTS: usize = 100_000;
pub const MAX_REFERENCE_POINTS: usize = 1_000_000;

fn default_reference_points() -> usize {
    DEFAULT_REFERENCE_POINTS
}

/// Single comparison job: one function sampled once and fitted with every listed
/// boundary condition.
/// - `function` - family name, unknown names fall back to `first`,
/// - `epsilon` - shape parameter, must be positive and finite,
/// - `sample_points` - number of knots on [0, 1],
/// - `reference_points` - number of points of the dense grid used for output and error,
/// - `boundary_conditions` - conditions to compare, results keep this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineRequest {
    pub function: String,
    pub epsilon: f64,
    pub sample_points: usize,
    #[serde(default = "default_reference_points")]
    pub reference_points: usize,
    #[serde(default)]
    pub boundary_conditions: Vec<BoundaryCondition>,
}

/// Spline for one boundary condition evaluated on the reference grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryFit {
    pub condition: BoundaryCondition,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub max_error: f64,
}

/// Result of [SplineRequest::run]. `x` and `y` hold the analytic function on the knots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplineResponse {
    pub function: FunctionFamily,
    pub epsilon: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub fits: Vec<BoundaryFit>,
}

impl SplineRequest {
    pub fn new(
        function: impl Into<String>,
        epsilon: f64,
        sample_points: usize,
        boundary_conditions: Vec<BoundaryCondition>,
    ) -> Self {
        SplineRequest {
            function: function.into(),
            epsilon,
            sample_points,
            reference_points: DEFAULT_REFERENCE_POINTS,
            boundary_conditions,
        }
    }

    /// Reads request from TOML document.
    /// # Example
    /// ```
    /// use cubic_spline_interpolation::{BoundaryCondition, SplineRequest};
    ///
    /// let request = SplineRequest::from_toml_str(r#"
    ///     function = "delta"
    ///     epsilon = 0.1
    ///     sample_points = 11
    ///     boundary_conditions = ["Natural", "FirstDerivative"]
    /// "#).unwrap();
    ///
    /// assert_eq!(1000, request.reference_points);
    /// assert_eq!(BoundaryCondition::FirstDerivative, request.boundary_conditions[1]);
    /// ```
    pub fn from_toml_str(document: &str) -> Result<Self, Box<dyn Error>> {
        let request: SplineRequest = toml::from_str(document)?;
        Ok(request)
    }

    /// Checks request limits. Unknown function name is not an error.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if !(self.epsilon > 0.0) || !self.epsilon.is_finite() {
            return Err(Box::new(RequestError(format!(
                "epsilon must be positive and finite, got {}",
                self.epsilon
            ))));
        }
        if self.sample_points < 3 || self.sample_points > MAX_SAMPLE_POINTS {
            return Err(Box::new(RequestError(format!(
                "sample_points must be between 3 and {}, got {}",
                MAX_SAMPLE_POINTS, self.sample_points
            ))));
        }
        if self.reference_points < 2 || self.reference_points > MAX_REFERENCE_POINTS {
            return Err(Box::new(RequestError(format!(
                "reference_points must be between 2 and {}, got {}",
                MAX_REFERENCE_POINTS, self.reference_points
            ))));
        }
        Ok(())
    }

    /// Validates the request, fits one spline per boundary condition and measures its error.
    pub fn run(&self) -> Result<SplineResponse, Box<dyn Error>> {
        self.validate()?;

        let spec = FunctionSpec::from_name(&self.function, self.epsilon);
        let f = spec.evaluator();
        let grid = Grid::sample(&f, self.sample_points)?;
        let reference_x = sampler::uniform_points(self.reference_points);

        let mut fits = Vec::with_capacity(self.boundary_conditions.len());
        for condition in &self.boundary_conditions {
            let spline = Spline::fit(grid.clone(), spec.boundary(*condition))?;
            let y = spline.evaluate_many(&reference_x);
            let max_error = max_error(&f, &spline, self.reference_points);
            debug!(
                "{} eps={} n={} {:?}: max error {}",
                spec.family().name(),
                self.epsilon,
                self.sample_points,
                condition,
                max_error
            );
            fits.push(BoundaryFit { condition: *condition, x: reference_x.clone(), y, max_error });
        }

        Ok(SplineResponse {
            function: spec.family(),
            epsilon: self.epsilon,
            x: grid.x().to_vec(),
            y: grid.y().to_vec(),
            fits,
        })
    }
}

#[derive(Debug)]
pub struct RequestError(String);

impl Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid request: {}", self.0)
    }
}

impl Error for RequestError {}
