//! Cubic spline interpolation of parametrized regularization functions.
//! Compares spline boundary conditions by the maximal interpolation error they leave.
//!
//! # Example
//! ```
//! use cubic_spline_interpolation::{max_error, BoundaryCondition, FunctionFamily, FunctionSpec, Spline};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let spec = FunctionSpec::new(FunctionFamily::Delta, 0.1);
//! let f = spec.evaluator();
//! let spline = Spline::from_function(&f, 11, spec.boundary(BoundaryCondition::Natural)).unwrap();
//!
//! assert_approx_eq!(1.0, spline.evaluate(0.5), 1e-3);
//! assert!(max_error(&f, &spline, 11) < 0.05);
//! ```

mod error_estimate;
mod function;
mod grid;
mod request;
mod sampler;
mod spline;
mod tridiagonal;

pub use error_estimate::max_error;
pub use function::{FunctionFamily, FunctionSpec};
pub use grid::{Grid, GridError};
pub use request::{
    BoundaryFit, RequestError, SplineRequest, SplineResponse, DEFAULT_REFERENCE_POINTS, MAX_REFERENCE_POINTS,
    MAX_SAMPLE_POINTS,
};
pub use sampler::{midpoints, sample, uniform_points};
pub use spline::{Boundary, BoundaryCondition, Spline};
pub use tridiagonal::{solve_tridiagonal, SolverError};
