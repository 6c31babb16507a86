//! Parametrized regularization functions on [0, 1] together with their boundary
//! derivative values.
//!
//! Every family is shaped by a single parameter `epsilon > 0`; smaller values give
//! steeper boundary or interior layers.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::spline::{Boundary, BoundaryCondition};

/// Below this `epsilon` the term `exp(-1/epsilon)` is dropped from the left second
/// derivative of [FunctionFamily::First]; it is below about `1e-7` there.
const FIRST_SECOND_DERIVATIVE_CUTOFF: f64 = 0.0625;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionFamily {
    /// Normalized exponential ramp `(1 - e^(-x/eps)) / (1 - e^(-1/eps))`.
    First,
    /// Symmetric boundary layer `1 - (e^(-x/sqrt(eps)) + e^((x-1)/sqrt(eps))) / (1 + e^(-1/sqrt(eps)))`.
    Second,
    /// Rational bump `eps / (eps + (2x - 1)^2)` peaking at `x = 0.5`.
    Delta,
    /// Smooth step antisymmetric around `x = 0.5`.
    Smooth,
    /// Sigmoid blended with a rational cubic correction.
    Custom,
}

impl FunctionFamily {
    pub const ALL: [FunctionFamily; 5] = [
        FunctionFamily::First,
        FunctionFamily::Second,
        FunctionFamily::Delta,
        FunctionFamily::Smooth,
        FunctionFamily::Custom,
    ];

    /// Strict lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "first" => Some(FunctionFamily::First),
            "second" => Some(FunctionFamily::Second),
            "delta" => Some(FunctionFamily::Delta),
            "smooth" => Some(FunctionFamily::Smooth),
            "custom" => Some(FunctionFamily::Custom),
            _ => None,
        }
    }

    /// Lookup by name falling back to [FunctionFamily::First] for unknown names.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            warn!("unknown function '{}' requested, using '{}'", name, FunctionFamily::First.name());
            FunctionFamily::First
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            FunctionFamily::First => "first",
            FunctionFamily::Second => "second",
            FunctionFamily::Delta => "delta",
            FunctionFamily::Smooth => "smooth",
            FunctionFamily::Custom => "custom",
        }
    }
}

/// Function family with its shape parameter.
/// # Example
/// ```
/// use cubic_spline_interpolation::{FunctionFamily, FunctionSpec};
///
/// let spec = FunctionSpec::new(FunctionFamily::Delta, 0.1);
/// assert_eq!(1.0, spec.evaluate(0.5));
///
/// let (start, end) = spec.first_derivatives();
/// assert_eq!(start, -end);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionSpec {
    family: FunctionFamily,
    epsilon: f64,
}

impl FunctionSpec {
    pub fn new(family: FunctionFamily, epsilon: f64) -> Self {
        FunctionSpec { family, epsilon }
    }

    /// Same as [FunctionSpec::new] with family looked up by [FunctionFamily::resolve].
    pub fn from_name(name: &str, epsilon: f64) -> Self {
        FunctionSpec::new(FunctionFamily::resolve(name), epsilon)
    }

    pub fn family(&self) -> FunctionFamily {
        self.family
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let eps = self.epsilon;
        match self.family {
            FunctionFamily::First => first(eps, x),
            FunctionFamily::Second => second(eps, x),
            FunctionFamily::Delta => delta(eps, x),
            FunctionFamily::Smooth => smooth(eps, x),
            FunctionFamily::Custom => custom(eps, x),
        }
    }

    /// Owned evaluator, independent of `self` lifetime.
    pub fn evaluator(&self) -> impl Fn(f64) -> f64 {
        let spec = *self;
        move |x| spec.evaluate(x)
    }

    /// First derivative values at `x = 0` and `x = 1`.
    pub fn first_derivatives(&self) -> (f64, f64) {
        let eps = self.epsilon;
        match self.family {
            FunctionFamily::First => {
                let end = 1.0 / ((1.0 / eps).exp_m1() * eps);
                (end + 1.0 / eps, end)
            }
            FunctionFamily::Second => {
                let root = 1.0 / eps.sqrt();
                let start = (0.5 * root).tanh() * root;
                (start, -start)
            }
            FunctionFamily::Delta => {
                let start = 4.0 * eps / (eps + 1.0).powi(2);
                (start, -start)
            }
            FunctionFamily::Smooth => {
                let start = -2.0 / (1.0 + (1.0 / eps).cosh()) / eps / eps / 3.0;
                (start, -start)
            }
            FunctionFamily::Custom => {
                let root = eps.sqrt();
                let eps2 = eps * eps;
                let start = -0.340241 / root;
                let end = -4.0 * (0.0937081 + 0.687333 * eps2 + 0.499833 * eps2 * eps2)
                    / (root * (1.0 + 2.0 * eps2).powi(2));
                (start, end)
            }
        }
    }

    /// Second derivative values at `x = 0` and `x = 1`.
    pub fn second_derivatives(&self) -> (f64, f64) {
        let eps = self.epsilon;
        match self.family {
            FunctionFamily::First => {
                let decay = if eps >= FIRST_SECOND_DERIVATIVE_CUTOFF { (-1.0 / eps).exp() } else { 0.0 };
                let start = -1.0 / eps / eps / (1.0 - decay);
                // 1 / (eps^2 (1 - e^(1/eps))) written without overflowing e^(1/eps)
                let tail = (-1.0 / eps).exp();
                let end = -tail / eps / eps / (1.0 - tail);
                (start, end)
            }
            FunctionFamily::Second => (-1.0 / eps, -1.0 / eps),
            FunctionFamily::Delta => {
                let value = -8.0 * eps * (eps - 3.0) / (eps + 1.0).powi(3);
                (value, value)
            }
            FunctionFamily::Smooth => {
                let half = 1.0 / (2.0 * eps);
                let shape = half.tanh() - 2.0 * eps;
                // eps^4 underflows long before the hyperbolic terms vanish
                let start = -2.0 * shape / ((1.0 / eps).cosh() + 1.0) / eps / eps / eps / eps / 3.0;
                let end = shape / half.cosh().powi(2) / eps / eps / eps / eps / 3.0;
                (start, end)
            }
            FunctionFamily::Custom => (-0.170121 / eps.powf(1.5), 0.0),
        }
    }

    /// Boundary values matching `condition`: first derivatives for
    /// [BoundaryCondition::FirstDerivative], second derivatives for
    /// [BoundaryCondition::SecondDerivative] and zero moments for [BoundaryCondition::Natural].
    pub fn boundary(&self, condition: BoundaryCondition) -> Boundary {
        let (start, end) = match condition {
            BoundaryCondition::FirstDerivative => self.first_derivatives(),
            BoundaryCondition::SecondDerivative => self.second_derivatives(),
            BoundaryCondition::Natural => (0.0, 0.0),
        };
        condition.with_values(start, end)
    }
}

fn first(eps: f64, x: f64) -> f64 {
    (-x / eps).exp_m1() / (-1.0 / eps).exp_m1()
}

fn second(eps: f64, x: f64) -> f64 {
    let inv = 1.0 / eps.sqrt();
    1.0 - ((-x * inv).exp() + ((x - 1.0) * inv).exp()) / (1.0 + (-inv).exp())
}

fn delta(eps: f64, x: f64) -> f64 {
    eps / (eps + (2.0 * x - 1.0).powi(2))
}

fn smooth(eps: f64, x: f64) -> f64 {
    // exponent stays non-positive on both halves
    if x <= 0.5 {
        let value = ((2.0 * x - 1.0) / eps).exp();
        -2.0 * (value - 1.0) / (3.0 * (value + 1.0))
    } else {
        let value = ((1.0 - 2.0 * x) / eps).exp();
        -2.0 * (1.0 - value) / (3.0 * (1.0 + value))
    }
}

fn custom(eps: f64, x: f64) -> f64 {
    let weight = eps.sqrt() / (x - 1.0).exp();
    let sigmoid = 1.0 / (1.0 + (-16.0 * (x - 0.5)).exp());
    (1.0 - weight) * sigmoid + weight * ((x - 0.5).powi(3) / (eps * eps * x + 0.5))
}
