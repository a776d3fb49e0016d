mod exponent;
mod parameters;
mod rate_range;

pub use exponent::{Exponent, MplExponent};
pub use parameters::{ParameterError, SweepParameters};
pub use rate_range::RateRange;

use uom::si::f64::Ratio;

use crate::support::constraint::{Constrained, StrictlyPositive, UnitIntervalOpen};

/// Surface-energy ratio `k`, the quasi-static floor of the effective energy.
///
/// Constrained to the open unit interval `(0, 1)`.
pub type SurfaceEnergyRatio = Constrained<Ratio, UnitIntervalOpen>;

/// Dimensionless rate parameter `ν̂`, constrained strictly positive.
pub type RateParameter = Constrained<Ratio, StrictlyPositive>;
