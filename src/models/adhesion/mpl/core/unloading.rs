//! Calibration from unloading rate to the dimensionless rate parameter.
//!
//! Experiments control the unloading rate `r_u` rather than `ν̂` directly;
//! the paper's calibration `ν̂ = C₁ (r_u / C₂)^1.171` maps between the two,
//! so sweeps can be parameterized by either variable.

use std::f64::consts::PI;

use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

use super::input::RateRange;

const C1: f64 = 2.887;
const RATE_EXPONENT: f64 = 1.171;

fn c2() -> f64 {
    3.24 * PI.powf(2.0 / 3.0)
}

/// Converts an unloading rate `r_u` to the rate parameter `ν̂`.
///
/// # Errors
///
/// Returns an error if the unloading rate is not strictly positive.
pub fn rate_parameter(unloading_rate: Ratio) -> ConstraintResult<Ratio> {
    let r_u = Constrained::<Ratio, StrictlyPositive>::new(unloading_rate)?
        .into_inner()
        .get::<ratio>();
    Ok(Ratio::new::<ratio>(C1 * (r_u / c2()).powf(RATE_EXPONENT)))
}

/// Converts an unloading-rate interval to a [`RateRange`] in `ν̂`.
///
/// The calibration is strictly increasing, so the endpoints map directly.
///
/// # Errors
///
/// Returns an error if either endpoint is not strictly positive or the
/// interval is not increasing.
pub fn rate_range(min: Ratio, max: Ratio) -> ConstraintResult<RateRange> {
    RateRange::new(rate_parameter(min)?, rate_parameter(max)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn matches_the_calibration_constants() {
        // ν̂(C₂) = C₁ by construction.
        let nu = rate_parameter(Ratio::new::<ratio>(c2())).unwrap();
        assert_relative_eq!(nu.get::<ratio>(), 2.887, max_relative = 1e-12);
    }

    #[test]
    fn follows_the_power_law() {
        let one = rate_parameter(Ratio::new::<ratio>(1.0)).unwrap().get::<ratio>();
        let ten = rate_parameter(Ratio::new::<ratio>(10.0)).unwrap().get::<ratio>();
        assert_relative_eq!(ten / one, 10_f64.powf(1.171), max_relative = 1e-12);
    }

    #[test]
    fn maps_an_interval_in_order() {
        let range = rate_range(Ratio::new::<ratio>(1e-2), Ratio::new::<ratio>(1e10)).unwrap();
        assert!(range.min() < range.max());
    }

    #[test]
    fn rejects_non_positive_rates() {
        assert!(rate_parameter(Ratio::new::<ratio>(0.0)).is_err());
        assert!(rate_parameter(Ratio::new::<ratio>(-1.0)).is_err());
    }
}
