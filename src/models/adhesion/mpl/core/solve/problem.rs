//! Problem formulation for the fixed-point solve.

use std::convert::Infallible;

use twine_core::EquationProblem;
use twine_core::Model;
use uom::si::{f64::Ratio, ratio};

use crate::models::adhesion::mpl::core::{DissipationError, dissipation::dissipation_integral};

/// Model adapter for the fixed-point update of Eq. (B.1).
///
/// Exposes the candidate effective energy `γ̂` as the sole input variable
/// and computes the updated value `F(γ̂) = k / (1 − (1−k)·I(n, ν̂, γ̂/k))`.
pub(super) struct AmplificationMap {
    ratio: f64,
    exponent: f64,
    rate: f64,
}

impl AmplificationMap {
    pub(super) fn new(ratio: f64, exponent: f64, rate: f64) -> Self {
        Self {
            ratio,
            exponent,
            rate,
        }
    }
}

/// Output of one fixed-point update.
#[derive(Clone)]
pub(super) struct MapOutput {
    /// The updated effective energy `F(γ̂)`.
    pub(super) next: f64,
}

impl Model for AmplificationMap {
    type Input = Ratio;
    type Output = MapOutput;
    type Error = DissipationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let amplification = input.get::<ratio::ratio>() / self.ratio;
        let integral = dissipation_integral(self.exponent, self.rate, amplification)?;

        let next = self.ratio / (1.0 - (1.0 - self.ratio) * integral);
        if !next.is_finite() {
            return Err(DissipationError::NotFinite(next));
        }
        Ok(MapOutput { next })
    }
}

/// Equation problem definition for the fixed point.
///
/// Computes the residual as `γ̂ − F(γ̂)`.
pub(super) struct FixedPointProblem;

impl EquationProblem<1> for FixedPointProblem {
    type Input = Ratio;
    type Output = MapOutput;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Ratio::new::<ratio::ratio>(x[0]))
    }

    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([input.get::<ratio::ratio>() - output.next])
    }
}
