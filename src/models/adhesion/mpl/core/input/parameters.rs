use thiserror::Error;
use uom::si::f64::Ratio;

use crate::support::constraint::{Constrained, ConstraintError, UnitIntervalOpen};

use super::{Exponent, RateRange};

/// Invalid sweep parameters.
///
/// Any of these conditions makes every subsequent solve meaningless, so they
/// are reported before solving begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// The surface-energy ratio is outside the open unit interval.
    #[error("surface-energy ratio must lie in (0, 1)")]
    Ratio(#[source] ConstraintError),

    /// No exponents were supplied.
    #[error("exponent list must not be empty")]
    NoExponents,

    /// The sample count is zero.
    #[error("sample count must be at least 1")]
    NoSamples,
}

/// Full configuration of a rate sweep.
///
/// Combines the surface-energy ratio `k`, the exponent list, the
/// rate-parameter range, and the per-curve sample count. Validated once at
/// construction and read-only thereafter; the exponent list and rate range
/// carry their own invariants from their constructors.
#[derive(Debug, Clone)]
pub struct SweepParameters {
    ratio: Ratio,
    exponents: Vec<Exponent>,
    rates: RateRange,
    samples: usize,
}

impl SweepParameters {
    /// Constructs validated sweep parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the ratio is outside `(0, 1)`, the
    /// exponent list is empty, or the sample count is zero.
    pub fn new(
        ratio: Ratio,
        exponents: Vec<Exponent>,
        rates: RateRange,
        samples: usize,
    ) -> Result<Self, ParameterError> {
        let ratio = Constrained::<Ratio, UnitIntervalOpen>::new(ratio)
            .map_err(ParameterError::Ratio)?
            .into_inner();
        if exponents.is_empty() {
            return Err(ParameterError::NoExponents);
        }
        if samples == 0 {
            return Err(ParameterError::NoSamples);
        }
        Ok(Self {
            ratio,
            exponents,
            rates,
            samples,
        })
    }

    /// Returns the surface-energy ratio `k`.
    #[must_use]
    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// Returns the exponent list, in sweep order.
    #[must_use]
    pub fn exponents(&self) -> &[Exponent] {
        &self.exponents
    }

    /// Returns the rate-parameter range.
    #[must_use]
    pub fn rates(&self) -> RateRange {
        self.rates
    }

    /// Returns the per-curve sample count.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }
}
