use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintError, ConstraintResult, StrictlyPositive};

/// The rate-parameter interval `[ν̂_min, ν̂_max]` covered by a sweep.
///
/// Both endpoints are guaranteed strictly positive with `min < max`, so the
/// interval is always well-formed on a logarithmic axis.
#[derive(Debug, Clone, Copy)]
pub struct RateRange {
    min: Ratio,
    max: Ratio,
}

impl RateRange {
    /// Constructs a validated rate range.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is not strictly positive, or if
    /// `min` is not below `max`.
    pub fn new(min: Ratio, max: Ratio) -> ConstraintResult<Self> {
        let min = Constrained::<Ratio, StrictlyPositive>::new(min)?.into_inner();
        let max = Constrained::<Ratio, StrictlyPositive>::new(max)?.into_inner();
        if min >= max {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(Self { min, max })
    }

    /// Constructs a rate range without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure both endpoints are strictly positive and that
    /// `min < max`. Violating this invariant will result in unexpected
    /// errors or panics.
    #[must_use]
    pub fn new_unchecked(min: Ratio, max: Ratio) -> Self {
        Self { min, max }
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub fn min(&self) -> Ratio {
        self.min
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub fn max(&self) -> Ratio {
        self.max
    }

    /// Returns `count` samples spaced evenly in log₁₀ across the range.
    ///
    /// A single sample degenerates to the lower endpoint; the physically
    /// interesting behavior spans many decades, so linear spacing is never
    /// offered.
    #[must_use]
    pub fn log_samples(&self, count: usize) -> Vec<Ratio> {
        if count == 0 {
            return Vec::new();
        }
        if count == 1 {
            return vec![self.min];
        }

        let lo = self.min.get::<ratio>().log10();
        let hi = self.max.get::<ratio>().log10();
        let step = (hi - lo) / (count - 1) as f64;

        (0..count)
            .map(|i| Ratio::new::<ratio>(10_f64.powf(lo + step * i as f64)))
            .collect()
    }
}
