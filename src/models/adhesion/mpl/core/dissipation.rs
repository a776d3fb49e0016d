//! Closed-form dissipation integral of the MPL model.
//!
//! Evaluates the bulk-plus-process-zone dissipation integral `I(n, ν̂, Γ)`
//! in its closed hypergeometric form. `Γ` here is the adhesion
//! amplification (effective energy over its quasi-static floor), which is
//! how the closed form is parameterized; the fixed-point solve converts
//! between it and the normalized effective energy.
//!
//! For valid inputs the integral is finite and lies in `[0, 1)`, approaching
//! zero in the quasi-static limit and one at high rates.

use rug::{Float, float::Constant, ops::Pow};
use thiserror::Error;

use crate::support::hypergeometric::{
    HypergeometricError, hyp1f2, hyp1f2_regularized, working_precision,
};

/// Domain and evaluation errors for the dissipation integral.
///
/// These are never converted into a silent `NaN`; the solver decides how to
/// react per trial point.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DissipationError {
    /// The exponent is outside `(0, 2)` or at the `n = 1` pole of the
    /// closed form.
    #[error("exponent {0} is outside the valid domain (0, 2) excluding 1")]
    ExponentDomain(f64),

    /// The candidate amplification is not strictly positive.
    #[error("amplification must be strictly positive, got {0}")]
    NonPositiveAmplification(f64),

    /// The rate parameter is not strictly positive.
    #[error("rate parameter must be strictly positive, got {0}")]
    NonPositiveRate(f64),

    /// A hypergeometric term could not be evaluated.
    #[error("hypergeometric evaluation failed")]
    Hypergeometric(#[from] HypergeometricError),

    /// The combined closed form failed its finite, non-negative contract.
    #[error("dissipation integral is not finite and non-negative: {0}")]
    NotFinite(f64),
}

/// Evaluates the dissipation integral `I(n, ν̂, Γ)`.
///
/// The hypergeometric argument is `z = −(Γ / 4πν̂)²`, which spans many
/// orders of magnitude over a rate sweep; the two main terms of the closed
/// form cancel like `e^(2√|z|)`, so everything is evaluated in MPFR floats
/// at a `|z|`-adaptive precision and only the combined result is rounded to
/// `f64`.
///
/// # Errors
///
/// Returns a [`DissipationError`] if an input is outside the closed form's
/// domain or a hypergeometric term fails to evaluate.
pub fn dissipation_integral(
    n: f64,
    rate: f64,
    amplification: f64,
) -> Result<f64, DissipationError> {
    if !(n > 0.0 && n < 2.0) || n == 1.0 {
        return Err(DissipationError::ExponentDomain(n));
    }
    if !(rate > 0.0) {
        return Err(DissipationError::NonPositiveRate(rate));
    }
    if !(amplification > 0.0) {
        return Err(DissipationError::NonPositiveAmplification(amplification));
    }

    let x = amplification / (4.0 * std::f64::consts::PI * rate);
    let prec = working_precision(-(x * x));

    let pi = Float::with_val(prec, Constant::Pi);
    let gam = Float::with_val(prec, amplification);
    let nu = Float::with_val(prec, rate);

    let z = -(gam.clone() / (Float::with_val(prec, 4.0) * &pi * &nu)).square();

    let pre = Float::with_val(prec, 2.0).pow(Float::with_val(prec, -3.0 - 2.0 * n))
        * pi.clone().pow(Float::with_val(prec, -1.5 - n))
        / ((n - 1.0) * nu.clone());

    let h1 = hyp1f2(-0.5, (0.5 - n / 2.0, 1.0 - n / 2.0), &z, prec)?;
    let term1 = -(Float::with_val(prec, 4.0).pow(Float::with_val(prec, 1.0 + n))
        * pi.clone().pow(Float::with_val(prec, 0.5 + n))
        * (gam.clone() - 2.0 * (n - 1.0) * pi.clone() * &nu * h1));

    let h2 = hyp1f2_regularized((n - 1.0) / 2.0, (0.5, (2.0 + n) / 2.0), &z, prec)?;
    let h3 = hyp1f2_regularized(n / 2.0, (1.5, (3.0 + n) / 2.0), &z, prec)?;
    let term2 = 2.0
        * pi.clone()
        * (gam.clone() / &nu).pow(Float::with_val(prec, n))
        * (Float::with_val(prec, 4.0) * &pi * &nu * Float::with_val(prec, 1.0 - n / 2.0).gamma()
            * h2
            + gam.clone() * Float::with_val(prec, 1.5 - n / 2.0).gamma() * h3);

    let combined: Float = pre * (term1 + term2);
    let value = combined.to_f64();
    if !value.is_finite() || value < 0.0 {
        return Err(DissipationError::NotFinite(value));
    }
    Ok(value)
}
