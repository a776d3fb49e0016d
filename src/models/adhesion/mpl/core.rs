//! Effective surface energy of the MPL viscoelastic adhesion model.
//!
//! The model links the dimensionless effective surface energy `Γ̂_eff` to
//! the rate parameter `ν̂` through the implicit relation of Eq. (B.1) of
//! Maghami et al. (JMPS 193, 2024, 105844), with the dissipation integral
//! in the closed hypergeometric form of Eqs. (B.2–B.3). This module solves
//! that relation per point and sweeps it over a logarithmic rate grid for a
//! list of power-law exponents.

mod dissipation;
mod input;
mod results;
mod solve;
mod sweep;
pub mod unloading;

pub use dissipation::DissipationError;
pub use input::{
    Exponent, MplExponent, ParameterError, RateParameter, RateRange, SurfaceEnergyRatio,
    SweepParameters,
};
pub use results::{Curve, CurvePoint, SolveResult, SweepResults};
pub use solve::{SolveError, SolverConfig};

use uom::si::ratio::ratio;

/// Entry point for solving the MPL adhesion model.
pub struct MplAdhesion;

impl MplAdhesion {
    /// Solves for the effective surface energy at a single `(n, ν̂)` point.
    ///
    /// The returned value is normalized so its quasi-static floor is the
    /// surface-energy ratio `k`: for all valid inputs,
    /// `k ≤ Γ̂_eff < 1`, approaching `k` as `ν̂ → 0` and saturating toward
    /// `1` at high rates.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the dissipation integral cannot be
    /// evaluated or no root bracket can be established. Running out of
    /// iterations is reported via [`SolveResult::converged`] instead.
    pub fn gamma_eff(
        ratio_k: SurfaceEnergyRatio,
        exponent: Exponent,
        rate: RateParameter,
        config: &SolverConfig,
    ) -> Result<SolveResult, SolveError> {
        solve::gamma_eff(
            ratio_k.into_inner().get::<ratio>(),
            exponent.into_inner(),
            rate.into_inner().get::<ratio>(),
            config,
            None,
        )
    }

    /// Sweeps the rate range for every configured exponent.
    ///
    /// Produces one [`Curve`] per exponent. Individual samples that fail to
    /// converge become `NaN` points with a per-curve diagnostic count; the
    /// sweep itself always completes.
    #[must_use]
    pub fn sweep(params: &SweepParameters, config: &SolverConfig) -> SweepResults {
        sweep::sweep(params, config)
    }
}
