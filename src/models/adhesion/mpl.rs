//! MPL viscoelastic adhesion model.
//!
//! Computes the rate-dependent effective surface energy `Γ̂_eff(ν̂)` of a
//! viscoelastic broad-band material described by the modified power-law
//! (MPL) relaxation spectrum. The computational core lives in the internal
//! [`core`] module; this module re-exports its public surface and provides
//! the [`twine_core::Model`] adapter.
//!
//! # Example
//!
//! ```
//! use mpl_adhesion::models::adhesion::mpl::{
//!     MplAdhesion, MplExponent, RateRange, SolverConfig, SweepParameters,
//! };
//! use uom::si::{f64::Ratio, ratio::ratio};
//!
//! let params = SweepParameters::new(
//!     Ratio::new::<ratio>(0.10),
//!     vec![MplExponent::new(0.4)?],
//!     RateRange::new(Ratio::new::<ratio>(1e-2), Ratio::new::<ratio>(1e2))?,
//!     5,
//! )?;
//!
//! let results = MplAdhesion::sweep(&params, &SolverConfig::default());
//!
//! assert_eq!(results.curves.len(), 1);
//! assert_eq!(results.curves[0].points.len(), 5);
//! assert_eq!(results.curves[0].unconverged, 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub(crate) mod core;

pub use self::core::{
    Curve, CurvePoint, DissipationError, Exponent, MplAdhesion, MplExponent, ParameterError,
    RateParameter, RateRange, SolveError, SolveResult, SolverConfig, SurfaceEnergyRatio,
    SweepParameters, SweepResults, unloading,
};

use std::convert::Infallible;

use twine_core::Model;

/// Sweep adapter exposing the model to Twine.
///
/// Holds the solver configuration; the sweep parameters are the model
/// input. Infallible because parameter validation happens at
/// [`SweepParameters`] construction and per-point failures degrade to `NaN`
/// samples within the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct MplAdhesionSweep {
    config: SolverConfig,
}

impl MplAdhesionSweep {
    /// Constructs a sweep adapter with the given solver configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl Model for MplAdhesionSweep {
    type Input = SweepParameters;
    type Output = SweepResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(MplAdhesion::sweep(input, &self.config))
    }
}
