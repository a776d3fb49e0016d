use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::models::adhesion::mpl::core::DissipationError;

/// Errors that can occur while solving for the effective surface energy.
///
/// Exhausting the iteration budget is deliberately not an error: that case
/// is reported through `SolveResult::converged` with the best available
/// estimate, so a sweep can degrade a single point instead of aborting.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The dissipation integral could not be evaluated at a bracket
    /// endpoint.
    #[error("dissipation integral evaluation failed")]
    Dissipation(#[from] DissipationError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The fixed-point residual never changed sign while doubling the upper
    /// bracket. Does not occur for in-domain inputs, where the update map is
    /// bounded above; kept so a missing root is never reported as a value.
    #[error("no sign change found while expanding the upper bracket to {hi}")]
    NoBracket {
        /// Largest upper bracket tried.
        hi: f64,
    },
}
