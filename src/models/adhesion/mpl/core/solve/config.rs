use twine_solvers::equation::bisection;
use uom::si::{f64::Ratio, ratio::ratio};

/// Solver configuration for the fixed-point solve.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the effective-energy search variable.
    pub gamma_tol: Ratio,

    /// Absolute tolerance on the fixed-point residual `γ̂ − F(γ̂)`.
    pub residual_tol: Ratio,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            gamma_tol: Ratio::new::<ratio>(1e-12),
            residual_tol: Ratio::new::<ratio>(1e-12),
        }
    }
}

impl SolverConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.gamma_tol.get::<ratio>(),
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol.get::<ratio>(),
        }
    }
}
