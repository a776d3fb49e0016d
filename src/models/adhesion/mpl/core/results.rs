use uom::si::f64::Ratio;

use super::input::Exponent;

/// Outcome of a single fixed-point solve.
#[derive(Debug, Clone, Copy)]
pub struct SolveResult {
    /// The effective surface energy `Γ̂_eff`, normalized so its quasi-static
    /// floor is the surface-energy ratio `k`.
    pub gamma_eff: Ratio,

    /// Bisection iterations performed.
    pub iters: usize,

    /// Best fixed-point residual `γ̂ − F(γ̂)` achieved.
    pub residual: Ratio,

    /// Whether the solve met its tolerances within the iteration budget.
    ///
    /// When `false`, [`gamma_eff`](Self::gamma_eff) still holds the best
    /// available estimate; the caller decides whether to keep or drop it.
    pub converged: bool,
}

/// One sample of a curve: the rate parameter and the solved effective energy.
#[derive(Debug, Clone, Copy)]
pub struct CurvePoint {
    /// Rate parameter `ν̂`.
    pub rate: Ratio,

    /// Effective surface energy `Γ̂_eff`, or `NaN` for a sample that failed
    /// to converge.
    pub gamma_eff: Ratio,
}

/// The `Γ̂_eff(ν̂)` curve for one exponent.
///
/// Points are ordered by increasing rate parameter and the curve is complete
/// once returned; non-converged samples are `NaN` points rather than gaps,
/// so partial curves still render.
#[derive(Debug, Clone)]
pub struct Curve {
    /// The MPL exponent this curve was solved for.
    pub exponent: Exponent,

    /// `(ν̂, Γ̂_eff)` samples, one per configured grid point.
    pub points: Vec<CurvePoint>,

    /// Number of samples recorded as `NaN` because the solve failed or did
    /// not converge.
    pub unconverged: usize,
}

/// All curves produced by a sweep, in exponent input order.
#[derive(Debug, Clone)]
pub struct SweepResults {
    /// One curve per configured exponent, in input order.
    pub curves: Vec<Curve>,
}
