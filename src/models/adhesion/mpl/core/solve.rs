//! Bracketed fixed-point solve for the effective surface energy.
//!
//! The implicit relation of Eq. (B.1) is solved as a root-find on the
//! residual `γ̂ − F(γ̂)` rather than by naive Picard iteration: the
//! quasi-static floor `k` is a guaranteed lower bracket and the update map
//! is bounded above, so bisection converges unconditionally.

mod config;
mod error;
mod problem;

pub use config::SolverConfig;
pub use error::SolveError;

use twine_solvers::equation::bisection;
use uom::si::{f64::Ratio, ratio::ratio};

use super::results::SolveResult;

use problem::{AmplificationMap, FixedPointProblem};

/// Upper-bracket doublings before giving up on a sign change.
const MAX_DOUBLINGS: usize = 60;

/// Solves `γ̂ = F(γ̂)` for one `(k, n, ν̂)` triple.
///
/// The lower bracket is the floor `k`, tightened by `seed` when the caller
/// can supply the solution of a lower-rate sample (the curve is
/// non-decreasing in `ν̂`, so a previous solution remains a lower bound).
/// The upper bracket is found by doubling until the residual turns positive.
///
/// Exhausting the iteration budget yields `converged = false` with the best
/// estimate, not an error.
///
/// # Errors
///
/// Returns a [`SolveError`] if the dissipation integral cannot be evaluated
/// at a bracket endpoint or no bracket can be established.
pub(super) fn gamma_eff(
    ratio_k: f64,
    exponent: f64,
    rate: f64,
    config: &SolverConfig,
    seed: Option<f64>,
) -> Result<SolveResult, SolveError> {
    let model = AmplificationMap::new(ratio_k, exponent, rate);

    let mut lo = seed.map_or(ratio_k, |s| s.max(ratio_k));
    let mut r_lo = residual_at(&model, lo)?;
    if r_lo > 0.0 && lo > ratio_k {
        // Stale seed; fall back to the floor.
        lo = ratio_k;
        r_lo = residual_at(&model, lo)?;
    }
    if r_lo >= 0.0 {
        // The root sits at the lower bracket itself (quasi-static limit).
        return Ok(SolveResult {
            gamma_eff: Ratio::new::<ratio>(lo),
            iters: 0,
            residual: Ratio::new::<ratio>(r_lo),
            converged: r_lo <= config.residual_tol.get::<ratio>(),
        });
    }

    let mut hi = 2.0 * lo;
    let mut doublings = 0;
    while residual_at(&model, hi)? <= 0.0 {
        hi *= 2.0;
        doublings += 1;
        if doublings > MAX_DOUBLINGS {
            return Err(SolveError::NoBracket { hi });
        }
    }

    let solution = bisection::solve(
        &model,
        &FixedPointProblem,
        [lo, hi],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // An evaluation failure means the trial value left the integral's
            // domain. Guide bisection back toward the physical floor by
            // assuming positive residual.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    Ok(SolveResult {
        gamma_eff: Ratio::new::<ratio>(solution.snapshot.output.next),
        iters: solution.iters,
        residual: Ratio::new::<ratio>(solution.residual),
        converged: solution.status == bisection::Status::Converged,
    })
}

fn residual_at(model: &AmplificationMap, gamma: f64) -> Result<f64, SolveError> {
    use twine_core::Model;

    let output = model.call(&Ratio::new::<ratio>(gamma))?;
    Ok(gamma - output.next)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn solve(k: f64, n: f64, rate: f64) -> SolveResult {
        gamma_eff(k, n, rate, &SolverConfig::default(), None).expect("solve should succeed")
    }

    // Fixed points computed independently with mpmath findroot at 40 digits.
    const REFERENCE_N_1_6: [(f64, f64); 4] = [
        (1e-2, 0.104_487_227_502_284_59),
        (1.0, 0.254_539_170_047_371_72),
        (1e2, 0.846_946_752_091_300_61),
        (1e4, 0.997_643_740_153_672_68),
    ];

    #[test]
    fn converges_at_unit_rate() {
        let result = solve(0.10, 0.4, 1.0);

        assert!(result.converged);
        assert!(result.iters <= SolverConfig::default().max_iters);
        assert_relative_eq!(
            result.gamma_eff.get::<ratio>(),
            0.146_702_145_520_689_68,
            max_relative = 1e-9
        );
    }

    #[test]
    fn amplifies_monotonically_with_rate() {
        let slow = solve(0.10, 0.4, 1.0);
        let fast = solve(0.10, 0.4, 1e8);

        assert!(fast.converged);
        assert!(fast.gamma_eff > slow.gamma_eff);
        assert_relative_eq!(
            fast.gamma_eff.get::<ratio>(),
            0.989_212_531_450_303_11,
            max_relative = 1e-9
        );
    }

    #[test]
    fn matches_reference_curve_for_broad_spectrum_exponent() {
        for (rate, expected) in REFERENCE_N_1_6 {
            let result = solve(0.10, 1.6, rate);
            assert!(result.converged, "ν̂ = {rate} should converge");
            assert_relative_eq!(
                result.gamma_eff.get::<ratio>(),
                expected,
                max_relative = 1e-4
            );
        }
    }

    #[test]
    fn matches_reference_values_for_narrow_spectrum_exponents() {
        for (n, rate, expected) in [
            (0.2, 1e-2, 0.100_564_065_343_188_51),
            (0.2, 1e8, 0.776_236_449_680_712_02),
            (0.6, 1e2, 0.498_424_435_264_920_87),
        ] {
            let result = solve(0.10, n, rate);
            assert!(result.converged, "(n = {n}, ν̂ = {rate}) should converge");
            assert_relative_eq!(
                result.gamma_eff.get::<ratio>(),
                expected,
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn respects_the_quasi_static_floor() {
        for (n, rate) in [(0.2, 1e-2), (0.4, 1.0), (0.8, 1e4), (1.6, 1e8)] {
            let result = solve(0.10, n, rate);
            assert!(result.converged);
            let gamma = result.gamma_eff.get::<ratio>();
            assert!(
                (0.10..1.0).contains(&gamma),
                "Γ̂_eff(n={n}, ν̂={rate}) = {gamma} outside [k, 1)"
            );
        }
    }

    #[test]
    fn approaches_the_floor_in_the_quasi_static_limit() {
        let result = solve(0.10, 0.4, 1e-4);

        assert!(result.converged);
        assert_relative_eq!(
            result.gamma_eff.get::<ratio>(),
            0.10,
            max_relative = 2e-4
        );
        assert!(result.gamma_eff.get::<ratio>() >= 0.10);
    }

    #[test]
    fn works_away_from_the_reference_ratio() {
        let result = solve(0.3, 0.6, 10.0);

        assert!(result.converged);
        assert_relative_eq!(
            result.gamma_eff.get::<ratio>(),
            0.645_179_115_410_368_44,
            max_relative = 1e-9
        );
    }

    #[test]
    fn is_idempotent() {
        let first = solve(0.10, 0.6, 1e2);
        let second = solve(0.10, 0.6, 1e2);

        assert_eq!(first.gamma_eff, second.gamma_eff);
        assert_eq!(first.iters, second.iters);
        assert_eq!(first.converged, second.converged);
    }

    #[test]
    fn warm_start_reproduces_the_cold_solution() {
        let cold = solve(0.10, 0.6, 1e2);

        // Seed from a converged lower-rate solution, as the sweep does.
        let lower = solve(0.10, 0.6, 10.0);
        let warm = gamma_eff(
            0.10,
            0.6,
            1e2,
            &SolverConfig::default(),
            Some(lower.gamma_eff.get::<ratio>()),
        )
        .expect("warm-started solve should succeed");

        assert!(warm.converged);
        assert_relative_eq!(
            warm.gamma_eff.get::<ratio>(),
            cold.gamma_eff.get::<ratio>(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn starved_iteration_budget_reports_non_convergence() {
        let config = SolverConfig {
            max_iters: 2,
            ..SolverConfig::default()
        };

        let result =
            gamma_eff(0.10, 0.4, 1.0, &config, None).expect("a starved budget is not an error");

        assert!(!result.converged);
        assert!(result.iters <= 2);

        // The best estimate is still a physical value with a finite residual.
        let gamma = result.gamma_eff.get::<ratio>();
        assert!(
            (0.10..1.0).contains(&gamma),
            "best estimate {gamma} outside [k, 1)"
        );
        assert!(result.residual.get::<ratio>().is_finite());
    }

    #[test]
    fn stale_seed_falls_back_to_the_floor() {
        // A seed far above the root has positive residual; the solve must
        // recover rather than report a bracket failure.
        let result = gamma_eff(0.10, 0.4, 1.0, &SolverConfig::default(), Some(0.9))
            .expect("solve should recover from a stale seed");

        assert!(result.converged);
        assert_relative_eq!(
            result.gamma_eff.get::<ratio>(),
            0.146_702_145_520_689_68,
            max_relative = 1e-9
        );
    }

    #[test]
    fn exponent_pole_surfaces_as_solve_error() {
        let result = gamma_eff(0.10, 1.0, 1.0, &SolverConfig::default(), None);
        assert!(matches!(result, Err(SolveError::Dissipation(_))));
    }
}
