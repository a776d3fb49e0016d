//! Sweep driver: one `Γ̂_eff(ν̂)` curve per configured exponent.

use uom::si::{f64::Ratio, ratio::ratio};

use super::{
    input::SweepParameters,
    results::{Curve, CurvePoint, SweepResults},
    solve::{SolverConfig, gamma_eff},
};

/// Runs the full sweep.
///
/// Samples are walked in increasing rate order so each solve can seed its
/// lower bracket from the previous converged solution. A sample that fails
/// to converge (or errors) becomes a `NaN` point and increments the curve's
/// `unconverged` count; the sweep itself always completes.
pub(super) fn sweep(params: &SweepParameters, config: &SolverConfig) -> SweepResults {
    let rates = params.rates().log_samples(params.samples());
    let k = params.ratio().get::<ratio>();

    let curves = params
        .exponents()
        .iter()
        .map(|&exponent| {
            let n = exponent.into_inner();
            let mut points = Vec::with_capacity(rates.len());
            let mut unconverged = 0;
            let mut seed = None;

            for &rate in &rates {
                let gamma = match gamma_eff(k, n, rate.get::<ratio>(), config, seed) {
                    Ok(result) if result.converged => {
                        seed = Some(result.gamma_eff.get::<ratio>());
                        result.gamma_eff
                    }
                    Ok(_) | Err(_) => {
                        unconverged += 1;
                        Ratio::new::<ratio>(f64::NAN)
                    }
                };
                points.push(CurvePoint {
                    rate,
                    gamma_eff: gamma,
                });
            }

            Curve {
                exponent,
                points,
                unconverged,
            }
        })
        .collect();

    SweepResults { curves }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::adhesion::mpl::core::input::{MplExponent, RateRange};

    fn reference_params(samples: usize) -> SweepParameters {
        SweepParameters::new(
            Ratio::new::<ratio>(0.10),
            [0.2, 0.4, 0.6, 0.8, 1.6]
                .map(|n| MplExponent::new(n).unwrap())
                .to_vec(),
            RateRange::new(Ratio::new::<ratio>(1e-2), Ratio::new::<ratio>(1e8)).unwrap(),
            samples,
        )
        .unwrap()
    }

    #[test]
    fn reference_sweep_completes_without_failures() {
        let results = sweep(&reference_params(200), &SolverConfig::default());

        assert_eq!(results.curves.len(), 5);
        for curve in &results.curves {
            assert_eq!(curve.points.len(), 200);
            assert_eq!(
                curve.unconverged,
                0,
                "n = {} had unconverged points",
                curve.exponent.into_inner()
            );
        }
    }

    #[test]
    fn curves_stay_above_the_floor_and_non_decreasing() {
        let results = sweep(&reference_params(50), &SolverConfig::default());

        for curve in &results.curves {
            let n = curve.exponent.into_inner();
            for pair in curve.points.windows(2) {
                let (a, b) = (pair[0].gamma_eff.get::<ratio>(), pair[1].gamma_eff.get::<ratio>());
                assert!(a >= 0.10, "n = {n}: Γ̂_eff = {a} below the floor");
                assert!(
                    b >= a - 1e-9,
                    "n = {n}: curve decreases from {a} to {b}"
                );
            }
        }
    }

    #[test]
    fn points_follow_the_sampled_grid() {
        let params = reference_params(21);
        let results = sweep(&params, &SolverConfig::default());
        let rates = params.rates().log_samples(21);

        for curve in &results.curves {
            for (point, &rate) in curve.points.iter().zip(&rates) {
                assert_eq!(point.rate, rate);
            }
        }
    }

    #[test]
    fn starved_iteration_budget_degrades_to_nan_points() {
        let config = SolverConfig {
            max_iters: 2,
            ..SolverConfig::default()
        };
        let params = SweepParameters::new(
            Ratio::new::<ratio>(0.10),
            vec![MplExponent::new(0.4).unwrap()],
            RateRange::new(Ratio::new::<ratio>(1e-1), Ratio::new::<ratio>(1e1)).unwrap(),
            3,
        )
        .unwrap();

        let results = sweep(&params, &config);

        // Every sample runs out of iterations, so none may seed the next.
        let curve = &results.curves[0];
        assert_eq!(curve.unconverged, 3);
        assert!(
            curve
                .points
                .iter()
                .all(|p| p.gamma_eff.get::<ratio>().is_nan())
        );
    }

    #[test]
    fn pole_exponent_degrades_to_nan_points() {
        let params = SweepParameters::new(
            Ratio::new::<ratio>(0.10),
            vec![MplExponent::new(1.0).unwrap(), MplExponent::new(0.4).unwrap()],
            RateRange::new(Ratio::new::<ratio>(1e-1), Ratio::new::<ratio>(1e1)).unwrap(),
            5,
        )
        .unwrap();

        let results = sweep(&params, &SolverConfig::default());

        let poled = &results.curves[0];
        assert_eq!(poled.unconverged, 5);
        assert!(
            poled
                .points
                .iter()
                .all(|p| p.gamma_eff.get::<ratio>().is_nan())
        );

        // The sweep still completes the remaining curve.
        assert_eq!(results.curves[1].unconverged, 0);
    }
}
