// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Dispersion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Roots of the kinetic electrostatic (Langmuir) dispersion relation.
//!
//! ε(ω, k) = 1 + (n_r / (k² T_r))·[1 + ζ·Z(ζ)],  ζ = ω / (√2·k·√T_r)
//!
//! in units of ω_pe and λ_D, with n_r the density ratio and T_r the
//! temperature ratio (v_th² = T_r). Roots are found by complex Newton
//! iteration started from the Bohm-Gross frequency.

use es1d_math::plasma_dispersion::{z_function, z_prime};
use es1d_types::error::{Es1dError, Es1dResult};
use num_complex::Complex64;

/// Maximum Newton iterations per root.
const MAX_NEWTON_ITER: usize = 100;

/// Relative Newton step size accepted as converged. Convergence is
/// quadratic, so the returned root is accurate to roughly its square.
const NEWTON_TOL: f64 = 1e-7;

/// Source of complex wave frequencies ω(k) = ω_r + i·γ.
pub trait DispersionSolver {
    fn solve(
        &self,
        density_ratio: f64,
        temperature_ratio: f64,
        wavenumber: f64,
    ) -> Es1dResult<Complex64>;
}

/// Any closure with the solver signature is a solver. Used for mocks.
impl<F> DispersionSolver for F
where
    F: Fn(f64, f64, f64) -> Es1dResult<Complex64>,
{
    fn solve(
        &self,
        density_ratio: f64,
        temperature_ratio: f64,
        wavenumber: f64,
    ) -> Es1dResult<Complex64> {
        self(density_ratio, temperature_ratio, wavenumber)
    }
}

/// Newton root finder for the Maxwellian electron Langmuir branch.
#[derive(Debug, Clone)]
pub struct ElectrostaticDispersion {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for ElectrostaticDispersion {
    fn default() -> Self {
        ElectrostaticDispersion {
            max_iterations: MAX_NEWTON_ITER,
            tolerance: NEWTON_TOL,
        }
    }
}

/// Dielectric function ε(ω) and its derivative dε/dω.
pub fn dielectric(
    omega: Complex64,
    density_ratio: f64,
    temperature_ratio: f64,
    wavenumber: f64,
) -> (Complex64, Complex64) {
    let vth = temperature_ratio.sqrt();
    let scale = std::f64::consts::SQRT_2 * wavenumber * vth;
    let zeta = omega / scale;
    let chi = density_ratio / (wavenumber * wavenumber * temperature_ratio);

    let z = z_function(zeta);
    let eps = 1.0 + chi * (1.0 + zeta * z);
    // d(ζZ)/dζ = Z + ζZ'
    let deps = chi * (z + zeta * z_prime(zeta)) / scale;
    (eps, deps)
}

impl ElectrostaticDispersion {
    fn validate_inputs(
        &self,
        density_ratio: f64,
        temperature_ratio: f64,
        wavenumber: f64,
    ) -> Es1dResult<()> {
        for (name, value) in [
            ("density_ratio", density_ratio),
            ("temperature_ratio", temperature_ratio),
            ("wavenumber", wavenumber),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Es1dError::ConfigError(format!(
                    "dispersion {name} must be finite and > 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Bohm-Gross estimate ω² = n_r + 3·k²·T_r.
    pub fn initial_guess(density_ratio: f64, temperature_ratio: f64, wavenumber: f64) -> f64 {
        (density_ratio + 3.0 * wavenumber * wavenumber * temperature_ratio).sqrt()
    }
}

impl DispersionSolver for ElectrostaticDispersion {
    fn solve(
        &self,
        density_ratio: f64,
        temperature_ratio: f64,
        wavenumber: f64,
    ) -> Es1dResult<Complex64> {
        self.validate_inputs(density_ratio, temperature_ratio, wavenumber)?;

        let mut omega = Complex64::new(
            Self::initial_guess(density_ratio, temperature_ratio, wavenumber),
            0.0,
        );

        for iteration in 1..=self.max_iterations {
            let (eps, deps) = dielectric(omega, density_ratio, temperature_ratio, wavenumber);
            if !deps.is_finite() || deps.norm() == 0.0 {
                return Err(Es1dError::SolverDiverged {
                    wavenumber,
                    iterations: iteration,
                    message: format!("degenerate derivative dε/dω = {deps} at ω = {omega}"),
                });
            }

            let step = eps / deps;
            omega -= step;
            log::trace!(
                "dispersion k={wavenumber:.4} iter {iteration}: ω = {omega:.10}, |ε| = {:.3e}",
                eps.norm()
            );

            if !omega.is_finite() {
                return Err(Es1dError::SolverDiverged {
                    wavenumber,
                    iterations: iteration,
                    message: "non-finite Newton iterate".to_string(),
                });
            }
            if step.norm() <= self.tolerance * omega.norm().max(1.0) {
                if omega.re <= 0.0 {
                    return Err(Es1dError::SolverDiverged {
                        wavenumber,
                        iterations: iteration,
                        message: format!("converged to non-physical branch ω = {omega}"),
                    });
                }
                return Ok(omega);
            }
        }

        Err(Es1dError::SolverDiverged {
            wavenumber,
            iterations: self.max_iterations,
            message: format!("no convergence to tolerance {:.1e}", self.tolerance),
        })
    }
}
