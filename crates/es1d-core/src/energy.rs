// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Energy Stepper
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Adiabatic pressure equation: ∂(p/m)/∂t = -u·∂(p/m)/∂x - γ·(p/m)·∂u/∂x.
//!
//! No heat flux and no field work term.

use es1d_math::spectral::gradient;
use ndarray::Array1;

#[derive(Debug, Clone)]
pub struct EnergyStepper {
    kx: Array1<f64>,
    gamma: f64,
}

impl EnergyStepper {
    pub fn new(kx: &Array1<f64>, gamma: f64) -> Self {
        EnergyStepper {
            kx: kx.clone(),
            gamma,
        }
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn rhs(&self, u: &Array1<f64>, p_over_m: &Array1<f64>) -> Array1<f64> {
        assert_eq!(u.len(), p_over_m.len(), "u and p_over_m must have the same length");
        -(u * &gradient(p_over_m, &self.kx)) - self.gamma * p_over_m * &gradient(u, &self.kx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use es1d_types::state::Grid1D;
    use std::f64::consts::PI;

    #[test]
    fn test_uniform_state_is_stationary() {
        let grid = Grid1D::new(64, 0.0, 2.0 * PI);
        let stepper = EnergyStepper::new(&grid.kx, 3.0);
        let dp = stepper.rhs(&Array1::zeros(64), &Array1::ones(64));
        assert!(dp.iter().all(|v| v.abs() < 1e-14));
    }

    #[test]
    fn test_adiabatic_compression() {
        // p/m = 2, u = sin x → ∂(p/m)/∂t = -γ·2·cos x
        let grid = Grid1D::new(64, 0.0, 2.0 * PI);
        let gamma = 5.0 / 3.0;
        let stepper = EnergyStepper::new(&grid.kx, gamma);
        let dp = stepper.rhs(&grid.x.mapv(f64::sin), &Array1::from_elem(64, 2.0));
        for i in 0..64 {
            assert!((dp[i] + gamma * 2.0 * grid.x[i].cos()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pure_advection_is_gamma_independent() {
        let grid = Grid1D::new(64, 0.0, 2.0 * PI);
        let u = Array1::from_elem(64, 0.4);
        let p = grid.x.mapv(|x| 1.0 + 0.1 * (3.0 * x).cos());
        let a = EnergyStepper::new(&grid.kx, 1.0).rhs(&u, &p);
        let b = EnergyStepper::new(&grid.kx, 3.0).rhs(&u, &p);
        for i in 0..64 {
            assert!((a[i] - b[i]).abs() < 1e-12);
            let expected = 0.4 * 0.3 * (3.0 * grid.x[i]).sin();
            assert!((a[i] - expected).abs() < 1e-12);
        }
    }
}
