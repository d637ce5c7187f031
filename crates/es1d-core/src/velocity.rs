// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Velocity Stepper
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Momentum equation with the kinetic closure:
//!
//! ∂u/∂t = -u·∂u/∂x - wr_corr⊛(∂(p/m)/∂x / n) - qE/m + (wis⊛u) / (1 + δ²)
//!
//! where `⊛` is a multiplier on the real-FFT half spectrum. The trapping
//! field δ suppresses Landau damping where it is large.

use crate::closure::{
    check_filter_grid, landau_damping_filter, restoring_force_filter, warn_if_outside_table,
};
use crate::frequency_table::FrequencyTable;
use es1d_math::spectral::{apply_rfft_filter, gradient};
use es1d_types::config::PhysicsOptions;
use es1d_types::error::Es1dResult;
use ndarray::{Array1, Zip};

#[derive(Debug, Clone)]
pub struct VelocityStepper {
    kx: Array1<f64>,
    wr_corr: Array1<f64>,
    wis: Array1<f64>,
}

impl VelocityStepper {
    /// Freeze the closure filters for the grid (`kx`, `kxr`).
    pub fn new(
        kx: &Array1<f64>,
        kxr: &Array1<f64>,
        physics: &PhysicsOptions,
        table: &FrequencyTable,
    ) -> Es1dResult<Self> {
        check_filter_grid(kx, kxr)?;
        if physics.kinetic_real_wepw || physics.landau_damping {
            warn_if_outside_table(table, kxr);
        }
        Ok(VelocityStepper {
            kx: kx.clone(),
            wr_corr: restoring_force_filter(table, kxr, physics),
            wis: landau_damping_filter(table, kxr, physics),
        })
    }

    pub fn wr_corr(&self) -> &Array1<f64> {
        &self.wr_corr
    }

    pub fn wis(&self) -> &Array1<f64> {
        &self.wis
    }

    /// wis⊛u
    pub fn landau_damping_term(&self, u: &Array1<f64>) -> Array1<f64> {
        apply_rfft_filter(u, &self.wis)
    }

    /// wr_corr⊛(∂(p/m)/∂x / n)
    pub fn restoring_force_term(&self, gradp_over_nm: &Array1<f64>) -> Array1<f64> {
        apply_rfft_filter(gradp_over_nm, &self.wr_corr)
    }

    pub fn rhs(
        &self,
        n: &Array1<f64>,
        u: &Array1<f64>,
        p_over_m: &Array1<f64>,
        q_over_m_times_e: &Array1<f64>,
        delta: &Array1<f64>,
    ) -> Array1<f64> {
        let nx = self.kx.len();
        for (name, arr) in [
            ("n", n),
            ("u", u),
            ("p_over_m", p_over_m),
            ("q_over_m_times_e", q_over_m_times_e),
            ("delta", delta),
        ] {
            assert_eq!(arr.len(), nx, "{name} must have the same length as kx");
        }

        let gradp_over_nm = gradient(p_over_m, &self.kx) / n;
        let restoring = self.restoring_force_term(&gradp_over_nm);
        let damping = self.landau_damping_term(u);

        let mut du = -(u * &gradient(u, &self.kx)) - restoring - q_over_m_times_e;
        Zip::from(&mut du)
            .and(&damping)
            .and(delta)
            .for_each(|d, &w, &dl| *d += w / (1.0 + dl * dl));
        du
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use es1d_types::error::Es1dError;
    use es1d_types::state::Grid1D;
    use num_complex::Complex64;
    use std::f64::consts::PI;

    /// ω = 1 + k, γ = -0.1·k: linear, so interpolation is exact.
    fn table() -> FrequencyTable {
        let mock = |_: f64, _: f64, k: f64| -> Es1dResult<Complex64> {
            Ok(Complex64::new(1.0 + k, -0.1 * k))
        };
        FrequencyTable::build(&mock, 21).unwrap()
    }

    /// 64 points with kxr[3] = 0.3.
    fn grid() -> Grid1D {
        Grid1D::new(64, 0.0, 2.0 * PI * 3.0 / 0.3)
    }

    #[test]
    fn test_disabled_closure_is_euler() {
        let g = grid();
        let stepper =
            VelocityStepper::new(&g.kx, &g.kxr, &PhysicsOptions::default(), &table()).unwrap();
        let k = g.kx[2];
        let n = g.x.mapv(|x| 1.0 + 0.1 * (k * x).cos());
        let u = g.x.mapv(|x| 0.2 * (k * x).sin());
        let p = g.x.mapv(|x| 1.0 + 0.05 * (2.0 * k * x).cos());
        let qe = g.x.mapv(|x| 0.01 * (k * x).cos());
        let delta = Array1::from_elem(64, 0.7);

        let du = stepper.rhs(&n, &u, &p, &qe, &delta);
        let euler = -(&u * &gradient(&u, &g.kx)) - gradient(&p, &g.kx) / &n - &qe;
        for i in 0..64 {
            assert!((du[i] - euler[i]).abs() < 1e-12, "at {i}: {} vs {}", du[i], euler[i]);
        }
    }

    #[test]
    fn test_landau_damping_on_tabulated_mode() {
        let g = grid();
        let stepper =
            VelocityStepper::new(&g.kx, &g.kxr, &PhysicsOptions::kinetic(3.0), &table()).unwrap();
        let k = g.kxr[3];
        let u = g.x.mapv(|x| (k * x).cos());
        let damped = stepper.landau_damping_term(&u);
        for i in 0..64 {
            assert!((damped[i] + 0.03 * u[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_trapping_suppresses_damping() {
        let g = grid();
        let stepper =
            VelocityStepper::new(&g.kx, &g.kxr, &PhysicsOptions::kinetic(3.0), &table()).unwrap();
        let k = g.kxr[3];
        // Uniform u gives no advection, only the damping of its k mode
        let u = g.x.mapv(|x| 1e-3 * (k * x).cos());
        let n = Array1::ones(64);
        let p = Array1::ones(64);
        let qe = Array1::zeros(64);

        let free = stepper.rhs(&n, &u, &p, &qe, &Array1::zeros(64));
        let trapped = stepper.rhs(&n, &u, &p, &qe, &Array1::from_elem(64, 3.0));
        let advection = -(&u * &gradient(&u, &g.kx));
        for i in 0..64 {
            let d_free = free[i] - advection[i];
            let d_trapped = trapped[i] - advection[i];
            assert!((d_trapped - d_free / 10.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_restoring_force_uses_kinetic_frequency() {
        let g = grid();
        let physics = PhysicsOptions {
            kinetic_real_wepw: true,
            landau_damping: false,
            gamma: 3.0,
        };
        let stepper = VelocityStepper::new(&g.kx, &g.kxr, &physics, &table()).unwrap();
        let k = g.kxr[3];
        let eps = 1e-2;
        let p = g.x.mapv(|x| 1.0 + eps * (k * x).cos());
        let zeros = Array1::zeros(64);

        let du = stepper.rhs(&Array1::ones(64), &zeros, &p, &zeros, &zeros);
        let wr_corr = 1.3 / (1.0_f64 + 3.0 * 0.09).sqrt();
        for i in 0..64 {
            let expected = wr_corr * eps * k * (k * g.x[i]).sin();
            assert!((du[i] - expected).abs() < 1e-10, "at {i}: {} vs {expected}", du[i]);
        }
    }

    #[test]
    fn test_filters_have_half_spectrum_length() {
        let g = grid();
        let stepper =
            VelocityStepper::new(&g.kx, &g.kxr, &PhysicsOptions::kinetic(3.0), &table()).unwrap();
        assert_eq!(stepper.wr_corr().len(), 33);
        assert_eq!(stepper.wis().len(), 33);
        assert_eq!(stepper.wis()[0], 0.0);
    }

    #[test]
    fn test_mismatched_filter_grid_rejected() {
        let g = grid();
        let short = g.kxr.slice(ndarray::s![..10]).to_owned();
        let err = VelocityStepper::new(&g.kx, &short, &PhysicsOptions::default(), &table());
        assert!(matches!(err, Err(Es1dError::LengthMismatch { .. })));
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_field_length_mismatch_panics() {
        let g = grid();
        let stepper =
            VelocityStepper::new(&g.kx, &g.kxr, &PhysicsOptions::default(), &table()).unwrap();
        let ok = Array1::zeros(64);
        stepper.rhs(&ok, &ok, &ok, &ok, &Array1::zeros(63));
    }
}
