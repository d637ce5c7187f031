// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Particle Trapping
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Trapping correction δ: advected at a fixed speed, driven by the
//! rectified damped field and relaxing slowly back to zero.
//!
//! ∂δ/∂t = -3.757·∂δ/∂x + 100·|wis_trap⊛E| - 0.001·δ

use crate::closure::{check_filter_grid, trapping_damping_filter, warn_if_outside_table};
use crate::frequency_table::FrequencyTable;
use es1d_math::spectral::{apply_rfft_filter, gradient};
use es1d_types::constants::{
    TRAPPING_ADVECTION_SPEED, TRAPPING_FORCING_GAIN, TRAPPING_RELAXATION_RATE,
};
use es1d_types::error::Es1dResult;
use ndarray::{Array1, Zip};

#[derive(Debug, Clone)]
pub struct ParticleTrapper {
    kx: Array1<f64>,
    kxr: Array1<f64>,
    wis: Array1<f64>,
}

impl ParticleTrapper {
    pub fn new(kx: &Array1<f64>, kxr: &Array1<f64>, table: &FrequencyTable) -> Es1dResult<Self> {
        check_filter_grid(kx, kxr)?;
        warn_if_outside_table(table, kxr);
        Ok(ParticleTrapper {
            kx: kx.clone(),
            kxr: kxr.clone(),
            wis: trapping_damping_filter(table, kxr),
        })
    }

    pub fn kxr(&self) -> &Array1<f64> {
        &self.kxr
    }

    /// Trapping damping filter, zero outside the tabulated range.
    pub fn wis(&self) -> &Array1<f64> {
        &self.wis
    }

    /// 100·|wis_trap⊛E|, never negative.
    pub fn forcing(&self, e: &Array1<f64>) -> Array1<f64> {
        apply_rfft_filter(e, &self.wis).mapv(|v| TRAPPING_FORCING_GAIN * v.abs())
    }

    pub fn rhs(&self, e: &Array1<f64>, delta: &Array1<f64>) -> Array1<f64> {
        assert_eq!(e.len(), self.kx.len(), "e must have the same length as kx");
        assert_eq!(delta.len(), self.kx.len(), "delta must have the same length as kx");

        let mut ddelta = gradient(delta, &self.kx) * (-TRAPPING_ADVECTION_SPEED);
        Zip::from(&mut ddelta)
            .and(&self.forcing(e))
            .and(delta)
            .for_each(|d, &f, &dl| *d += f - TRAPPING_RELAXATION_RATE * dl);
        ddelta
    }
}
