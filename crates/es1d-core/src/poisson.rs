// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Poisson
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Periodic electrostatic Poisson solve in Fourier space.

use es1d_math::fft::{fft, ifft_real};
use ndarray::{Array1, Zip};
use num_complex::Complex64;

/// E = Re(IFFT(i·(1/k)·FFT(dn))), with the k = 0 mode removed.
#[derive(Debug, Clone)]
pub struct PoissonSolver {
    one_over_kx: Array1<f64>,
}

impl PoissonSolver {
    /// Build from FFT-ordered wavenumbers. The k = 0 entry of 1/k is
    /// pinned to zero here, so the mean of `dn` never reaches the field.
    pub fn new(kx: &Array1<f64>) -> Self {
        let one_over_kx = kx.mapv(|k| if k == 0.0 { 0.0 } else { 1.0 / k });
        PoissonSolver { one_over_kx }
    }

    pub fn one_over_kx(&self) -> &Array1<f64> {
        &self.one_over_kx
    }

    /// Electric field from the charge-density perturbation `dn`.
    pub fn solve(&self, dn: &Array1<f64>) -> Array1<f64> {
        assert_eq!(
            dn.len(),
            self.one_over_kx.len(),
            "density perturbation and wavenumber arrays must have the same length"
        );
        let mut spectrum = fft(dn);
        Zip::from(&mut spectrum)
            .and(&self.one_over_kx)
            .for_each(|c, &inv_k| *c *= Complex64::new(0.0, inv_k));
        ifft_real(&spectrum)
    }
}
