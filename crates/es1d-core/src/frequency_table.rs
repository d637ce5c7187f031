// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Frequency Table
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tabulated complex Langmuir frequencies over k·λ_D ∈ [0.2, 0.4].
//!
//! Built once, then shared by reference with every stepper that needs
//! closure filters.

use crate::dispersion::DispersionSolver;
use es1d_types::constants::{
    TABLE_DENSITY_RATIO, TABLE_K_MAX, TABLE_K_MIN, TABLE_SIZE, TABLE_TEMPERATURE_RATIO,
};
use es1d_types::error::{Es1dError, Es1dResult};
use ndarray::Array1;

/// Parallel arrays of wavenumber, real frequency and damping rate.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    klds: Array1<f64>,
    wrs: Array1<f64>,
    wis: Array1<f64>,
}

/// `num` points on [start, stop], with both end points exact.
fn linspace_exact(start: f64, stop: f64, num: usize) -> Array1<f64> {
    let step = (stop - start) / (num - 1) as f64;
    Array1::from_shape_fn(num, |i| {
        if i == num - 1 {
            stop
        } else {
            start + step * i as f64
        }
    })
}

impl FrequencyTable {
    /// Sample `solver` at `num` wavenumbers spanning [0.2, 0.4].
    ///
    /// Any solver failure or non-finite root aborts the build.
    pub fn build<S: DispersionSolver + ?Sized>(solver: &S, num: usize) -> Es1dResult<Self> {
        if num < 2 {
            return Err(Es1dError::ConfigError(format!(
                "frequency table needs at least 2 samples, got {num}"
            )));
        }

        let klds = linspace_exact(TABLE_K_MIN, TABLE_K_MAX, num);
        let mut wrs = Array1::zeros(num);
        let mut wis = Array1::zeros(num);

        for (i, &kld) in klds.iter().enumerate() {
            let ww = solver.solve(TABLE_DENSITY_RATIO, TABLE_TEMPERATURE_RATIO, kld)?;
            if !ww.is_finite() {
                return Err(Es1dError::NonFiniteRoot {
                    wavenumber: kld,
                    re: ww.re,
                    im: ww.im,
                });
            }
            wrs[i] = ww.re;
            wis[i] = ww.im;
        }

        log::debug!(
            "frequency table: {num} roots over k in [{TABLE_K_MIN}, {TABLE_K_MAX}], \
             ω_r in [{:.4}, {:.4}], γ in [{:.3e}, {:.3e}]",
            wrs[0],
            wrs[num - 1],
            wis[0],
            wis[num - 1]
        );

        Ok(FrequencyTable { klds, wrs, wis })
    }

    /// The standard 128-sample table.
    pub fn build_default<S: DispersionSolver + ?Sized>(solver: &S) -> Es1dResult<Self> {
        Self::build(solver, TABLE_SIZE)
    }

    /// Wrap precomputed samples. `klds` must be strictly increasing and all
    /// values finite.
    pub fn from_samples(
        klds: Array1<f64>,
        wrs: Array1<f64>,
        wis: Array1<f64>,
    ) -> Es1dResult<Self> {
        let n = klds.len();
        if n < 2 {
            return Err(Es1dError::ConfigError(format!(
                "frequency table needs at least 2 samples, got {n}"
            )));
        }
        for (what, arr) in [("wrs", &wrs), ("wis", &wis)] {
            if arr.len() != n {
                return Err(Es1dError::LengthMismatch {
                    what,
                    expected: n,
                    actual: arr.len(),
                });
            }
        }
        if klds.iter().chain(wrs.iter()).chain(wis.iter()).any(|v| !v.is_finite()) {
            return Err(Es1dError::ConfigError(
                "frequency table samples must be finite".to_string(),
            ));
        }
        if klds.windows(2).into_iter().any(|w| w[1] <= w[0]) {
            return Err(Es1dError::ConfigError(
                "frequency table wavenumbers must be strictly increasing".to_string(),
            ));
        }
        Ok(FrequencyTable { klds, wrs, wis })
    }

    pub fn klds(&self) -> &Array1<f64> {
        &self.klds
    }

    pub fn wrs(&self) -> &Array1<f64> {
        &self.wrs
    }

    pub fn wis(&self) -> &Array1<f64> {
        &self.wis
    }

    pub fn len(&self) -> usize {
        self.klds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.klds.is_empty()
    }

    /// (first, last) tabulated wavenumber.
    pub fn k_range(&self) -> (f64, f64) {
        (self.klds[0], self.klds[self.len() - 1])
    }

    /// Real frequency at the largest tabulated wavenumber.
    pub fn last_wr(&self) -> f64 {
        self.wrs[self.len() - 1]
    }

    /// Damping rate at the largest tabulated wavenumber.
    pub fn last_wi(&self) -> f64 {
        self.wis[self.len() - 1]
    }
}
