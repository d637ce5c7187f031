// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Spectral Operators
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Spectral operators on periodic 1D fields.
//!
//! Both operators take the real part of the inverse transform; aliasing
//! above the Nyquist wavenumber is not mitigated.

use crate::fft::{fft, ifft_real, irfft, rfft};
use ndarray::{Array1, Zip};
use num_complex::Complex64;

/// Spectral first derivative: Re(IFFT(i·k·FFT(f))).
///
/// `kx` must be in FFT ordering with the same length as `f`.
pub fn gradient(f: &Array1<f64>, kx: &Array1<f64>) -> Array1<f64> {
    assert_eq!(
        f.len(),
        kx.len(),
        "field and wavenumber arrays must have the same length"
    );
    let mut spectrum = fft(f);
    Zip::from(&mut spectrum)
        .and(kx)
        .for_each(|c, &k| *c *= Complex64::new(0.0, k));
    ifft_real(&spectrum)
}

/// Multiply the real-FFT half spectrum of `f` by `filter` and transform back
/// to `f.len()` samples: Re(IRFFT(filter·RFFT(f))).
///
/// `filter` must have the half-spectrum length `f.len()/2 + 1`.
pub fn apply_rfft_filter(f: &Array1<f64>, filter: &Array1<f64>) -> Array1<f64> {
    let n = f.len();
    assert_eq!(
        filter.len(),
        n / 2 + 1,
        "filter must match the half-spectrum length"
    );
    let mut spectrum = rfft(f);
    Zip::from(&mut spectrum)
        .and(filter)
        .for_each(|c, &w| *c *= w);
    irfft(&spectrum, n)
}
