// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Closure Filters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Linear-response closure filters on the real-FFT wavenumber grid.
//!
//! Each filter is the frequency table interpolated onto `kxr` and is
//! applied as a multiplier on the half spectrum. Note the boundary rules
//! differ: the velocity damping filter holds the last tabulated rate
//! above the table, the trapping filter drops to zero on both sides.

use crate::frequency_table::FrequencyTable;
use es1d_math::interp::interp;
use es1d_types::config::PhysicsOptions;
use es1d_types::constants::THERMAL_CORRECTION_FACTOR;
use es1d_types::error::{Es1dError, Es1dResult};
use ndarray::Array1;

/// Restoring-force multiplier `wr_corr`.
///
/// With `kinetic_real_wepw`: ω_r(k) / sqrt(1 + 3k²), zero below the table
/// and ω_r(k_max) above it. Otherwise all ones.
pub fn restoring_force_filter(
    table: &FrequencyTable,
    kxr: &Array1<f64>,
    physics: &PhysicsOptions,
) -> Array1<f64> {
    if !physics.kinetic_real_wepw {
        return Array1::ones(kxr.len());
    }
    let wrs = interp(kxr, table.klds(), table.wrs(), 0.0, table.last_wr());
    let thermal = kxr.mapv(|k| (1.0 + THERMAL_CORRECTION_FACTOR * k * k).sqrt());
    wrs / thermal
}

/// Velocity damping multiplier `wis`.
///
/// With `landau_damping`: γ(k), zero below the table and γ(k_max) above
/// it. Otherwise all zeros.
pub fn landau_damping_filter(
    table: &FrequencyTable,
    kxr: &Array1<f64>,
    physics: &PhysicsOptions,
) -> Array1<f64> {
    if !physics.landau_damping {
        return Array1::zeros(kxr.len());
    }
    interp(kxr, table.klds(), table.wis(), 0.0, table.last_wi())
}

/// Trapping damping multiplier: γ(k) inside the table, zero outside on
/// both sides, independent of the physics flags.
pub fn trapping_damping_filter(table: &FrequencyTable, kxr: &Array1<f64>) -> Array1<f64> {
    interp(kxr, table.klds(), table.wis(), 0.0, 0.0)
}

/// Check that `kxr` is the half spectrum of `kx`.
pub fn check_filter_grid(kx: &Array1<f64>, kxr: &Array1<f64>) -> Es1dResult<()> {
    let expected = kx.len() / 2 + 1;
    if kxr.len() != expected {
        return Err(Es1dError::LengthMismatch {
            what: "filter wavenumbers (kxr)",
            expected,
            actual: kxr.len(),
        });
    }
    Ok(())
}

/// Warn when no filter wavenumber lands inside the tabulated range; the
/// filters then carry only their boundary values.
pub fn warn_if_outside_table(table: &FrequencyTable, kxr: &Array1<f64>) {
    let (k_min, k_max) = table.k_range();
    if !kxr.iter().any(|&k| k >= k_min && k <= k_max) {
        log::warn!(
            "no grid wavenumber inside tabulated range [{k_min}, {k_max}] \
             (kxr spacing {:.4}); closure filters reduce to boundary values",
            if kxr.len() > 1 { kxr[1] - kxr[0] } else { 0.0 }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn table() -> FrequencyTable {
        let mock = |_: f64, _: f64, k: f64| -> Es1dResult<Complex64> {
            Ok(Complex64::new(1.0 + k, -k * k))
        };
        FrequencyTable::build(&mock, 21).unwrap()
    }

    /// 0.0, 0.1, 0.2, 0.3, 0.4, 0.5
    fn kxr() -> Array1<f64> {
        Array1::from(vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5])
    }

    #[test]
    fn test_disabled_filters_are_trivial() {
        let physics = PhysicsOptions::default();
        let wr = restoring_force_filter(&table(), &kxr(), &physics);
        let wi = landau_damping_filter(&table(), &kxr(), &physics);
        assert!(wr.iter().all(|&v| v == 1.0));
        assert!(wi.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_restoring_filter_boundaries() {
        let physics = PhysicsOptions::kinetic(3.0);
        let wr = restoring_force_filter(&table(), &kxr(), &physics);
        assert_eq!(wr[0], 0.0);
        assert_eq!(wr[1], 0.0);
        let inside = 1.3 / (1.0_f64 + 3.0 * 0.09).sqrt();
        assert!((wr[3] - inside).abs() < 1e-12);
        // Above the table: last ω_r with the local thermal factor
        let above = 1.4 / (1.0_f64 + 3.0 * 0.25).sqrt();
        assert!((wr[5] - above).abs() < 1e-12);
    }

    #[test]
    fn test_landau_filter_holds_last_rate_above_table() {
        let physics = PhysicsOptions::kinetic(3.0);
        let wi = landau_damping_filter(&table(), &kxr(), &physics);
        assert_eq!(wi[0], 0.0);
        assert_eq!(wi[1], 0.0);
        assert!((wi[3] + 0.09).abs() < 1e-12);
        assert!((wi[4] + 0.16).abs() < 1e-12);
        assert!((wi[5] + 0.16).abs() < 1e-12);
    }

    #[test]
    fn test_trapping_filter_zero_outside_table() {
        let wis = trapping_damping_filter(&table(), &kxr());
        assert_eq!(wis[0], 0.0);
        assert_eq!(wis[1], 0.0);
        assert!((wis[2] + 0.04).abs() < 1e-12);
        assert!((wis[4] + 0.16).abs() < 1e-12);
        assert_eq!(wis[5], 0.0);
    }

    #[test]
    fn test_trapping_filter_ignores_flags() {
        // No flags involved: same result whatever the options say
        let a = trapping_damping_filter(&table(), &kxr());
        let b = landau_damping_filter(&table(), &kxr(), &PhysicsOptions::kinetic(3.0));
        assert_eq!(a[3], b[3]);
        assert_ne!(a[5], b[5]);
    }

    #[test]
    fn test_check_filter_grid() {
        let kx = Array1::zeros(10);
        assert!(check_filter_grid(&kx, &Array1::zeros(6)).is_ok());
        assert!(matches!(
            check_filter_grid(&kx, &Array1::zeros(5)),
            Err(Es1dError::LengthMismatch {
                expected: 6,
                actual: 5,
                ..
            })
        ));
    }
}
