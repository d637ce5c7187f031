// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed closure constants. All quantities are in normalized units
//! (ω_pe = 1, λ_D = 1, v_th = 1).

/// Number of wavenumber samples in the dispersion table.
pub const TABLE_SIZE: usize = 128;

/// Lower edge of the tabulated normalized wavenumber k·λ_D.
pub const TABLE_K_MIN: f64 = 0.2;

/// Upper edge of the tabulated normalized wavenumber k·λ_D.
pub const TABLE_K_MAX: f64 = 0.4;

/// Density ratio handed to the dispersion solver when tabulating.
pub const TABLE_DENSITY_RATIO: f64 = 1.0;

/// Temperature ratio handed to the dispersion solver when tabulating.
pub const TABLE_TEMPERATURE_RATIO: f64 = 1.0;

/// Bohm-Gross thermal factor in sqrt(1 + 3 k²).
pub const THERMAL_CORRECTION_FACTOR: f64 = 3.0;

/// Advection speed of the trapping correction field.
pub const TRAPPING_ADVECTION_SPEED: f64 = 3.757;

/// Gain on the rectified, damping-filtered field that drives trapping.
pub const TRAPPING_FORCING_GAIN: f64 = 100.0;

/// Linear relaxation rate of the trapping correction back to zero.
pub const TRAPPING_RELAXATION_RATE: f64 = 0.001;

/// Adiabatic index for 1D electron compression.
pub const DEFAULT_GAMMA: f64 = 3.0;

/// Neutralizing ion background density.
pub const DEFAULT_BACKGROUND_DENSITY: f64 = 1.0;
