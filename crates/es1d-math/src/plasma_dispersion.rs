// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Plasma Dispersion Function
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fried–Conte plasma dispersion function Z(ζ) for complex argument.
//!
//! Z(ζ) = i√π·exp(-ζ²) - 2·F(ζ), with F the Dawson function. F is summed
//! from its Taylor series for |ζ| ≤ 4 and from the asymptotic series
//! beyond. The asymptotic branch carries the Landau residue with weight
//! σ = 0, 1, 2 for ζ above, near or below the real axis.

use num_complex::Complex64;

const SQRT_PI: f64 = 1.772_453_850_905_516;

/// Switch-over radius between the Taylor and asymptotic branches.
const SERIES_RADIUS: f64 = 4.0;

/// Hard cap on Taylor terms. Convergence needs ~80 at |ζ| = 4.
const SERIES_MAX_TERMS: usize = 200;

/// Hard cap on asymptotic terms. The series is cut at its smallest term.
const ASYMPTOTIC_MAX_TERMS: usize = 60;

/// Relative truncation threshold.
const SERIES_EPS: f64 = 1e-17;

/// Plasma dispersion function Z(ζ).
pub fn z_function(zeta: Complex64) -> Complex64 {
    let residue = Complex64::new(0.0, SQRT_PI) * (-zeta * zeta).exp();

    if zeta.norm() <= SERIES_RADIUS {
        return residue - 2.0 * dawson_series(zeta);
    }

    let sigma = if zeta.im.abs() <= zeta.re.abs() {
        1.0
    } else if zeta.im > 0.0 {
        0.0
    } else {
        2.0
    };
    sigma * residue - asymptotic_series(zeta)
}

/// Derivative Z'(ζ) = -2·(1 + ζ·Z(ζ)).
pub fn z_prime(zeta: Complex64) -> Complex64 {
    -2.0 * (1.0 + zeta * z_function(zeta))
}

/// Dawson function F(ζ) = Σ (-2ζ²)ⁿ ζ / (2n+1)!!.
fn dawson_series(zeta: Complex64) -> Complex64 {
    let ratio = -2.0 * zeta * zeta;
    let mut term = zeta;
    let mut sum = zeta;
    for n in 1..SERIES_MAX_TERMS {
        term = term * ratio / (2 * n + 1) as f64;
        sum += term;
        if term.norm() <= SERIES_EPS * sum.norm() {
            break;
        }
    }
    sum
}

/// 2·F(ζ) ~ (1/ζ)·Σ (2n-1)!! / (2ζ²)ⁿ, truncated at the smallest term.
fn asymptotic_series(zeta: Complex64) -> Complex64 {
    let inv_two_zeta_sq = 1.0 / (2.0 * zeta * zeta);
    let mut term = Complex64::new(1.0, 0.0);
    let mut sum = term;
    for n in 1..ASYMPTOTIC_MAX_TERMS {
        let next = term * inv_two_zeta_sq * (2 * n - 1) as f64;
        if next.norm() >= term.norm() {
            break;
        }
        term = next;
        sum += term;
        if term.norm() <= SERIES_EPS * sum.norm() {
            break;
        }
    }
    sum / zeta
}
