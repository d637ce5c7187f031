// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Ampère
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Electron current density j = n·u, the source term for an Ampère-law
//! field update. Sign and charge conventions are left to the caller.

use ndarray::Array1;

#[derive(Debug, Clone, Copy, Default)]
pub struct AmpereStepper;

impl AmpereStepper {
    pub fn rhs(&self, n: &Array1<f64>, u: &Array1<f64>) -> Array1<f64> {
        assert_eq!(n.len(), u.len(), "n and u must have the same length");
        n * u
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_is_product() {
        let n = Array1::from(vec![1.0, 2.0, 0.5]);
        let u = Array1::from(vec![0.0, -1.5, 4.0]);
        assert_eq!(AmpereStepper.rhs(&n, &u), Array1::from(vec![0.0, -3.0, 2.0]));
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_panics() {
        AmpereStepper.rhs(&Array1::zeros(3), &Array1::zeros(4));
    }
}
