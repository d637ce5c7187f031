// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Density Stepper
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Continuity equation: ∂n/∂t = -u·∂n/∂x - n·∂u/∂x.

use es1d_math::spectral::gradient;
use ndarray::Array1;

#[derive(Debug, Clone)]
pub struct DensityStepper {
    kx: Array1<f64>,
}

impl DensityStepper {
    pub fn new(kx: &Array1<f64>) -> Self {
        DensityStepper { kx: kx.clone() }
    }

    pub fn rhs(&self, n: &Array1<f64>, u: &Array1<f64>) -> Array1<f64> {
        assert_eq!(n.len(), u.len(), "n and u must have the same length");
        -(u * &gradient(n, &self.kx)) - n * &gradient(u, &self.kx)
    }
}
