// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Driver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! External drive field: a travelling sinusoid under smooth tanh windows
//! in time and space.

use es1d_types::config::PulseDescriptor;
use ndarray::Array1;

/// Double-tanh window ½·(tanh((a - L)/w_L) - tanh((a - R)/w_R)).
///
/// Coincident edges (L = R) give an identically zero window.
pub fn envelope(rise_left: f64, rise_right: f64, left: f64, right: f64, a: f64) -> f64 {
    0.5 * (((a - left) / rise_left).tanh() - ((a - right) / rise_right).tanh())
}

/// Drive field generator bound to the grid's cell centres.
#[derive(Debug, Clone)]
pub struct Driver {
    xax: Array1<f64>,
}

impl Driver {
    pub fn new(xax: Array1<f64>) -> Self {
        Driver { xax }
    }

    pub fn xax(&self) -> &Array1<f64> {
        &self.xax
    }

    /// env_t(t)·env_x(x)·|k0|·a0·sin(k0·x - (w0 + dw0)·t)
    pub fn field(&self, pulse: &PulseDescriptor, current_time: f64) -> Array1<f64> {
        let (t_l, t_r) = pulse.time_edges();
        let (x_l, x_r) = pulse.space_edges();
        let envelope_t = envelope(pulse.t_r, pulse.t_r, t_l, t_r, current_time);
        let amplitude = envelope_t * pulse.k0.abs() * pulse.a0;
        let omega = pulse.w0 + pulse.dw0;

        self.xax.mapv(|x| {
            let envelope_x = envelope(pulse.x_r, pulse.x_r, x_l, x_r, x);
            amplitude * envelope_x * (pulse.k0 * x - omega * current_time).sin()
        })
    }

    /// Sum of the fields of all `pulses`.
    pub fn total_field(&self, pulses: &[PulseDescriptor], current_time: f64) -> Array1<f64> {
        pulses
            .iter()
            .fold(Array1::zeros(self.xax.len()), |acc, pulse| {
                acc + self.field(pulse, current_time)
            })
    }
}
