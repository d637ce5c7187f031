// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;
use std::f64::consts::PI;

/// Periodic 1D grid with its Fourier-conjugate wavenumbers.
///
/// Points are cell centred: x_i = xmin + (i + 1/2)·dx, dx = (xmax - xmin)/nx.
#[derive(Debug, Clone)]
pub struct Grid1D {
    pub nx: usize,
    pub xmin: f64,
    pub xmax: f64,
    pub dx: f64,
    pub x: Array1<f64>,   // Cell centres [nx]
    pub kx: Array1<f64>,  // 2π·fftfreq(nx, dx) [nx]
    pub kxr: Array1<f64>, // 2π·rfftfreq(nx, dx) [nx/2 + 1]
}

impl Grid1D {
    pub fn new(nx: usize, xmin: f64, xmax: f64) -> Self {
        assert!(nx >= 2, "Grid needs at least 2 points, got {nx}");
        let length = xmax - xmin;
        let dx = length / nx as f64;

        let x = Array1::from_shape_fn(nx, |i| xmin + (i as f64 + 0.5) * dx);
        let kx = Array1::from_shape_fn(nx, |i| 2.0 * PI * fft_index(i, nx) as f64 / length);
        let kxr = Array1::from_shape_fn(nx / 2 + 1, |i| 2.0 * PI * i as f64 / length);

        Grid1D {
            nx,
            xmin,
            xmax,
            dx,
            x,
            kx,
            kxr,
        }
    }

    /// Domain length xmax - xmin.
    pub fn length(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Length of the real-FFT half spectrum.
    pub fn half_spectrum_len(&self) -> usize {
        self.kxr.len()
    }
}

/// Signed mode number of FFT bin `i`, numpy `fftfreq` ordering.
/// For even `n` the Nyquist bin is negative.
pub fn fft_index(i: usize, n: usize) -> isize {
    if i < (n - 1) / 2 + 1 {
        i as isize
    } else {
        i as isize - n as isize
    }
}

/// Field snapshot handed in by the orchestrator for one stage of one step.
#[derive(Debug, Clone)]
pub struct FieldSnapshot {
    pub n: Array1<f64>,                // Electron density
    pub u: Array1<f64>,                // Fluid velocity
    pub p_over_m: Array1<f64>,         // Pressure over mass
    pub q_over_m_times_e: Array1<f64>, // Charge-acceleration term
    pub delta: Array1<f64>,            // Trapping correction
}

impl FieldSnapshot {
    /// Uniform Maxwellian equilibrium: n = 1, u = 0, p/m = 1, no field, no trapping.
    pub fn equilibrium(nx: usize) -> Self {
        FieldSnapshot {
            n: Array1::ones(nx),
            u: Array1::zeros(nx),
            p_over_m: Array1::ones(nx),
            q_over_m_times_e: Array1::zeros(nx),
            delta: Array1::zeros(nx),
        }
    }

    pub fn len(&self) -> usize {
        self.n.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n.is_empty()
    }

    /// Panics unless all five arrays have length `nx`.
    pub fn assert_len(&self, nx: usize) {
        assert_eq!(self.n.len(), nx, "n length");
        assert_eq!(self.u.len(), nx, "u length");
        assert_eq!(self.p_over_m.len(), nx, "p_over_m length");
        assert_eq!(self.q_over_m_times_e.len(), nx, "q_over_m_times_e length");
        assert_eq!(self.delta.len(), nx, "delta length");
    }
}

/// Time derivatives of the evolved fields.
#[derive(Debug, Clone)]
pub struct FieldDerivatives {
    pub dn: Array1<f64>,
    pub du: Array1<f64>,
    pub dp_over_m: Array1<f64>,
    pub ddelta: Array1<f64>,
}

impl FieldDerivatives {
    /// Largest absolute entry over all four derivative arrays.
    pub fn max_abs(&self) -> f64 {
        [&self.dn, &self.du, &self.dp_over_m, &self.ddelta]
            .iter()
            .flat_map(|a| a.iter())
            .fold(0.0_f64, |acc, &v| acc.max(v.abs()))
    }

    pub fn is_finite(&self) -> bool {
        [&self.dn, &self.du, &self.dp_over_m, &self.ddelta]
            .iter()
            .all(|a| a.iter().all(|v| v.is_finite()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation_256() {
        let grid = Grid1D::new(256, 0.0, 2.0 * PI);
        assert_eq!(grid.nx, 256);
        assert_eq!(grid.x.len(), 256);
        assert_eq!(grid.kx.len(), 256);
        assert_eq!(grid.kxr.len(), 129);
        assert!((grid.dx - 2.0 * PI / 256.0).abs() < 1e-15);
        assert!((grid.x[0] - 0.5 * grid.dx).abs() < 1e-15);
        assert!((grid.x[255] - (2.0 * PI - 0.5 * grid.dx)).abs() < 1e-12);
    }

    #[test]
    fn test_wavenumber_ordering_even() {
        // Length 2π → integer mode numbers
        let grid = Grid1D::new(8, 0.0, 2.0 * PI);
        let expected = [0.0, 1.0, 2.0, 3.0, -4.0, -3.0, -2.0, -1.0];
        for (k, e) in grid.kx.iter().zip(expected.iter()) {
            assert!((k - e).abs() < 1e-12, "kx = {k}, expected {e}");
        }
        let expected_r = [0.0, 1.0, 2.0, 3.0, 4.0];
        for (k, e) in grid.kxr.iter().zip(expected_r.iter()) {
            assert!((k - e).abs() < 1e-12, "kxr = {k}, expected {e}");
        }
    }

    #[test]
    fn test_wavenumber_ordering_odd() {
        let grid = Grid1D::new(5, 0.0, 2.0 * PI);
        let expected = [0.0, 1.0, 2.0, -2.0, -1.0];
        for (k, e) in grid.kx.iter().zip(expected.iter()) {
            assert!((k - e).abs() < 1e-12, "kx = {k}, expected {e}");
        }
        assert_eq!(grid.half_spectrum_len(), 3);
    }

    #[test]
    fn test_only_first_bin_is_zero_mode() {
        let grid = Grid1D::new(16, -3.0, 5.0);
        assert_eq!(grid.kx[0], 0.0);
        assert!(grid.kx.iter().skip(1).all(|&k| k != 0.0));
    }

    #[test]
    fn test_equilibrium_snapshot() {
        let snap = FieldSnapshot::equilibrium(32);
        assert_eq!(snap.len(), 32);
        snap.assert_len(32);
        assert!(snap.n.iter().all(|&v| v == 1.0));
        assert!(snap.u.iter().all(|&v| v == 0.0));
    }

    #[test]
    #[should_panic(expected = "delta length")]
    fn test_snapshot_length_mismatch_panics() {
        let mut snap = FieldSnapshot::equilibrium(32);
        snap.delta = Array1::zeros(31);
        snap.assert_len(32);
    }

    #[test]
    fn test_derivatives_max_abs() {
        let d = FieldDerivatives {
            dn: Array1::from(vec![0.0, -2.0]),
            du: Array1::from(vec![1.0, 0.5]),
            dp_over_m: Array1::zeros(2),
            ddelta: Array1::zeros(2),
        };
        assert_eq!(d.max_abs(), 2.0);
        assert!(d.is_finite());
    }
}
