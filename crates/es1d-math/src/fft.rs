//! 1D FFT wrappers around rustfft.
//!
//! Convention matches numpy:
//! - Forward transforms (fft, rfft): unnormalized
//! - Inverse transforms (ifft, irfft): normalized by 1/n

use ndarray::Array1;
use num_complex::Complex64;
use rustfft::FftPlanner;

/// Forward complex FFT of a real signal. Matches `numpy.fft.fft()`.
pub fn fft(input: &Array1<f64>) -> Array1<Complex64> {
    let n = input.len();
    let mut data: Vec<Complex64> = input.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    if n > 0 {
        let mut planner = FftPlanner::new();
        planner.plan_fft_forward(n).process(&mut data);
    }
    Array1::from(data)
}

/// Inverse complex FFT. Matches `numpy.fft.ifft()`.
pub fn ifft(input: &Array1<Complex64>) -> Array1<Complex64> {
    let n = input.len();
    let mut data = input.to_vec();
    if n > 0 {
        let mut planner = FftPlanner::new();
        planner.plan_fft_inverse(n).process(&mut data);
    }
    let norm = 1.0 / n.max(1) as f64;
    Array1::from(data).mapv(|c| c * norm)
}

/// Real part of the inverse FFT.
pub fn ifft_real(input: &Array1<Complex64>) -> Array1<f64> {
    ifft(input).mapv(|c| c.re)
}

/// Forward real FFT. Matches `numpy.fft.rfft()`: returns the n/2 + 1
/// non-negative frequency bins.
pub fn rfft(input: &Array1<f64>) -> Array1<Complex64> {
    let n = input.len();
    let full = fft(input);
    full.iter().take(n / 2 + 1).copied().collect()
}

/// Inverse real FFT to `n` output samples. Matches `numpy.fft.irfft(a, n)`.
///
/// Bins beyond the input length are treated as zero; extra input bins are
/// ignored. The imaginary parts of the DC and Nyquist bins do not
/// contribute, as in numpy.
pub fn irfft(input: &Array1<Complex64>, n: usize) -> Array1<f64> {
    let half = |k: usize| input.get(k).copied().unwrap_or_default();

    // Rebuild the Hermitian spectrum, then take the real part
    let full = Array1::from_shape_fn(n, |k| {
        if k <= n / 2 {
            half(k)
        } else {
            half(n - k).conj()
        }
    });
    ifft_real(&full)
}
