//! Piecewise-linear 1D interpolation.
//!
//! Same semantics as `numpy.interp(x, xp, fp, left, right)`.

use ndarray::Array1;

/// Linear interpolation of a single point.
///
/// `xp` must be increasing. Returns `left` for x < xp[0], `right` for
/// x > xp[last], and the table value at the end points themselves.
pub fn interp1d(x: f64, xp: &[f64], fp: &[f64], left: f64, right: f64) -> f64 {
    let n = xp.len();
    assert!(n > 0, "Interpolation table must not be empty");
    assert_eq!(fp.len(), n, "xp and fp must have the same length");

    if x.is_nan() {
        return f64::NAN;
    }
    if x < xp[0] {
        return left;
    }
    if x > xp[n - 1] {
        return right;
    }
    if x == xp[n - 1] {
        return fp[n - 1];
    }

    // First index with xp[i] > x, so xp[i-1] <= x < xp[i]
    let i = xp.partition_point(|&v| v <= x);
    let (x0, x1) = (xp[i - 1], xp[i]);
    let (f0, f1) = (fp[i - 1], fp[i]);
    let t = (x - x0) / (x1 - x0);

    f0 + t * (f1 - f0)
}

/// Elementwise linear interpolation of `x` onto the table (`xp`, `fp`).
pub fn interp(
    x: &Array1<f64>,
    xp: &Array1<f64>,
    fp: &Array1<f64>,
    left: f64,
    right: f64,
) -> Array1<f64> {
    // Owned copies accept any memory layout (reversed or strided views).
    let xp = xp.to_vec();
    let fp = fp.to_vec();
    x.mapv(|xi| interp1d(xi, &xp, &fp, left, right))
}
