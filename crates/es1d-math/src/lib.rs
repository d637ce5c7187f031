//! Mathematical primitives for the ES1D kinetic closure.

pub mod fft;
pub mod interp;
pub mod plasma_dispersion;
pub mod spectral;
