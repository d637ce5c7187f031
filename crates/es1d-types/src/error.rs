// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Es1dError {
    #[error("Dispersion solver diverged at k={wavenumber} after {iterations} iterations: {message}")]
    SolverDiverged {
        wavenumber: f64,
        iterations: usize,
        message: String,
    },

    #[error("Dispersion solver returned a non-finite root at k={wavenumber}: {re} + {im}i")]
    NonFiniteRoot { wavenumber: f64, re: f64, im: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Es1dResult<T> = Result<T, Es1dError>;
