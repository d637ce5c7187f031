// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{DEFAULT_BACKGROUND_DENSITY, DEFAULT_GAMMA};
use crate::error::{Es1dError, Es1dResult};
use serde::{Deserialize, Serialize};

/// Top-level closure configuration as supplied by the driver program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosureConfig {
    pub grid: GridConfig,
    #[serde(default)]
    pub physics: PhysicsOptions,
    /// Active drive pulses. Their fields are summed.
    #[serde(default)]
    pub drivers: Vec<PulseDescriptor>,
    /// Neutralizing ion density subtracted before the Poisson solve.
    #[serde(default = "default_background_density")]
    pub background_density: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub nx: usize,
    pub xmin: f64,
    pub xmax: f64,
}

/// Kinetic-closure switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsOptions {
    /// Replace the fluid restoring force with the kinetic real frequency.
    #[serde(default)]
    pub kinetic_real_wepw: bool,
    /// Apply the tabulated Landau damping rate to the velocity.
    #[serde(default)]
    pub landau_damping: bool,
    /// Adiabatic index of the pressure equation.
    #[serde(default = "default_gamma")]
    pub gamma: f64,
}

/// External drive pulse: a sinusoid under tanh windows in time and space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseDescriptor {
    pub k0: f64,
    pub w0: f64,
    pub dw0: f64,
    pub a0: f64,
    pub t_c: f64,
    pub t_w: f64,
    pub t_r: f64,
    pub x_c: f64,
    pub x_w: f64,
    pub x_r: f64,
}

fn default_gamma() -> f64 {
    DEFAULT_GAMMA
}
fn default_background_density() -> f64 {
    DEFAULT_BACKGROUND_DENSITY
}

impl Default for PhysicsOptions {
    fn default() -> Self {
        PhysicsOptions {
            kinetic_real_wepw: false,
            landau_damping: false,
            gamma: default_gamma(),
        }
    }
}

impl PhysicsOptions {
    /// Both kinetic corrections enabled.
    pub fn kinetic(gamma: f64) -> Self {
        PhysicsOptions {
            kinetic_real_wepw: true,
            landau_damping: true,
            gamma,
        }
    }
}

impl PulseDescriptor {
    /// Time-window edges (t_L, t_R).
    pub fn time_edges(&self) -> (f64, f64) {
        (self.t_c - 0.5 * self.t_w, self.t_c + 0.5 * self.t_w)
    }

    /// Space-window edges (x_L, x_R).
    pub fn space_edges(&self) -> (f64, f64) {
        (self.x_c - 0.5 * self.x_w, self.x_c + 0.5 * self.x_w)
    }

    pub fn validate(&self) -> Es1dResult<()> {
        let scalars = [
            ("k0", self.k0),
            ("w0", self.w0),
            ("dw0", self.dw0),
            ("a0", self.a0),
            ("t_c", self.t_c),
            ("t_w", self.t_w),
            ("x_c", self.x_c),
            ("x_w", self.x_w),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(Es1dError::ConfigError(format!(
                    "pulse {name} must be finite, got {value}"
                )));
            }
        }
        for (name, rise) in [("t_r", self.t_r), ("x_r", self.x_r)] {
            if !rise.is_finite() || rise <= 0.0 {
                return Err(Es1dError::ConfigError(format!(
                    "pulse {name} must be finite and > 0, got {rise}"
                )));
            }
        }
        Ok(())
    }
}

impl ClosureConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> Es1dResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Es1dResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Es1dResult<()> {
        if self.grid.nx < 2 {
            return Err(Es1dError::ConfigError(format!(
                "grid nx must be >= 2, got {}",
                self.grid.nx
            )));
        }
        if !self.grid.xmin.is_finite()
            || !self.grid.xmax.is_finite()
            || self.grid.xmax <= self.grid.xmin
        {
            return Err(Es1dError::ConfigError(format!(
                "grid domain must be finite with xmax > xmin, got [{}, {}]",
                self.grid.xmin, self.grid.xmax
            )));
        }
        if !self.physics.gamma.is_finite() || self.physics.gamma <= 0.0 {
            return Err(Es1dError::ConfigError(format!(
                "gamma must be finite and > 0, got {}",
                self.physics.gamma
            )));
        }
        if !self.background_density.is_finite() {
            return Err(Es1dError::ConfigError(format!(
                "background_density must be finite, got {}",
                self.background_density
            )));
        }
        if self.grid.nx % 2 == 1 {
            log::warn!(
                "odd grid nx={} has no Nyquist bin; half spectrum length is {}",
                self.grid.nx,
                self.grid.nx / 2 + 1
            );
        }
        for pulse in &self.drivers {
            pulse.validate()?;
        }
        Ok(())
    }

    /// Build the periodic grid described by this config.
    pub fn create_grid(&self) -> crate::state::Grid1D {
        crate::state::Grid1D::new(self.grid.nx, self.grid.xmin, self.grid.xmax)
    }
}
