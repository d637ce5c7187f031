// ─────────────────────────────────────────────────────────────────────
// SCPN ES1D Closure — Fluid Closure Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The full set of right-hand sides for one configuration.
//!
//! Builds the grid and the frequency table once, freezes every closure
//! filter, then evaluates all steppers against a single field snapshot.
//! Time integration belongs to the caller.

use crate::ampere::AmpereStepper;
use crate::density::DensityStepper;
use crate::dispersion::DispersionSolver;
use crate::driver::Driver;
use crate::energy::EnergyStepper;
use crate::frequency_table::FrequencyTable;
use crate::poisson::PoissonSolver;
use crate::trapping::ParticleTrapper;
use crate::velocity::VelocityStepper;
use es1d_types::config::ClosureConfig;
use es1d_types::error::Es1dResult;
use es1d_types::state::{FieldDerivatives, FieldSnapshot, Grid1D};
use ndarray::Array1;

#[derive(Debug, Clone)]
pub struct FluidClosure {
    config: ClosureConfig,
    grid: Grid1D,
    table: FrequencyTable,
    poisson: PoissonSolver,
    driver: Driver,
    density: DensityStepper,
    velocity: VelocityStepper,
    energy: EnergyStepper,
    trapping: ParticleTrapper,
    ampere: AmpereStepper,
}

impl FluidClosure {
    /// Validate `config`, build the frequency table with `solver`, then
    /// assemble the steppers.
    pub fn new<S: DispersionSolver + ?Sized>(config: ClosureConfig, solver: &S) -> Es1dResult<Self> {
        config.validate()?;
        let table = FrequencyTable::build_default(solver)?;
        Self::assemble(config, table)
    }

    /// Validate `config` and assemble around an already built table.
    pub fn with_table(config: ClosureConfig, table: FrequencyTable) -> Es1dResult<Self> {
        config.validate()?;
        Self::assemble(config, table)
    }

    /// `config` must already be validated.
    fn assemble(config: ClosureConfig, table: FrequencyTable) -> Es1dResult<Self> {
        let grid = config.create_grid();
        let physics = &config.physics;

        let velocity = VelocityStepper::new(&grid.kx, &grid.kxr, physics, &table)?;
        let trapping = ParticleTrapper::new(&grid.kx, &grid.kxr, &table)?;

        log::debug!(
            "fluid closure: nx={} on [{}, {}], kinetic_real_wepw={}, landau_damping={}, \
             gamma={}, {} driver(s)",
            grid.nx,
            grid.xmin,
            grid.xmax,
            physics.kinetic_real_wepw,
            physics.landau_damping,
            physics.gamma,
            config.drivers.len()
        );

        Ok(FluidClosure {
            poisson: PoissonSolver::new(&grid.kx),
            driver: Driver::new(grid.x.clone()),
            density: DensityStepper::new(&grid.kx),
            energy: EnergyStepper::new(&grid.kx, physics.gamma),
            ampere: AmpereStepper,
            velocity,
            trapping,
            table,
            grid,
            config,
        })
    }

    pub fn config(&self) -> &ClosureConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid1D {
        &self.grid
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn velocity(&self) -> &VelocityStepper {
        &self.velocity
    }

    pub fn trapping(&self) -> &ParticleTrapper {
        &self.trapping
    }

    /// Sum of all configured drive pulses at time `t`.
    pub fn drive_field(&self, t: f64) -> Array1<f64> {
        self.driver.total_field(&self.config.drivers, t)
    }

    /// Self-consistent field from the density perturbation plus the drive.
    pub fn electric_field(&self, n: &Array1<f64>, t: f64) -> Array1<f64> {
        let dn = n.mapv(|v| v - self.config.background_density);
        self.poisson.solve(&dn) + self.drive_field(t)
    }

    /// All four time derivatives from one snapshot and the field `e`.
    pub fn rhs(&self, snapshot: &FieldSnapshot, e: &Array1<f64>) -> FieldDerivatives {
        snapshot.assert_len(self.grid.nx);
        FieldDerivatives {
            dn: self.density.rhs(&snapshot.n, &snapshot.u),
            du: self.velocity.rhs(
                &snapshot.n,
                &snapshot.u,
                &snapshot.p_over_m,
                &snapshot.q_over_m_times_e,
                &snapshot.delta,
            ),
            dp_over_m: self.energy.rhs(&snapshot.u, &snapshot.p_over_m),
            ddelta: self.trapping.rhs(e, &snapshot.delta),
        }
    }

    /// Current density n·u.
    pub fn current(&self, snapshot: &FieldSnapshot) -> Array1<f64> {
        self.ampere.rhs(&snapshot.n, &snapshot.u)
    }
}
