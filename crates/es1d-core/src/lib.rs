//! Kinetic closure for the 1D electrostatic plasma fluid model.
//!
//! Stage 1: dispersion roots and the frequency table
//! Stage 2: closure filters, Poisson and drive fields
//! Stage 3: density, velocity, energy and trapping steppers

pub mod ampere;
pub mod closure;
pub mod density;
pub mod dispersion;
pub mod driver;
pub mod energy;
pub mod frequency_table;
pub mod model;
pub mod poisson;
pub mod trapping;
pub mod velocity;
