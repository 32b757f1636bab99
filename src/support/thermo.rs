//! Fluid property modeling.
//!
//! Convection correlations need four transport properties: density, dynamic
//! viscosity, thermal conductivity, and the Prandtl number. This module
//! provides them through a deliberately coarse two-bucket
//! [`PropertyTable`]: one property set below a threshold temperature and
//! one above it, selected at the film temperature. This is not an equation
//! of state; it is the right level of fidelity for closed-form correlation
//! work, where the correlations themselves carry far more uncertainty than
//! the property lookup.
//!
//! Built-in tables are provided for [`fluid::Air`] and [`fluid::Water`].
//! Callers can construct their own [`PropertyTable`] to override them.

pub mod fluid;

mod properties;

pub use properties::{FluidProperties, PropertyTable, TabulatedFluid};
