//! # Convect
//!
//! Convective heat-transfer correlations for internal duct flow and external
//! flow over a surface.
//!
//! Given a duct or surface geometry, a working fluid, and boundary
//! conditions, the crate resolves fluid properties at the film temperature,
//! classifies the flow regime, selects the appropriate Nusselt correlation,
//! and returns the convective coefficient, surface area, and heat-transfer
//! rate. Each calculation is a single pure function call with no shared
//! state.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific calculation entry points.
//! - [`support`]: Supporting utilities used by models.
//!
//! The calculator itself lives in [`models::thermal::convection`]. The
//! [`support`] modules (numeric constraints, dimensionless flow groups,
//! fluid property tables, and [`uom`] extensions) are part of the public API
//! because they're useful on their own, but their APIs are not stable and
//! may change as needed.

pub mod models;
pub mod support;
