//! Flow analysis toolkit for forced convection.
//!
//! This module provides the dimensionless groups and closed-form
//! correlations used in convective heat-transfer calculations.
//!
//! # Overview
//!
//! A forced-convection problem is characterized by its Reynolds number,
//! which fixes the flow regime, and its Prandtl number, which captures the
//! fluid's momentum-to-thermal diffusivity ratio. Together they determine
//! the Nusselt number through an empirical correlation, and the Nusselt
//! number scales the conductive heat transfer into a convective
//! coefficient.
//!
//! This toolkit provides:
//!
//! - **Dimensionless groups**: [`Reynolds`], [`Prandtl`], [`Nusselt`]
//! - **Regime classification**: [`FlowRegime`]
//! - **Correlation selection**: [`Nusselt::internal`], [`Nusselt::external`],
//!   with the Dittus-Boelter exponent chosen by [`WallExchange`]
//! - **Heat flow direction**: [`HeatFlow`]
//!
//! # Example
//!
//! ```
//! use convect::support::constraint::ConstraintResult;
//! use convect::support::flow::{FlowRegime, Nusselt, Prandtl, Reynolds, WallExchange};
//! use uom::si::{
//!     f64::{DynamicViscosity, Length, MassDensity, Velocity},
//!     dynamic_viscosity::pascal_second,
//!     length::meter,
//!     mass_density::kilogram_per_cubic_meter,
//!     velocity::meter_per_second,
//! };
//!
//! fn main() -> ConstraintResult<()> {
//!     let reynolds = Reynolds::from_duct_flow(
//!         MassDensity::new::<kilogram_per_cubic_meter>(1.2),
//!         Velocity::new::<meter_per_second>(2.0),
//!         Length::new::<meter>(0.05),
//!         DynamicViscosity::new::<pascal_second>(1.8e-5),
//!     )?;
//!     assert_eq!(reynolds.regime(), FlowRegime::Turbulent);
//!
//!     let _nusselt = Nusselt::internal(reynolds, Prandtl::new(0.7)?, WallExchange::Heating);
//!
//!     Ok(())
//! }
//! ```

mod heat_flow;
mod nusselt;
mod prandtl;
mod reynolds;

pub use heat_flow::HeatFlow;
pub use nusselt::{Nusselt, WallExchange};
pub use prandtl::Prandtl;
pub use reynolds::{FlowRegime, Reynolds};
