//! Forced-convection heat-transfer calculator.
//!
//! Given a [`Geometry`], a working fluid, [`BoundaryConditions`], and a
//! [`ConvectionMode`], [`solve`] resolves fluid properties at the film
//! temperature, forms the Reynolds number from the hydraulic diameter,
//! classifies the flow regime, selects the appropriate Nusselt correlation,
//! and returns the convective coefficient, surface area, and heat-transfer
//! rate as a single [`Results`] value.
//!
//! # Example
//!
//! The classic heated-duct case: air at 300 K entering a 5 cm circular duct
//! with a 350 K wall at 2 m/s.
//!
//! ```
//! use convect::models::thermal::convection::{
//!     BoundaryConditions, ConvectionMode, Geometry, InvalidInput, solve,
//! };
//! use convect::support::flow::FlowRegime;
//! use convect::support::thermo::fluid::Fluid;
//! use uom::si::{
//!     f64::{Length, ThermodynamicTemperature, Velocity},
//!     length::meter,
//!     thermodynamic_temperature::kelvin,
//!     velocity::meter_per_second,
//! };
//!
//! fn main() -> Result<(), InvalidInput> {
//!     let results = solve(
//!         Geometry::Circular {
//!             diameter: Length::new::<meter>(0.05),
//!         },
//!         Fluid::Air,
//!         BoundaryConditions {
//!             inlet_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
//!             wall_temperature: ThermodynamicTemperature::new::<kelvin>(350.0),
//!             velocity: Velocity::new::<meter_per_second>(2.0),
//!             length: Length::new::<meter>(1.0),
//!         },
//!         ConvectionMode::Internal,
//!     )?;
//!
//!     assert_eq!(results.regime, FlowRegime::Turbulent);
//!     println!("{results}");
//!     Ok(())
//! }
//! ```

mod error;
mod input;
mod results;
mod solve;

pub use error::InvalidInput;
pub use input::{BoundaryConditions, ConvectionMode, Geometry};
pub use results::Results;
pub use solve::{solve, solve_with_table};
