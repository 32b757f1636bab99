//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature,
//! velocity, power). This module provides extensions that are useful for
//! convection modeling but aren't included in [`uom`]: a quantity alias for
//! the convective heat-transfer coefficient and the
//! [`TemperatureDifference`] trait for subtracting absolute temperatures.
//!
//! [`uom`] distinguishes [`ThermodynamicTemperature`] (absolute) from
//! [`TemperatureInterval`] (difference), and does not allow subtracting two
//! absolute temperatures into an interval directly. The
//! [`minus`](TemperatureDifference::minus) method fills that gap:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use convect::support::units::TemperatureDifference;
//!
//! let wall = ThermodynamicTemperature::new::<kelvin>(350.0);
//! let inlet = ThermodynamicTemperature::new::<kelvin>(300.0);
//! let delta_t = wall.minus(inlet);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
//! [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature

mod quantities;
mod temperature_difference;

pub use quantities::HeatTransferCoefficient;
pub use temperature_difference::TemperatureDifference;
