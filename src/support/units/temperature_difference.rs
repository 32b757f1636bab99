use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// This trait provides a [`minus`](Self::minus) method that subtracts two
/// [`ThermodynamicTemperature`] values (absolute temperatures) and returns a
/// [`TemperatureInterval`] (temperature difference).
///
/// This extension is currently needed because [`uom`] does not provide the
/// subtraction directly. See
/// [iliekturtles/uom#380](https://github.com/iliekturtles/uom/issues/380)
/// for background.
///
/// [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
/// [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
