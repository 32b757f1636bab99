use uom::si::f64::{DynamicViscosity, MassDensity, ThermalConductivity, ThermodynamicTemperature};

use crate::support::flow::Prandtl;

/// Transport properties of a fluid at some reference temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    pub thermal_conductivity: ThermalConductivity,
    pub prandtl: Prandtl,
}

/// A two-bucket fluid property table keyed by a threshold temperature.
///
/// Temperatures strictly below the threshold resolve to the `below`
/// property set; the threshold itself and everything above it resolve to
/// `above`. The buckets are coarse on purpose: each one represents the
/// fluid over a wide temperature band, matching the accuracy of the
/// correlations that consume them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyTable {
    pub threshold: ThermodynamicTemperature,
    pub below: FluidProperties,
    pub above: FluidProperties,
}

impl PropertyTable {
    /// Builds a table from its threshold and the two property buckets.
    #[must_use]
    pub fn new(
        threshold: ThermodynamicTemperature,
        below: FluidProperties,
        above: FluidProperties,
    ) -> Self {
        Self {
            threshold,
            below,
            above,
        }
    }

    /// Resolves the property bucket for the given temperature.
    #[must_use]
    pub fn properties_at(&self, temperature: ThermodynamicTemperature) -> &FluidProperties {
        if temperature < self.threshold {
            &self.below
        } else {
            &self.above
        }
    }
}

/// Fluids that provide a built-in [`PropertyTable`].
pub trait TabulatedFluid {
    /// Returns the fluid's property table.
    fn table() -> PropertyTable;
}
