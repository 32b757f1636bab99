use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MassDensity, ThermalConductivity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::flow::Prandtl;
use crate::support::thermo::{FluidProperties, PropertyTable, TabulatedFluid};

/// Canonical identifier for liquid water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl TabulatedFluid for Water {
    fn table() -> PropertyTable {
        PropertyTable::new(
            ThermodynamicTemperature::new::<kelvin>(310.0),
            FluidProperties {
                density: MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
                viscosity: DynamicViscosity::new::<pascal_second>(1.0e-3),
                thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.6),
                prandtl: Prandtl::new(7.0).expect("water Prandtl number is positive"),
            },
            FluidProperties {
                density: MassDensity::new::<kilogram_per_cubic_meter>(980.0),
                viscosity: DynamicViscosity::new::<pascal_second>(0.8e-3),
                thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.65),
                prandtl: Prandtl::new(5.0).expect("water Prandtl number is positive"),
            },
        )
    }
}
