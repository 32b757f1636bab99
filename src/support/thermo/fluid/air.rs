use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MassDensity, ThermalConductivity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::flow::Prandtl;
use crate::support::thermo::{FluidProperties, PropertyTable, TabulatedFluid};

/// Canonical identifier for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl TabulatedFluid for Air {
    fn table() -> PropertyTable {
        PropertyTable::new(
            ThermodynamicTemperature::new::<kelvin>(350.0),
            FluidProperties {
                density: MassDensity::new::<kilogram_per_cubic_meter>(1.2),
                viscosity: DynamicViscosity::new::<pascal_second>(1.8e-5),
                thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.026),
                prandtl: Prandtl::new(0.7).expect("air Prandtl number is positive"),
            },
            FluidProperties {
                density: MassDensity::new::<kilogram_per_cubic_meter>(1.0),
                viscosity: DynamicViscosity::new::<pascal_second>(2.0e-5),
                thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.03),
                prandtl: Prandtl::new(0.7).expect("air Prandtl number is positive"),
            },
        )
    }
}
