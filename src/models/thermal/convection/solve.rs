use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::{
    flow::{HeatFlow, Nusselt, Reynolds, WallExchange},
    thermo::{PropertyTable, fluid::Fluid},
    units::{HeatTransferCoefficient, TemperatureDifference},
};

use super::{
    error::InvalidInput,
    input::{BoundaryConditions, ConvectionMode, Geometry},
    results::Results,
};

/// Runs a convection calculation with a fluid's built-in property table.
///
/// # Errors
///
/// Returns [`InvalidInput`] if any geometry dimension, the velocity, the
/// length, or either temperature is non-positive or `NaN`.
pub fn solve(
    geometry: Geometry,
    fluid: Fluid,
    boundary: BoundaryConditions,
    mode: ConvectionMode,
) -> Result<Results, InvalidInput> {
    solve_with_table(geometry, &fluid.table(), boundary, mode)
}

/// Runs a convection calculation against a caller-supplied property table.
///
/// This is the override point for testing or for fluids outside the
/// built-in set; [`solve`] is a thin wrapper around it.
///
/// # Errors
///
/// Returns [`InvalidInput`] under the same conditions as [`solve`], and
/// additionally if the table's resolved property bucket contains a
/// non-positive or `NaN` density, viscosity, or thermal conductivity.
pub fn solve_with_table(
    geometry: Geometry,
    table: &PropertyTable,
    boundary: BoundaryConditions,
    mode: ConvectionMode,
) -> Result<Results, InvalidInput> {
    geometry.validate()?;
    boundary.validate()?;

    let film_temperature = ThermodynamicTemperature::new::<kelvin>(
        0.5 * (boundary.inlet_temperature.get::<kelvin>()
            + boundary.wall_temperature.get::<kelvin>()),
    );

    let properties = *table.properties_at(film_temperature);
    InvalidInput::check_positive("density", properties.density.value)?;
    InvalidInput::check_positive("viscosity", properties.viscosity.value)?;
    InvalidInput::check_positive(
        "thermal_conductivity",
        properties.thermal_conductivity.value,
    )?;

    let hydraulic_diameter = geometry.hydraulic_diameter();
    let reynolds = Reynolds::from_duct_flow(
        properties.density,
        boundary.velocity,
        hydraulic_diameter,
        properties.viscosity,
    )
    .expect("validated inputs yield a positive Reynolds number");

    let nusselt = match mode {
        ConvectionMode::Internal => Nusselt::internal(
            reynolds,
            properties.prandtl,
            WallExchange::from_temperatures(boundary.wall_temperature, boundary.inlet_temperature),
        ),
        ConvectionMode::External => Nusselt::external(reynolds, properties.prandtl),
    };

    let heat_transfer_coefficient: HeatTransferCoefficient =
        *nusselt * (properties.thermal_conductivity / hydraulic_diameter);
    let surface_area = mode.surface_area(hydraulic_diameter, boundary.length);
    let delta_t = boundary.wall_temperature.minus(boundary.inlet_temperature);
    let heat_flow = HeatFlow::from_signed(heat_transfer_coefficient * surface_area * delta_t)
        .expect("validated inputs yield a finite heat rate");

    Ok(Results {
        geometry,
        mode,
        film_temperature,
        properties,
        hydraulic_diameter,
        regime: reynolds.regime(),
        reynolds,
        nusselt,
        heat_transfer_coefficient,
        surface_area,
        delta_t,
        heat_flow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        dynamic_viscosity::pascal_second,
        f64::{DynamicViscosity, Length, MassDensity, ThermalConductivity, Velocity},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        power::watt,
        ratio::ratio,
        temperature_interval::kelvin as delta_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
        velocity::meter_per_second,
    };

    use crate::support::{
        flow::{FlowRegime, Prandtl},
        thermo::FluidProperties,
    };

    fn circular_duct() -> Geometry {
        Geometry::Circular {
            diameter: Length::new::<meter>(0.05),
        }
    }

    fn boundary(inlet_k: f64, wall_k: f64, velocity: f64, length: f64) -> BoundaryConditions {
        BoundaryConditions {
            inlet_temperature: ThermodynamicTemperature::new::<kelvin>(inlet_k),
            wall_temperature: ThermodynamicTemperature::new::<kelvin>(wall_k),
            velocity: Velocity::new::<meter_per_second>(velocity),
            length: Length::new::<meter>(length),
        }
    }

    #[test]
    fn heated_air_duct_reference_case() -> Result<(), InvalidInput> {
        let results = solve(
            circular_duct(),
            Fluid::Air,
            boundary(300.0, 350.0, 2.0, 1.0),
            ConvectionMode::Internal,
        )?;

        // Film temperature of 325 K resolves the low-temperature air bucket.
        assert_relative_eq!(results.film_temperature.get::<kelvin>(), 325.0);
        assert_relative_eq!(
            results.properties.density.get::<kilogram_per_cubic_meter>(),
            1.2
        );

        assert_relative_eq!(results.hydraulic_diameter.get::<meter>(), 0.05);
        assert_relative_eq!(results.reynolds.get::<ratio>(), 6666.67, max_relative = 1e-5);
        assert_eq!(results.regime, FlowRegime::Turbulent);

        // 2300 <= Re <= 10000 selects the transitional internal correlation.
        assert_relative_eq!(results.nusselt.get::<ratio>(), 20.86, max_relative = 1e-3);
        assert_relative_eq!(
            results.heat_transfer_coefficient.value,
            10.85,
            max_relative = 1e-3
        );
        assert_relative_eq!(
            results.surface_area.get::<square_meter>(),
            PI * 0.05,
            max_relative = 1e-12
        );
        assert_relative_eq!(results.delta_t.get::<delta_kelvin>(), 50.0);
        assert_relative_eq!(results.heat_rate().get::<watt>(), 85.21, max_relative = 1e-3);
        assert!(matches!(results.heat_flow, HeatFlow::Absorbed(_)));

        Ok(())
    }

    #[test]
    fn cooled_duct_rejects_heat() -> Result<(), InvalidInput> {
        let results = solve(
            circular_duct(),
            Fluid::Air,
            boundary(300.0, 280.0, 2.0, 1.0),
            ConvectionMode::Internal,
        )?;

        assert_relative_eq!(results.delta_t.get::<delta_kelvin>(), -20.0);
        assert!(matches!(results.heat_flow, HeatFlow::Rejected(_)));
        assert!(results.heat_rate().get::<watt>() < 0.0);

        Ok(())
    }

    #[test]
    fn warm_water_resolves_the_upper_bucket() -> Result<(), InvalidInput> {
        let results = solve(
            circular_duct(),
            Fluid::Water,
            boundary(300.0, 330.0, 0.1, 1.0),
            ConvectionMode::Internal,
        )?;

        // Film temperature of 315 K is at or above the 310 K threshold.
        assert_relative_eq!(
            results.properties.density.get::<kilogram_per_cubic_meter>(),
            980.0
        );
        assert_relative_eq!(results.properties.prandtl.get::<ratio>(), 5.0);

        // Re = 980 · 0.1 · 0.05 / 8e-4
        assert_relative_eq!(results.reynolds.get::<ratio>(), 6125.0, max_relative = 1e-12);
        assert_eq!(results.regime, FlowRegime::Turbulent);

        Ok(())
    }

    #[test]
    fn external_mode_uses_the_plate_correlation_and_footprint_area() -> Result<(), InvalidInput> {
        let results = solve(
            circular_duct(),
            Fluid::Air,
            boundary(300.0, 350.0, 2.0, 1.0),
            ConvectionMode::External,
        )?;

        let re = results.reynolds.get::<ratio>();
        assert!(re < 5.0e5);
        assert_relative_eq!(
            results.nusselt.get::<ratio>(),
            0.664 * re.sqrt() * 0.7_f64.cbrt(),
            max_relative = 1e-12
        );
        assert_relative_eq!(results.surface_area.get::<square_meter>(), 0.05);

        Ok(())
    }

    #[test]
    fn invalid_inputs_name_their_field() {
        let zero_diameter = Geometry::Circular {
            diameter: Length::new::<meter>(0.0),
        };
        let err = solve(
            zero_diameter,
            Fluid::Air,
            boundary(300.0, 350.0, 2.0, 1.0),
            ConvectionMode::Internal,
        )
        .unwrap_err();
        assert_eq!(err.field, "diameter");

        let err = solve(
            circular_duct(),
            Fluid::Air,
            boundary(300.0, 350.0, 0.0, 1.0),
            ConvectionMode::Internal,
        )
        .unwrap_err();
        assert_eq!(err.field, "velocity");

        let err = solve(
            circular_duct(),
            Fluid::Air,
            boundary(300.0, 350.0, 2.0, -1.0),
            ConvectionMode::Internal,
        )
        .unwrap_err();
        assert_eq!(err.field, "length");

        let err = solve(
            circular_duct(),
            Fluid::Air,
            boundary(0.0, 350.0, 2.0, 1.0),
            ConvectionMode::Internal,
        )
        .unwrap_err();
        assert_eq!(err.field, "inlet_temperature");
    }

    #[test]
    fn custom_table_is_validated_and_used() {
        let bucket = |density: f64| FluidProperties {
            density: MassDensity::new::<kilogram_per_cubic_meter>(density),
            viscosity: DynamicViscosity::new::<pascal_second>(1.0e-5),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.1),
            prandtl: Prandtl::new(1.0).unwrap(),
        };
        let table = PropertyTable::new(
            ThermodynamicTemperature::new::<kelvin>(400.0),
            bucket(2.0),
            bucket(0.0),
        );

        // Below the threshold the valid bucket is used.
        let results = solve_with_table(
            circular_duct(),
            &table,
            boundary(300.0, 350.0, 2.0, 1.0),
            ConvectionMode::Internal,
        )
        .unwrap();
        assert_relative_eq!(
            results.properties.density.get::<kilogram_per_cubic_meter>(),
            2.0
        );

        // Above it, the zero-density bucket is rejected by name.
        let err = solve_with_table(
            circular_duct(),
            &table,
            boundary(400.0, 450.0, 2.0, 1.0),
            ConvectionMode::Internal,
        )
        .unwrap_err();
        assert_eq!(err.field, "density");
    }
}
