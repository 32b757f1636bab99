//! Heated circular duct carrying air.
//!
//! Run with `cargo run --example duct_air_heating`.

use convect::models::thermal::convection::{
    BoundaryConditions, ConvectionMode, Geometry, InvalidInput, solve,
};
use convect::support::thermo::fluid::Fluid;
use uom::si::{
    f64::{Length, ThermodynamicTemperature, Velocity},
    length::meter,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

fn main() -> Result<(), InvalidInput> {
    let results = solve(
        Geometry::Circular {
            diameter: Length::new::<meter>(0.05),
        },
        Fluid::Air,
        BoundaryConditions {
            inlet_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
            wall_temperature: ThermodynamicTemperature::new::<kelvin>(350.0),
            velocity: Velocity::new::<meter_per_second>(2.0),
            length: Length::new::<meter>(1.0),
        },
        ConvectionMode::Internal,
    )?;

    println!("{results}");
    Ok(())
}
