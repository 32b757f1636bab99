use std::fmt;

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Power, TemperatureInterval, ThermodynamicTemperature},
    length::meter,
    power::watt,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    flow::{FlowRegime, HeatFlow, Nusselt, Reynolds},
    thermo::FluidProperties,
    units::HeatTransferCoefficient,
};

use super::input::{ConvectionMode, Geometry};

/// Everything resolved by one convection calculation.
///
/// The [`Display`](fmt::Display) implementation renders the full report the
/// way a calculator front end would print it, one labeled value per line.
#[derive(Debug, Clone, Copy)]
pub struct Results {
    /// The geometry the calculation was run for.
    pub geometry: Geometry,
    /// Internal or external convection.
    pub mode: ConvectionMode,
    /// Mean of inlet and wall temperature, used for the property lookup.
    pub film_temperature: ThermodynamicTemperature,
    /// Fluid properties resolved at the film temperature.
    pub properties: FluidProperties,
    /// Characteristic length of the section.
    pub hydraulic_diameter: Length,
    /// Reynolds number of the flow.
    pub reynolds: Reynolds,
    /// Flow regime classified from the Reynolds number.
    pub regime: FlowRegime,
    /// Nusselt number from the selected correlation.
    pub nusselt: Nusselt,
    /// Convective heat-transfer coefficient, `h = Nu·k / Dh`.
    pub heat_transfer_coefficient: HeatTransferCoefficient,
    /// Heat-exchange surface area.
    pub surface_area: Area,
    /// Wall minus inlet temperature.
    pub delta_t: TemperatureInterval,
    /// Heat flow between wall and fluid.
    pub heat_flow: HeatFlow,
}

impl Results {
    /// The signed heat-transfer rate, `q = h·A·ΔT`.
    ///
    /// Positive when the fluid absorbs heat from the wall, negative when it
    /// rejects heat to the wall.
    #[must_use]
    pub fn heat_rate(&self) -> Power {
        self.heat_flow.signed()
    }
}

impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "geometry:                  {}", self.geometry)?;
        writeln!(f, "convection mode:           {}", self.mode)?;
        writeln!(f, "flow regime:               {}", self.regime)?;
        writeln!(
            f,
            "film temperature:          {:.1} K",
            self.film_temperature.get::<kelvin>()
        )?;
        writeln!(
            f,
            "hydraulic diameter:        {:.4} m",
            self.hydraulic_diameter.get::<meter>()
        )?;
        writeln!(
            f,
            "Reynolds number:           {:.0}",
            self.reynolds.get::<ratio>()
        )?;
        writeln!(
            f,
            "Prandtl number:            {:.3}",
            self.properties.prandtl.get::<ratio>()
        )?;
        writeln!(
            f,
            "Nusselt number:            {:.2}",
            self.nusselt.get::<ratio>()
        )?;
        writeln!(
            f,
            "heat transfer coefficient: {:.2} W/m²·K",
            self.heat_transfer_coefficient.value
        )?;
        writeln!(
            f,
            "surface area:              {:.4} m²",
            self.surface_area.get::<square_meter>()
        )?;
        writeln!(
            f,
            "temperature difference:    {:.1} K",
            self.delta_t.get::<delta_kelvin>()
        )?;
        write!(
            f,
            "heat transfer rate:        {:.2} W",
            self.heat_rate().get::<watt>()
        )
    }
}
