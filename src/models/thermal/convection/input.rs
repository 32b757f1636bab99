use std::{f64::consts::PI, fmt};

use uom::si::{
    f64::{Area, Length, ThermodynamicTemperature, Velocity},
    length::meter,
};

use super::error::InvalidInput;

/// Cross-section of the duct, or footprint of the external surface.
///
/// All dimensions must be strictly positive; [`solve`](super::solve)
/// rejects anything else with an [`InvalidInput`] naming the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Circular duct.
    Circular { diameter: Length },
    /// Square duct.
    Square { side: Length },
    /// Rectangular duct.
    Rectangular { width: Length, height: Length },
}

impl Geometry {
    /// The hydraulic diameter, `4·A / P`.
    ///
    /// For circular and square sections this collapses to the diameter and
    /// side length respectively.
    #[must_use]
    pub fn hydraulic_diameter(&self) -> Length {
        match *self {
            Self::Circular { diameter } => diameter,
            Self::Square { side } => side,
            Self::Rectangular { width, height } => {
                4.0 * (width * height) / (2.0 * (width + height))
            }
        }
    }

    pub(crate) fn validate(&self) -> Result<(), InvalidInput> {
        match self {
            Self::Circular { diameter } => InvalidInput::check_positive("diameter", diameter.value),
            Self::Square { side } => InvalidInput::check_positive("side", side.value),
            Self::Rectangular { width, height } => {
                InvalidInput::check_positive("width", width.value)?;
                InvalidInput::check_positive("height", height.value)
            }
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Circular { diameter } => {
                write!(f, "circular, diameter {:.4} m", diameter.get::<meter>())
            }
            Self::Square { side } => write!(f, "square, side {:.4} m", side.get::<meter>()),
            Self::Rectangular { width, height } => write!(
                f,
                "rectangular, {:.4} m × {:.4} m",
                width.get::<meter>(),
                height.get::<meter>()
            ),
        }
    }
}

/// Flow and temperature boundary conditions for one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryConditions {
    /// Fluid temperature at the inlet (or free stream).
    pub inlet_temperature: ThermodynamicTemperature,
    /// Wall surface temperature.
    pub wall_temperature: ThermodynamicTemperature,
    /// Mean flow velocity.
    pub velocity: Velocity,
    /// Heated length of the duct or plate.
    pub length: Length,
}

impl BoundaryConditions {
    pub(crate) fn validate(&self) -> Result<(), InvalidInput> {
        InvalidInput::check_positive("velocity", self.velocity.value)?;
        InvalidInput::check_positive("length", self.length.value)?;
        InvalidInput::check_positive("inlet_temperature", self.inlet_temperature.value)?;
        InvalidInput::check_positive("wall_temperature", self.wall_temperature.value)
    }
}

/// Whether the fluid flows inside the geometry or over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvectionMode {
    /// Flow inside a pipe or duct.
    Internal,
    /// Flow over an external surface.
    External,
}

impl ConvectionMode {
    /// The heat-exchange surface area.
    ///
    /// Internal flow wets the full perimeter (`π·Dh·L`); external flow
    /// exchanges over the swept footprint (`Dh·L`).
    #[must_use]
    pub fn surface_area(self, hydraulic_diameter: Length, length: Length) -> Area {
        match self {
            Self::Internal => PI * hydraulic_diameter * length,
            Self::External => hydraulic_diameter * length,
        }
    }
}

impl fmt::Display for ConvectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Internal => "internal",
            Self::External => "external",
        })
    }
}
