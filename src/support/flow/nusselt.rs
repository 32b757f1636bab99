use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
};

use super::{Prandtl, Reynolds, reynolds::RE_LAMINAR_MAX};

/// Fully-developed laminar pipe flow with a constant wall temperature.
const NU_LAMINAR_PIPE: f64 = 3.66;

/// Lower bound for the fully-turbulent Dittus-Boelter correlation.
const RE_FULLY_TURBULENT: f64 = 10_000.0;

/// Laminar-to-turbulent transition for flow over a flat plate.
const RE_PLATE_TRANSITION: f64 = 5.0e5;

/// Whether the wall heats or cools the fluid.
///
/// The Dittus-Boelter correlation uses a larger Prandtl exponent when the
/// fluid is being heated, so the wall-to-fluid temperature gradient selects
/// the exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallExchange {
    /// The wall is hotter than the fluid.
    Heating,
    /// The wall is at or below the fluid temperature.
    Cooling,
}

impl WallExchange {
    /// Classifies the exchange from the wall and fluid inlet temperatures.
    #[must_use]
    pub fn from_temperatures(
        wall: ThermodynamicTemperature,
        inlet: ThermodynamicTemperature,
    ) -> Self {
        if wall > inlet {
            Self::Heating
        } else {
            Self::Cooling
        }
    }

    /// The Dittus-Boelter Prandtl exponent for this exchange.
    fn prandtl_exponent(self) -> f64 {
        match self {
            Self::Heating => 0.4,
            Self::Cooling => 0.3,
        }
    }
}

/// The Nusselt number of a convective flow.
///
/// The Nusselt number is the dimensionless ratio of convective to conductive
/// heat transfer across a fluid layer. Multiplying it by the fluid's thermal
/// conductivity over the characteristic length yields the convective
/// heat-transfer coefficient.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Nusselt(Constrained<Ratio, StrictlyPositive>);

impl Nusselt {
    /// Create a [`Nusselt`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`Nusselt`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Correlation for internal (pipe or duct) flow.
    ///
    /// - `Re < 2300`: constant `Nu = 3.66`, fully-developed laminar flow
    ///   with a constant wall temperature.
    /// - `Re > 10000`: Dittus-Boelter, `Nu = 0.023·Re^0.8·Pr^n`, with
    ///   `n` selected by `exchange`.
    /// - otherwise: `Nu = 0.021·Re^0.8·Pr^0.4`, a transitional fit of the
    ///   same form.
    #[must_use]
    pub fn internal(reynolds: Reynolds, prandtl: Prandtl, exchange: WallExchange) -> Self {
        let re = reynolds.get::<ratio>();
        let pr = prandtl.get::<ratio>();

        let nu = if re < RE_LAMINAR_MAX {
            NU_LAMINAR_PIPE
        } else if re > RE_FULLY_TURBULENT {
            0.023 * re.powf(0.8) * pr.powf(exchange.prandtl_exponent())
        } else {
            0.021 * re.powf(0.8) * pr.powf(0.4)
        };

        Self::new(nu).expect("correlations yield positive Nusselt numbers for positive Re and Pr")
    }

    /// Correlation for external flow over a flat surface.
    ///
    /// - `Re < 5e5`: laminar boundary layer, `Nu = 0.664·Re^0.5·Pr^(1/3)`.
    /// - otherwise: turbulent boundary layer, `Nu = 0.037·Re^0.8·Pr^(1/3)`.
    #[must_use]
    pub fn external(reynolds: Reynolds, prandtl: Prandtl) -> Self {
        let re = reynolds.get::<ratio>();
        let pr = prandtl.get::<ratio>();

        let nu = if re < RE_PLATE_TRANSITION {
            0.664 * re.sqrt() * pr.cbrt()
        } else {
            0.037 * re.powf(0.8) * pr.cbrt()
        };

        Self::new(nu).expect("correlations yield positive Nusselt numbers for positive Re and Pr")
    }
}

impl Deref for Nusselt {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
