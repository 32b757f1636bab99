use std::{fmt, ops::Deref};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::{
    f64::{DynamicViscosity, Length, MassDensity, Ratio, Velocity},
    ratio::ratio,
};

/// Upper bound of the laminar regime, internal-flow convention.
pub(crate) const RE_LAMINAR_MAX: f64 = 2300.0;

/// Upper bound of the transition regime, internal-flow convention.
pub(crate) const RE_TRANSITION_MAX: f64 = 4000.0;

/// The Reynolds number of a flow.
///
/// The Reynolds number is the dimensionless ratio of inertial to viscous
/// forces. It must be strictly positive: a flow with zero velocity has no
/// convective transport to analyze.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Reynolds(Constrained<Ratio, StrictlyPositive>);

impl Reynolds {
    /// Create a [`Reynolds`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`Reynolds`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`Reynolds`] from the state of a duct or boundary-layer flow
    /// using `Re = ρ·V·D / μ`.
    ///
    /// The characteristic length is the hydraulic diameter for internal flow
    /// and the streamwise dimension for external flow.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any operand makes the result non-positive or `NaN`.
    pub fn from_duct_flow(
        density: MassDensity,
        velocity: Velocity,
        characteristic_length: Length,
        viscosity: DynamicViscosity,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(density * velocity * characteristic_length / viscosity)
    }

    /// Classifies the flow regime using the internal-flow convention:
    /// laminar up to 2300, transitional up to 4000, turbulent above.
    #[must_use]
    pub fn regime(&self) -> FlowRegime {
        let re = self.get::<ratio>();
        if re <= RE_LAMINAR_MAX {
            FlowRegime::Laminar
        } else if re <= RE_TRANSITION_MAX {
            FlowRegime::Transition
        } else {
            FlowRegime::Turbulent
        }
    }
}

impl Deref for Reynolds {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// The regime of a flow, classified by Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Transition,
    Turbulent,
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Laminar => "laminar",
            Self::Transition => "transition",
            Self::Turbulent => "turbulent",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        dynamic_viscosity::pascal_second, length::meter, mass_density::kilogram_per_cubic_meter,
        velocity::meter_per_second,
    };

    fn duct_reynolds(density: f64, velocity: f64, diameter: f64, viscosity: f64) -> Reynolds {
        Reynolds::from_duct_flow(
            MassDensity::new::<kilogram_per_cubic_meter>(density),
            Velocity::new::<meter_per_second>(velocity),
            Length::new::<meter>(diameter),
            DynamicViscosity::new::<pascal_second>(viscosity),
        )
        .unwrap()
    }

    #[test]
    fn from_duct_flow() {
        let re = duct_reynolds(1.2, 2.0, 0.05, 1.8e-5);
        assert_relative_eq!(re.get::<ratio>(), 6666.666_666_666_667, max_relative = 1e-12);
    }

    #[test]
    fn monotonic_in_velocity_and_length_inverse_in_viscosity() {
        let base = duct_reynolds(1.2, 2.0, 0.05, 1.8e-5);

        assert!(duct_reynolds(1.2, 3.0, 0.05, 1.8e-5) > base);
        assert!(duct_reynolds(1.2, 2.0, 0.10, 1.8e-5) > base);
        assert!(duct_reynolds(1.2, 2.0, 0.05, 2.5e-5) < base);
    }

    #[test]
    fn regime_boundaries_are_exact() {
        assert_eq!(Reynolds::new(2300.0).unwrap().regime(), FlowRegime::Laminar);
        assert_eq!(
            Reynolds::new(2300.0001).unwrap().regime(),
            FlowRegime::Transition
        );
        assert_eq!(
            Reynolds::new(4000.0).unwrap().regime(),
            FlowRegime::Transition
        );
        assert_eq!(
            Reynolds::new(4000.0001).unwrap().regime(),
            FlowRegime::Turbulent
        );
    }

    #[test]
    fn rejects_stagnant_flow() {
        assert!(
            Reynolds::from_duct_flow(
                MassDensity::new::<kilogram_per_cubic_meter>(1.2),
                Velocity::new::<meter_per_second>(0.0),
                Length::new::<meter>(0.05),
                DynamicViscosity::new::<pascal_second>(1.8e-5),
            )
            .is_err()
        );
    }
}
