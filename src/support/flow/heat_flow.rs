use std::cmp::Ordering;

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};
use uom::{ConstZero, si::f64::Power};

/// Represents heat flow between a wall and the fluid.
///
/// This enum encodes flow direction relative to the fluid:
///
/// - `Absorbed`: The fluid gains heat from the wall.
/// - `Rejected`: The fluid loses heat to the wall.
/// - `None`: No heat flow occurs (wall and fluid are in equilibrium).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatFlow {
    /// Heat absorbed by the fluid.
    Absorbed(Constrained<Power, StrictlyPositive>),
    /// Heat rejected by the fluid to the wall.
    Rejected(Constrained<Power, StrictlyPositive>),
    /// No heat flow occurs.
    None,
}

impl HeatFlow {
    /// Creates a [`HeatFlow::Absorbed`] representing heat gained by the fluid.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `heat_rate` is not strictly positive.
    pub fn absorbed(heat_rate: Power) -> Result<Self, ConstraintError> {
        Ok(Self::Absorbed(Constrained::new(heat_rate)?))
    }

    /// Creates a [`HeatFlow::Rejected`] representing heat lost by the fluid.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `heat_rate` is not strictly positive.
    pub fn rejected(heat_rate: Power) -> Result<Self, ConstraintError> {
        Ok(Self::Rejected(Constrained::new(heat_rate)?))
    }

    /// Creates a [`HeatFlow`] from a signed heat rate.
    ///
    /// - Positive values indicate heat absorbed by the fluid.
    /// - Negative values indicate heat rejected to the wall.
    /// - Zero indicates no heat flow.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError::NotANumber`] if the value is `NaN`.
    pub fn from_signed(heat_rate: Power) -> Result<Self, ConstraintError> {
        match heat_rate.partial_cmp(&Power::ZERO) {
            Some(Ordering::Greater) => Self::absorbed(heat_rate),
            Some(Ordering::Less) => Self::rejected(-heat_rate),
            Some(Ordering::Equal) => Ok(Self::None),
            None => Err(ConstraintError::NotANumber),
        }
    }

    /// Returns the signed heat rate.
    ///
    /// - Positive for heat absorbed by the fluid.
    /// - Negative for heat rejected to the wall.
    /// - Zero if no heat flow.
    #[must_use]
    pub fn signed(&self) -> Power {
        match self {
            Self::Absorbed(heat_rate) => heat_rate.into_inner(),
            Self::Rejected(heat_rate) => -heat_rate.into_inner(),
            Self::None => Power::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::power::watt;

    #[test]
    fn from_signed_classifies_direction() {
        let absorbed = HeatFlow::from_signed(Power::new::<watt>(85.2)).unwrap();
        let rejected = HeatFlow::from_signed(Power::new::<watt>(-85.2)).unwrap();
        let none = HeatFlow::from_signed(Power::new::<watt>(0.0)).unwrap();

        assert!(matches!(absorbed, HeatFlow::Absorbed(_)));
        assert!(matches!(rejected, HeatFlow::Rejected(_)));
        assert!(matches!(none, HeatFlow::None));

        assert_relative_eq!(absorbed.signed().get::<watt>(), 85.2);
        assert_relative_eq!(rejected.signed().get::<watt>(), -85.2);
        assert_relative_eq!(none.signed().get::<watt>(), 0.0);
    }

    #[test]
    fn rejects_nan() {
        assert_eq!(
            HeatFlow::from_signed(Power::new::<watt>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn rejects_non_positive_magnitudes() {
        assert!(HeatFlow::absorbed(Power::new::<watt>(0.0)).is_err());
        assert!(HeatFlow::rejected(Power::new::<watt>(-1.0)).is_err());
    }
}
