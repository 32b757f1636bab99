use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::{f64::Ratio, ratio::ratio};

/// The Prandtl number of a fluid.
///
/// The Prandtl number is the dimensionless ratio of momentum to thermal
/// diffusivity. It is a fluid property, independent of the flow, and must be
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Prandtl(Constrained<Ratio, StrictlyPositive>);

impl Prandtl {
    /// Create a [`Prandtl`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`Prandtl`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }
}

impl Deref for Prandtl {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
