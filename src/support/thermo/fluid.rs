//! Canonical fluid identifiers.
//!
//! Each fluid is a simple unit-like type carrying its built-in
//! [`PropertyTable`](super::PropertyTable) through the
//! [`TabulatedFluid`](super::TabulatedFluid) trait. The [`Fluid`] enum
//! selects among them at runtime, which is the form a calculator front end
//! (CLI flag, form field) naturally produces.

mod air;
mod water;

pub use air::Air;
pub use water::Water;

use super::{PropertyTable, TabulatedFluid};

/// A working fluid selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fluid {
    Air,
    Water,
}

impl Fluid {
    /// Returns the fluid's built-in property table.
    #[must_use]
    pub fn table(self) -> PropertyTable {
        match self {
            Self::Air => Air::table(),
            Self::Water => Water::table(),
        }
    }
}
