use thiserror::Error;

use crate::support::constraint::{Constraint, ConstraintError, StrictlyPositive};

/// An input value that fails validation.
///
/// Raised synchronously before any calculation runs; the call either
/// returns a complete [`Results`](super::Results) or this error, never a
/// partial result. How to surface the failure (form message, CLI exit,
/// panic) is the caller's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid input for `{field}`: {source}")]
pub struct InvalidInput {
    /// Name of the offending input field.
    pub field: &'static str,
    /// The numeric constraint the value violated.
    pub source: ConstraintError,
}

impl InvalidInput {
    /// Checks that a raw value is strictly positive, naming the field on failure.
    pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<(), Self> {
        StrictlyPositive::check(&value).map_err(|source| Self { field, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_field() {
        let err = InvalidInput::check_positive("diameter", 0.0).unwrap_err();
        assert_eq!(err.field, "diameter");
        assert_eq!(err.source, ConstraintError::Zero);
        assert_eq!(err.to_string(), "invalid input for `diameter`: value must not be zero");
    }
}
