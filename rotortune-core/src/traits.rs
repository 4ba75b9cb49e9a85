//! Core traits for input checks
//!
//! Keep them simple - every check is a pure function of its inputs.

use crate::validators::ValidationReport;

/// Input check - implement this for each group of related inputs
pub trait Validator {
    /// The inputs this validator inspects
    type Value: ?Sized;

    /// Record every problem found in `value` into `report`
    ///
    /// Checks never fail the request; they only add warnings.
    fn validate(&self, value: &Self::Value, report: &mut ValidationReport);
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
