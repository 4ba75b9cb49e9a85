//! Common check helpers shared by the validators

use crate::{
    errors::{InputError, InputField, ValidationResult},
    traits::Validatable,
};

/// Check that `value` lies within `[min, max]`
pub fn check_range(field: InputField, value: f32, min: f32, max: f32) -> ValidationResult<()> {
    check_finite(field, value)?;
    if value < min || value > max {
        Err(InputError::OutOfRange { field, value, min, max })
    } else {
        Ok(())
    }
}

/// Check that `value` lies within `(min, max]`
pub fn check_range_exclusive_min(field: InputField, value: f32, min: f32, max: f32) -> ValidationResult<()> {
    check_finite(field, value)?;
    if value <= min || value > max {
        Err(InputError::OutOfRange { field, value, min, max })
    } else {
        Ok(())
    }
}

/// Reject NaN and infinities
pub fn check_finite(field: InputField, value: f32) -> ValidationResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(InputError::InvalidValue { field })
    }
}
