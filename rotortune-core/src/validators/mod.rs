//! Input Plausibility Checks
//!
//! ## Overview
//!
//! Before a suggestion is shown, the resolved inputs are checked against
//! simple plausibility ranges for hobby multirotors. Every problem becomes a
//! warning in a [`ValidationReport`]; nothing here blocks a request or changes
//! the classification.
//!
//! | check | accepted |
//! |---|---|
//! | frame size | 1.0 – 10.0 in |
//! | weight | (0, 3000] g |
//! | propeller size | ≤ frame size |
//! | pitch | 2.0 – 6.5 in |
//! | blades | 2, 3 or 4 |
//!
//! Non-finite values (NaN, infinity) are reported as
//! [`InputError::InvalidValue`] instead of a range violation.
//!
//! ## Usage Example
//!
//! ```rust
//! use rotortune_core::{apply_preset, DroneInputs};
//! use rotortune_core::validators::validate_inputs;
//!
//! let inputs = apply_preset(None, &DroneInputs {
//!     size: Some(5.0),
//!     weight: Some(650.0),
//!     prop_size: Some(6.0),
//!     ..DroneInputs::default()
//! });
//!
//! let report = validate_inputs(&inputs);
//! assert_eq!(report.len(), 1); // propeller bigger than the frame
//! ```
//!
//! ## Customization
//!
//! The validators carry their limits, so a caller with unusual builds can
//! widen them:
//!
//! ```rust
//! use rotortune_core::validators::AirframeValidator;
//!
//! let x_class = AirframeValidator::new_with_limits(1.0, 15.0, 8000.0);
//! ```

mod airframe;
mod propeller;
pub mod utils;

pub use airframe::AirframeValidator;
pub use propeller::PropellerValidator;

use heapless::Vec;

use crate::errors::InputError;
use crate::presets::EffectiveInputs;
use crate::traits::Validator;

/// Most warnings a single request can produce
pub const MAX_INPUT_WARNINGS: usize = 8;

/// Warnings collected for one request, in check order
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationReport {
    warnings: Vec<InputError, MAX_INPUT_WARNINGS>,
}

impl ValidationReport {
    /// Create new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning; extra warnings past the capacity are dropped
    pub fn add(&mut self, warning: InputError) {
        if self.warnings.push(warning).is_err() {
            log_warn!("validation report full, dropping: {}", warning);
        }
    }

    /// Record the error of a failed check, if any
    pub fn record(&mut self, result: Result<(), InputError>) {
        if let Err(warning) = result {
            self.add(warning);
        }
    }

    /// True when no check complained
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of warnings
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// True when there are no warnings
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Warnings in check order
    pub fn warnings(&self) -> &[InputError] {
        &self.warnings
    }
}

/// Run the default airframe and propeller checks
pub fn validate_inputs(inputs: &EffectiveInputs) -> ValidationReport {
    let mut report = ValidationReport::new();
    AirframeValidator::default().validate(inputs, &mut report);
    PropellerValidator::default().validate(inputs, &mut report);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InputField;
    use crate::presets::{apply_preset, DroneInputs};

    fn inputs(size: f32, weight: f32, prop: f32, pitch: f32, blades: u8) -> EffectiveInputs {
        apply_preset(
            None,
            &DroneInputs {
                size: Some(size),
                weight: Some(weight),
                prop_size: Some(prop),
                pitch: Some(pitch),
                blades: Some(blades),
                ..DroneInputs::default()
            },
        )
    }

    #[test]
    fn typical_build_is_clean() {
        assert!(validate_inputs(&inputs(5.0, 750.0, 5.0, 4.0, 3)).is_clean());
        assert!(validate_inputs(&inputs(10.0, 3000.0, 10.0, 6.5, 2)).is_clean());
        assert!(validate_inputs(&inputs(1.0, 0.1, 1.0, 2.0, 4)).is_clean());
    }

    #[test]
    fn every_check_reports_in_order() {
        let report = validate_inputs(&inputs(12.0, 0.0, 13.0, 7.0, 5));
        let warnings = report.warnings();
        assert_eq!(warnings.len(), 5);
        assert!(matches!(warnings[0], InputError::OutOfRange { field: InputField::Size, .. }));
        assert!(matches!(warnings[1], InputError::OutOfRange { field: InputField::Weight, .. }));
        assert!(matches!(warnings[2], InputError::PropellerTooLarge { .. }));
        assert!(matches!(warnings[3], InputError::OutOfRange { field: InputField::Pitch, .. }));
        assert_eq!(warnings[4], InputError::UnsupportedBladeCount { blades: 5 });
    }

    #[test]
    fn report_drops_past_capacity() {
        let mut report = ValidationReport::new();
        for blades in 0..(MAX_INPUT_WARNINGS as u8 + 3) {
            report.add(InputError::UnsupportedBladeCount { blades });
        }
        assert_eq!(report.len(), MAX_INPUT_WARNINGS);
        assert_eq!(report.warnings()[0], InputError::UnsupportedBladeCount { blades: 0 });
    }
}
