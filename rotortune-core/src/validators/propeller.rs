//! Propeller validator
//!
//! Checks propeller diameter against the frame, pitch range and blade count.

use crate::{
    constants::airframe::{PITCH_MAX_IN, PITCH_MIN_IN, SUPPORTED_BLADE_COUNTS},
    errors::{InputError, InputField},
    presets::EffectiveInputs,
    traits::Validator,
};

use super::{utils, ValidationReport};

/// Propeller geometry checks
#[derive(Debug, Clone)]
pub struct PropellerValidator {
    /// Lowest pitch (inches)
    min_pitch_in: f32,

    /// Highest pitch (inches)
    max_pitch_in: f32,
}

impl Default for PropellerValidator {
    fn default() -> Self {
        Self {
            min_pitch_in: PITCH_MIN_IN,
            max_pitch_in: PITCH_MAX_IN,
        }
    }
}

impl PropellerValidator {
    /// Create validator with a custom pitch range
    pub fn new_with_pitch_range(min_pitch_in: f32, max_pitch_in: f32) -> Self {
        Self {
            min_pitch_in: min_pitch_in.min(max_pitch_in),
            max_pitch_in: max_pitch_in.max(min_pitch_in),
        }
    }
}

impl Validator for PropellerValidator {
    type Value = EffectiveInputs;

    fn validate(&self, inputs: &EffectiveInputs, report: &mut ValidationReport) {
        match utils::check_finite(InputField::PropSize, inputs.prop_size) {
            // A non-finite frame size is already reported by the airframe check
            Ok(()) if inputs.prop_size > inputs.size => report.add(InputError::PropellerTooLarge {
                prop_size: inputs.prop_size,
                frame_size: inputs.size,
            }),
            Ok(()) => {}
            Err(err) => report.add(err),
        }

        report.record(utils::check_range(
            InputField::Pitch,
            inputs.pitch,
            self.min_pitch_in,
            self.max_pitch_in,
        ));

        if !SUPPORTED_BLADE_COUNTS.contains(&inputs.blades) {
            report.add(InputError::UnsupportedBladeCount { blades: inputs.blades });
        }
    }
}
