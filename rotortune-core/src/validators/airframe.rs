//! Airframe validator
//!
//! Checks frame size and all-up weight against plausibility limits.

use crate::{
    constants::airframe::{FRAME_SIZE_MAX_IN, FRAME_SIZE_MIN_IN, WEIGHT_MAX_G, WEIGHT_MIN_G},
    errors::InputField,
    presets::EffectiveInputs,
    traits::Validator,
};

use super::{utils, ValidationReport};

/// Frame size and weight checks
#[derive(Debug, Clone)]
pub struct AirframeValidator {
    /// Smallest frame size (inches)
    min_size_in: f32,

    /// Largest frame size (inches)
    max_size_in: f32,

    /// Heaviest build (grams); the lower bound is always exclusive zero
    max_weight_g: f32,
}

impl Default for AirframeValidator {
    fn default() -> Self {
        Self {
            min_size_in: FRAME_SIZE_MIN_IN,
            max_size_in: FRAME_SIZE_MAX_IN,
            max_weight_g: WEIGHT_MAX_G,
        }
    }
}

impl AirframeValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min_size_in: f32, max_size_in: f32, max_weight_g: f32) -> Self {
        let (min_size_in, max_size_in) = if min_size_in > max_size_in {
            (max_size_in, min_size_in)
        } else {
            (min_size_in, max_size_in)
        };

        Self {
            min_size_in,
            max_size_in,
            max_weight_g: max_weight_g.abs(),
        }
    }
}

impl Validator for AirframeValidator {
    type Value = EffectiveInputs;

    fn validate(&self, inputs: &EffectiveInputs, report: &mut ValidationReport) {
        report.record(utils::check_range(
            InputField::Size,
            inputs.size,
            self.min_size_in,
            self.max_size_in,
        ));

        report.record(utils::check_range_exclusive_min(
            InputField::Weight,
            inputs.weight,
            WEIGHT_MIN_G,
            self.max_weight_g,
        ));
    }
}
