//! Error Types for Input Checks and Catalog Construction
//!
//! ## Design Philosophy
//!
//! A tuning suggestion must degrade gracefully rather than block the user, so
//! request-time problems are never raised as failures:
//!
//! - Non-numeric classifier input becomes `Classification::Unclassified`
//! - An unknown class id yields an empty `TuningProfile`
//! - An unknown preset key means "no preset selected"
//! - An unrecognized style maps to the default style bucket
//!
//! Two error types remain:
//!
//! ### `InputError`
//! Non-fatal warnings about caller inputs (frame size out of range, propeller
//! larger than the frame, ...). Kept small and `Copy` so a request can collect
//! them into a bounded `heapless::Vec` without allocating.
//!
//! ### `CatalogError`
//! Violated catalog invariants (empty catalog, duplicate id, inverted range).
//! These can only happen while reference data is being built at startup.
//!
//! ```rust
//! use rotortune_core::{InputError, InputField};
//! use rotortune_core::validators::utils::check_range;
//!
//! match check_range(InputField::Pitch, 7.0, 2.0, 6.5) {
//!     Err(InputError::OutOfRange { field, .. }) => assert_eq!(field, InputField::Pitch),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use alloc::string::String;
use thiserror_no_std::Error;

/// Result type for input checks
pub type ValidationResult<T> = Result<T, InputError>;

/// Caller input a check or classification refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputField {
    /// Frame size in inches
    Size,
    /// All-up weight in grams
    Weight,
    /// Propeller diameter in inches
    PropSize,
    /// Propeller pitch in inches
    Pitch,
    /// Propeller blade count
    Blades,
}

impl InputField {
    /// Field name as used by callers
    pub fn name(&self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Weight => "weight",
            Self::PropSize => "prop_size",
            Self::Pitch => "pitch",
            Self::Blades => "blades",
        }
    }
}

impl core::fmt::Display for InputField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Input problems - reported as warnings, never fatal
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum InputError {
    /// Value outside the usual range for this field
    #[error("{field} {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Offending field
        field: InputField,
        /// Value supplied
        value: f32,
        /// Lowest accepted value
        min: f32,
        /// Highest accepted value
        max: f32,
    },

    /// Propeller is larger than the frame and will likely hit it
    #[error("propeller {prop_size}\" larger than {frame_size}\" frame")]
    PropellerTooLarge {
        /// Propeller diameter (inches)
        prop_size: f32,
        /// Frame size (inches)
        frame_size: f32,
    },

    /// Blade count other than 2, 3 or 4
    #[error("unusual blade count: {blades}")]
    UnsupportedBladeCount {
        /// Blade count supplied
        blades: u8,
    },

    /// Value is not a finite number (NaN, infinity, unparsable text)
    #[error("{field} is not a valid number")]
    InvalidValue {
        /// Offending field
        field: InputField,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for InputError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { field, value, min, max } =>
                defmt::write!(fmt, "{} {} outside [{}, {}]", field.name(), value, min, max),
            Self::PropellerTooLarge { prop_size, frame_size } =>
                defmt::write!(fmt, "Prop {} > frame {}", prop_size, frame_size),
            Self::UnsupportedBladeCount { blades } =>
                defmt::write!(fmt, "Blade count {}", blades),
            Self::InvalidValue { field } =>
                defmt::write!(fmt, "Invalid {}", field.name()),
        }
    }
}

/// Catalog invariant violations, raised while building reference data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A catalog needs at least one class for classification to be total
    #[error("catalog '{0}' has no classes")]
    Empty(String),

    /// Class ids must be unique within a catalog
    #[error("duplicate class id: {0}")]
    DuplicateClass(String),

    /// Size range is inverted, degenerate or not finite
    #[error("class {id}: invalid size range [{min}, {max}]")]
    InvalidRange {
        /// Class id
        id: String,
        /// Declared minimum size
        min: f32,
        /// Declared maximum size
        max: f32,
    },

    /// Weight ceiling must be a positive finite number of grams
    #[error("class {id}: invalid weight ceiling {max_weight}")]
    InvalidWeight {
        /// Class id
        id: String,
        /// Declared ceiling
        max_weight: f32,
    },

    /// Two presets share a key
    #[error("duplicate preset key: {0}")]
    DuplicatePreset(String),
}
