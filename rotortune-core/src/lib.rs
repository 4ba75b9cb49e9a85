//! Core tuning engine for rotortune
//!
//! Classifies a multirotor airframe (size, weight) into a drone class and
//! derives the baseline PID/filter profile stored for that class.
//! Everything here is a pure function of its inputs and of read-only
//! reference data built once at startup.
//!
//! ```no_run
//! use rotortune_core::{ClassCatalog, Classifier, TuningDeriver, style_tuning};
//!
//! # fn demo(catalog: &ClassCatalog) {
//! let classification = Classifier::new(catalog).classify(5.0, 750.0);
//! let baseline = TuningDeriver::new(catalog).derive_for(&classification);
//! let style = style_tuning("freestyle");
//! # let _ = (baseline, style);
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod advisor;
pub mod catalog;
pub mod classify;
pub mod constants;
pub mod errors;
pub mod metrics;
pub mod presets;
pub mod style;
pub mod traits;
pub mod tuning;
pub mod validators;

// Public API
pub use advisor::{AdvisorRequest, Analysis, TuningAdvisor};
pub use catalog::{Baseline, BaselinePid, ClassCatalog, ClassDefinition, ClassSummary, SizeRange};
pub use classify::{Classification, Classifier};
pub use errors::{CatalogError, InputError, InputField, ValidationResult};
pub use presets::{apply_preset, DroneInputs, EffectiveInputs, Preset, PresetRegistry};
pub use style::{style_tuning, FlightStyle, StyleSuggestion};
pub use traits::Validatable;
pub use tuning::{AxisGains, FilterProfile, PidGains, TuningDeriver, TuningProfile};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
