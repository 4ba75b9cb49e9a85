//! Constants for rotortune Core
//!
//! Numeric limits, defaults and heuristic coefficients used across the
//! engine. Each constant carries its unit in the name.
//!
//! ## Organization
//!
//! - **Airframe**: input ranges, weight-class thresholds, request defaults
//! - **Tuning**: yaw derivation factor for shared PID triples
//! - **Power**: thrust and battery-runtime estimation coefficients

/// Airframe input ranges, weight classes and request defaults.
pub mod airframe;

/// Tuning derivation constants.
pub mod tuning;

/// Thrust and battery estimation coefficients.
pub mod power;

// Re-export commonly used constants for convenience
pub use airframe::{
    FRAME_SIZE_MIN_IN, FRAME_SIZE_MAX_IN, WEIGHT_MIN_G, WEIGHT_MAX_G,
    PITCH_MIN_IN, PITCH_MAX_IN, SUPPORTED_BLADE_COUNTS,
};

pub use tuning::{YAW_DETUNE_NUMERATOR, YAW_DETUNE_DENOMINATOR};
