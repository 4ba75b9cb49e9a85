//! Airframe Input Ranges and Defaults
//!
//! Limits used by the input validators and descriptive metrics. These are
//! plausibility bounds for hobby multirotors, not physical limits: values
//! outside them produce warnings, never rejections.

// ===== FRAME =====

/// Smallest frame size accepted without a warning (inches).
pub const FRAME_SIZE_MIN_IN: f32 = 1.0;

/// Largest frame size accepted without a warning (inches).
///
/// The bundled catalogs cover 2.0 to 10.0 inches.
pub const FRAME_SIZE_MAX_IN: f32 = 10.0;

/// Lower weight bound (grams, exclusive).
pub const WEIGHT_MIN_G: f32 = 0.0;

/// Upper weight bound (grams, inclusive).
pub const WEIGHT_MAX_G: f32 = 3000.0;

// ===== PROPELLER =====

/// Lowest common propeller pitch (inches).
pub const PITCH_MIN_IN: f32 = 2.0;

/// Highest common propeller pitch (inches).
pub const PITCH_MAX_IN: f32 = 6.5;

/// Blade counts found on multirotor propellers.
pub const SUPPORTED_BLADE_COUNTS: [u8; 3] = [2, 3, 4];

// ===== WEIGHT CLASSES =====

/// Frames at or above this size get a weight class (inches).
///
/// Smaller frames vary too much in build style for a fixed threshold.
pub const WEIGHT_CLASS_MIN_SIZE_IN: f32 = 5.0;

/// Below this weight a 5"+ build counts as light (grams).
pub const LIGHT_BUILD_MAX_G: f32 = 650.0;

/// Up to and including this weight a 5"+ build counts as medium (grams).
pub const MEDIUM_BUILD_MAX_G: f32 = 900.0;

// ===== REQUEST DEFAULTS =====
// Used when neither a preset nor the caller supplies a field.

/// Default frame size (inches).
pub const DEFAULT_SIZE_IN: f32 = 5.0;

/// Default weight (grams).
///
/// Same fallback the input form posts when the weight field is blank; it
/// passes every class weight ceiling.
pub const DEFAULT_WEIGHT_G: f32 = 1.0;

/// Default battery description.
pub const DEFAULT_BATTERY: &str = "4S";

/// Default propeller pitch (inches).
pub const DEFAULT_PITCH_IN: f32 = 4.0;

/// Default propeller blade count.
pub const DEFAULT_BLADES: u8 = 2;

/// Default flight style.
pub const DEFAULT_STYLE: &str = "long_range";
