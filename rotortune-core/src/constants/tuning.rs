//! Tuning Derivation Constants

/// Yaw P and I are detuned to 6/10 of the shared roll/pitch value.
///
/// Expressed as a ratio so `floor(gain * 0.6)` is computed exactly in
/// integer arithmetic.
pub const YAW_DETUNE_NUMERATOR: u32 = 6;

/// Denominator of the yaw detune ratio.
pub const YAW_DETUNE_DENOMINATOR: u32 = 10;

/// Yaw D term when derived from a shared triple.
pub const YAW_DERIVED_D: u16 = 0;
