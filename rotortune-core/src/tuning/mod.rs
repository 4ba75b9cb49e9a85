//! Baseline Tuning Profiles
//!
//! ## Overview
//!
//! A drone class stores its baseline PID in one of two shapes:
//!
//! - **Per-axis**: roll, pitch and yaw each carry their own `{p, i, d}`
//! - **Shared triple**: a single `{P, I, D}` applied to roll and pitch, with
//!   yaw derived from it
//!
//! Callers never see the storage shape. [`TuningDeriver`] always produces a
//! [`TuningProfile`] with explicit gains per axis and a filter block using one
//! vocabulary (`gyro_cutoff_hz`, `dterm_cutoff_hz`, `notch_stages`).
//!
//! ## Yaw Derivation
//!
//! Yaw on a multirotor is driven by motor torque differences rather than
//! thrust differences, so it tolerates far less D and needs less P and I:
//!
//! ```text
//! yaw.p = floor(P × 0.6)
//! yaw.i = floor(I × 0.6)
//! yaw.d = 0
//! ```
//!
//! ```rust
//! use rotortune_core::{AxisGains, PidGains};
//!
//! let gains = AxisGains::from_shared(PidGains::new(30, 30, 10));
//! assert_eq!(gains.yaw, PidGains::new(18, 18, 0));
//! assert_eq!(gains.roll, gains.pitch);
//! ```

mod deriver;
pub mod fields;

pub use deriver::TuningDeriver;
pub use fields::{Axis, FilterField, PidTerm};

use alloc::string::String;

use crate::constants::tuning::{YAW_DERIVED_D, YAW_DETUNE_DENOMINATOR, YAW_DETUNE_NUMERATOR};

/// Proportional / integral / derivative gains for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PidGains {
    /// Proportional gain
    pub p: u16,
    /// Integral gain
    pub i: u16,
    /// Derivative gain
    pub d: u16,
}

impl PidGains {
    /// Create gains from explicit values
    pub const fn new(p: u16, i: u16, d: u16) -> Self {
        Self { p, i, d }
    }

    /// Yaw gains derived from a shared roll/pitch triple
    pub fn detuned_for_yaw(&self) -> Self {
        Self {
            p: detune(self.p),
            i: detune(self.i),
            d: YAW_DERIVED_D,
        }
    }

    /// True when every gain is zero
    pub fn is_zero(&self) -> bool {
        self.p == 0 && self.i == 0 && self.d == 0
    }
}

fn detune(gain: u16) -> u16 {
    // gain * 6 / 10 never exceeds gain, so the narrowing cast is lossless
    (u32::from(gain) * YAW_DETUNE_NUMERATOR / YAW_DETUNE_DENOMINATOR) as u16
}

/// Gains for the three rotational axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AxisGains {
    /// Roll axis
    pub roll: PidGains,
    /// Pitch axis
    pub pitch: PidGains,
    /// Yaw axis
    pub yaw: PidGains,
}

impl AxisGains {
    /// Gains with a distinct triple per axis
    pub const fn new(roll: PidGains, pitch: PidGains, yaw: PidGains) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Expand a shared triple: full triple on roll and pitch, detuned yaw
    pub fn from_shared(shared: PidGains) -> Self {
        Self {
            roll: shared,
            pitch: shared,
            yaw: shared.detuned_for_yaw(),
        }
    }

    /// Gains for a single axis
    pub fn axis(&self, axis: Axis) -> &PidGains {
        match axis {
            Axis::Roll => &self.roll,
            Axis::Pitch => &self.pitch,
            Axis::Yaw => &self.yaw,
        }
    }

    /// True when every axis is all-zero
    pub fn is_zero(&self) -> bool {
        self.roll.is_zero() && self.pitch.is_zero() && self.yaw.is_zero()
    }
}

/// Gyro / D-term filter settings paired with a PID baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FilterProfile {
    /// Second-stage gyro lowpass cutoff (Hz)
    pub gyro_cutoff_hz: u16,
    /// First-stage D-term lowpass cutoff (Hz)
    pub dterm_cutoff_hz: u16,
    /// Dynamic notch stage count; `None` disables the dynamic notch
    pub notch_stages: Option<u8>,
}

impl FilterProfile {
    /// Filter block from explicit values
    pub const fn new(gyro_cutoff_hz: u16, dterm_cutoff_hz: u16, notch_stages: Option<u8>) -> Self {
        Self { gyro_cutoff_hz, dterm_cutoff_hz, notch_stages }
    }

    /// True when no cutoff is set and the notch is absent
    pub fn is_empty(&self) -> bool {
        self.gyro_cutoff_hz == 0 && self.dterm_cutoff_hz == 0 && self.notch_stages.is_none()
    }
}

/// Full baseline tuning for one drone class
///
/// Recomputed from the catalog on every request. An empty profile (all gains
/// zero, no filter) means no baseline is available and must not be flown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TuningProfile {
    /// Class this profile was derived for (as requested)
    pub class_id: String,
    /// Per-axis PID gains
    pub pid: AxisGains,
    /// Filter cutoffs
    pub filter: FilterProfile,
    /// Free-form notes stored with the baseline
    pub notes: Option<String>,
}

impl TuningProfile {
    /// The "no baseline available" profile
    pub fn empty(class_id: &str) -> Self {
        Self {
            class_id: String::from(class_id),
            ..Self::default()
        }
    }

    /// True for the "no baseline available" profile
    pub fn is_empty(&self) -> bool {
        self.pid.is_zero() && self.filter.is_empty()
    }
}
