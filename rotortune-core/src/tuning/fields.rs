//! Field-Name Normalization for Stored Baselines
//!
//! Catalog documents written at different times name the same settings
//! differently (`gyro_lpf2` vs `gyro_cutoff`, `{"P": ..}` vs `{"p": ..}`).
//! These tables are the one place that vocabulary is mapped onto the names
//! exposed by [`TuningProfile`](super::TuningProfile). Catalog loaders apply
//! them once, at the loading boundary.

/// Canonical filter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Second-stage gyro lowpass cutoff
    GyroCutoff,
    /// D-term lowpass cutoff
    DtermCutoff,
    /// Dynamic notch stage count
    NotchStages,
}

/// Every accepted spelling of each filter setting
pub const FILTER_FIELD_ALIASES: &[(&str, FilterField)] = &[
    ("gyro_cutoff_hz", FilterField::GyroCutoff),
    ("gyro_cutoff", FilterField::GyroCutoff),
    ("gyro_lpf2", FilterField::GyroCutoff),
    ("gyro_lowpass2_hz", FilterField::GyroCutoff),
    ("dterm_cutoff_hz", FilterField::DtermCutoff),
    ("dterm_lowpass", FilterField::DtermCutoff),
    ("dterm_lpf1", FilterField::DtermCutoff),
    ("dterm_lowpass_hz", FilterField::DtermCutoff),
    ("notch_stages", FilterField::NotchStages),
    ("dyn_notch", FilterField::NotchStages),
    ("dyn_notch_count", FilterField::NotchStages),
];

impl FilterField {
    /// Resolve a stored key; `None` for keys outside the alias table
    pub fn from_key(key: &str) -> Option<Self> {
        FILTER_FIELD_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(key))
            .map(|(_, field)| *field)
    }

    /// Name exposed to callers
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::GyroCutoff => "gyro_cutoff_hz",
            Self::DtermCutoff => "dterm_cutoff_hz",
            Self::NotchStages => "notch_stages",
        }
    }
}

/// One term of a PID triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PidTerm {
    /// Proportional
    P,
    /// Integral
    I,
    /// Derivative
    D,
}

impl PidTerm {
    /// Resolve `p`/`P`, `i`/`I`, `d`/`D`
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "p" | "P" => Some(Self::P),
            "i" | "I" => Some(Self::I),
            "d" | "D" => Some(Self::D),
            _ => None,
        }
    }
}

/// Rotational axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Roll
    Roll,
    /// Pitch
    Pitch,
    /// Yaw
    Yaw,
}

impl Axis {
    /// All axes in display order
    pub const ALL: [Axis; 3] = [Axis::Roll, Axis::Pitch, Axis::Yaw];

    /// Resolve `roll`, `pitch`, `yaw` (any ASCII case)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|axis| axis.name().eq_ignore_ascii_case(key))
    }

    /// Lowercase axis name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Roll => "roll",
            Self::Pitch => "pitch",
            Self::Yaw => "yaw",
        }
    }
}
