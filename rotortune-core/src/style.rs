//! Flight-Style Tuning Suggestions
//!
//! Independent of the class catalog: the flight style alone selects one of
//! three fixed PID/filter suggestions. Callers receive it next to the class
//! baseline, never merged into it.
//!
//! | style | roll / pitch | yaw | gyro | D-term | notch |
//! |---|---|---|---|---|---|
//! | freestyle | 48 / 52 / 38 | 40 / 45 / 0 | 90 Hz | 120 Hz | 2 |
//! | racing | 55 / 45 / 42 | 50 / 40 / 0 | 120 Hz | 150 Hz | 3 |
//! | long range (default) | 42 / 50 / 32 | 35 / 45 / 0 | 70 Hz | 90 Hz | 1 |
//!
//! Only the exact lowercase names `freestyle` and `racing` select their
//! bucket. Any other style string, empty, padded or differently cased
//! included, gets the long-range bucket; normalizing form text is the
//! caller's job.

use crate::tuning::{AxisGains, FilterProfile, PidGains};

/// Recognized flight styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlightStyle {
    /// Balanced, moderate authority
    Freestyle,
    /// Fast response
    Racing,
    /// Smooth and efficient; also the fallback bucket
    LongRange,
}

impl FlightStyle {
    /// Resolve a style name; anything but an exact name falls back to
    /// [`FlightStyle::LongRange`]
    pub fn from_name(name: &str) -> Self {
        match name {
            "freestyle" => Self::Freestyle,
            "racing" => Self::Racing,
            "long_range" => Self::LongRange,
            other => {
                log_debug!("unrecognized style '{}', using long_range", other);
                Self::LongRange
            }
        }
    }

    /// Style name as exposed to callers
    pub fn name(&self) -> &'static str {
        match self {
            Self::Freestyle => "freestyle",
            Self::Racing => "racing",
            Self::LongRange => "long_range",
        }
    }

    /// Fixed suggestion for this style
    pub fn suggestion(&self) -> StyleSuggestion {
        match self {
            Self::Freestyle => StyleSuggestion {
                style: *self,
                pid: AxisGains::new(
                    PidGains::new(48, 52, 38),
                    PidGains::new(48, 52, 38),
                    PidGains::new(40, 45, 0),
                ),
                filter: FilterProfile::new(90, 120, Some(2)),
                tips: &["Freestyle: balanced, moderate authority"],
            },
            Self::Racing => StyleSuggestion {
                style: *self,
                pid: AxisGains::new(
                    PidGains::new(55, 45, 42),
                    PidGains::new(55, 45, 42),
                    PidGains::new(50, 40, 0),
                ),
                filter: FilterProfile::new(120, 150, Some(3)),
                tips: &["Racing: fast response"],
            },
            Self::LongRange => StyleSuggestion {
                style: *self,
                pid: AxisGains::new(
                    PidGains::new(42, 50, 32),
                    PidGains::new(42, 50, 32),
                    PidGains::new(35, 45, 0),
                ),
                filter: FilterProfile::new(70, 90, Some(1)),
                tips: &["Long range: smooth, battery-efficient"],
            },
        }
    }
}

/// Style-based PID/filter suggestion with tips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StyleSuggestion {
    /// Bucket the style resolved to
    pub style: FlightStyle,
    /// Suggested gains
    pub pid: AxisGains,
    /// Suggested filter settings
    pub filter: FilterProfile,
    /// Style-specific advice
    pub tips: &'static [&'static str],
}

/// Pre-flight checks worth doing whatever the style
pub const GENERAL_TIPS: &[&str] = &[
    "Check that no propeller is bent or chipped",
    "Tighten the motor screws",
    "Inspect ESC and battery lead solder joints",
];

/// Suggestion for a style string; never fails
pub fn style_tuning(style: &str) -> StyleSuggestion {
    FlightStyle::from_name(style).suggestion()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn racing_values() {
        let racing = style_tuning("racing");
        assert_eq!(racing.style, FlightStyle::Racing);
        assert_eq!(racing.pid.roll, PidGains::new(55, 45, 42));
        assert_eq!(racing.pid.pitch, PidGains::new(55, 45, 42));
        assert_eq!(racing.pid.yaw, PidGains::new(50, 40, 0));
        assert_eq!(racing.filter, FilterProfile::new(120, 150, Some(3)));
    }

    #[test]
    fn freestyle_values() {
        let freestyle = style_tuning("freestyle");
        assert_eq!(freestyle.pid.roll, PidGains::new(48, 52, 38));
        assert_eq!(freestyle.pid.yaw, PidGains::new(40, 45, 0));
        assert_eq!(freestyle.filter.notch_stages, Some(2));
    }

    #[test]
    fn unknown_styles_share_the_default_bucket() {
        let empty = style_tuning("");
        assert_eq!(style_tuning("unknown_xyz"), empty);
        assert_eq!(style_tuning("longrange"), empty);
        assert_eq!(style_tuning("cine"), empty);
        assert_eq!(empty.style, FlightStyle::LongRange);
        assert_eq!(empty.pid.roll, PidGains::new(42, 50, 32));
        assert_eq!(empty.filter, FilterProfile::new(70, 90, Some(1)));
    }

    #[test]
    fn name_matching_is_exact() {
        assert_eq!(FlightStyle::from_name("Racing"), FlightStyle::LongRange);
        assert_eq!(FlightStyle::from_name(" racing "), FlightStyle::LongRange);
        assert_eq!(FlightStyle::from_name(" freestyle"), FlightStyle::LongRange);
        assert_eq!(FlightStyle::from_name("FREESTYLE"), FlightStyle::LongRange);
        assert_eq!(FlightStyle::from_name("race"), FlightStyle::LongRange);
        assert_eq!(style_tuning("Racing"), style_tuning(""));
    }

    #[test]
    fn yaw_never_has_d() {
        for style in [FlightStyle::Freestyle, FlightStyle::Racing, FlightStyle::LongRange] {
            assert_eq!(style.suggestion().pid.yaw.d, 0);
            assert_eq!(FlightStyle::from_name(style.name()), style);
        }
    }
}
