//! Descriptive Build Metrics
//!
//! Ballpark figures shown next to the tuning: weight class, static
//! thrust-to-weight ratio, hover runtime and a propeller label. None of
//! them influence classification or the baseline.
//!
//! ## Heuristics
//!
//! ```text
//! thrust per motor (g) = K · D² · pitch · blade_factor · cells / 4
//! thrust-to-weight     = 4 · thrust per motor / weight
//! pack energy (Wh)     = cells · 3.7 V · mAh / 1000 · 0.8
//! hover power (W)      = weight / 4 g/W
//! runtime (min)        = pack energy / hover power · 60
//! ```
//!
//! See [`constants::power`](crate::constants::power) for the coefficients.

use alloc::format;
use alloc::string::String;

use crate::constants::airframe::{LIGHT_BUILD_MAX_G, MEDIUM_BUILD_MAX_G, WEIGHT_CLASS_MIN_SIZE_IN};
use crate::constants::power::{
    BLADE_FACTOR_2, BLADE_FACTOR_3, BLADE_FACTOR_4, DEFAULT_CAPACITY_MAH, HOVER_EFFICIENCY_G_PER_W,
    LIPO_NOMINAL_CELL_V, MAX_CELL_COUNT, MINUTES_PER_HOUR, MOTOR_COUNT, THRUST_COEFFICIENT_G,
    THRUST_REFERENCE_CELLS, USABLE_CAPACITY_RATIO,
};
use crate::traits::Validatable;

/// Build weight bucket for 5" and larger frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeightClass {
    /// Under 650 g
    Light,
    /// 650 g to 900 g
    Medium,
    /// Over 900 g
    Heavy,
    /// Frame below 5" or unusable input
    Unspecified,
}

impl WeightClass {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
            Self::Unspecified => "unspecified",
        }
    }
}

/// Weight bucket for a frame size (inches) and weight (grams)
pub fn weight_class(size: f32, weight: f32) -> WeightClass {
    if !(size.is_valid() && weight.is_valid()) || size < WEIGHT_CLASS_MIN_SIZE_IN {
        return WeightClass::Unspecified;
    }

    if weight < LIGHT_BUILD_MAX_G {
        WeightClass::Light
    } else if weight <= MEDIUM_BUILD_MAX_G {
        WeightClass::Medium
    } else {
        WeightClass::Heavy
    }
}

/// Parsed battery description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatterySpec {
    /// Series cell count (1-8)
    pub cells: u8,
    /// Capacity (mAh); the per-cell-count default when not given
    pub capacity_mah: u16,
}

impl BatterySpec {
    /// Parse descriptions like `"4S"`, `"6s 1300mAh"` or `"4S1500"`
    ///
    /// Returns `None` when no cell count in 1-8 can be found.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (cells, rest) = leading_number(text)?;
        let rest = rest.strip_prefix(['S', 's'])?;

        let cells = u8::try_from(cells).ok().filter(|c| (1..=MAX_CELL_COUNT).contains(c))?;
        let default_capacity = DEFAULT_CAPACITY_MAH[usize::from(cells - 1)];

        let capacity_mah = match leading_number(rest.trim_start()) {
            Some((mah, _)) => u16::try_from(mah).ok().filter(|mah| *mah > 0).unwrap_or(default_capacity),
            None => default_capacity,
        };

        Some(Self { cells, capacity_mah })
    }

    /// Nominal pack voltage (V)
    pub fn nominal_voltage(&self) -> f32 {
        f32::from(self.cells) * LIPO_NOMINAL_CELL_V
    }

    /// Energy available before landing (Wh)
    pub fn usable_energy_wh(&self) -> f32 {
        self.nominal_voltage() * f32::from(self.capacity_mah) / 1000.0 * USABLE_CAPACITY_RATIO
    }
}

fn leading_number(text: &str) -> Option<(u32, &str)> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = text[..digits].parse().ok()?;
    Some((value, &text[digits..]))
}

fn blade_factor(blades: u8) -> Option<f32> {
    match blades {
        2 => Some(BLADE_FACTOR_2),
        3 => Some(BLADE_FACTOR_3),
        4 => Some(BLADE_FACTOR_4),
        _ => None,
    }
}

/// Static thrust of one motor (grams)
///
/// `None` for unsupported blade counts or non-positive geometry.
pub fn motor_thrust_g(prop_size: f32, pitch: f32, blades: u8, cells: u8) -> Option<f32> {
    let factor = blade_factor(blades)?;
    if !(prop_size.is_valid() && pitch.is_valid()) || prop_size <= 0.0 || pitch <= 0.0 {
        return None;
    }

    Some(THRUST_COEFFICIENT_G * prop_size * prop_size * pitch * factor * f32::from(cells) / THRUST_REFERENCE_CELLS)
}

/// Total static thrust over all-up weight, rounded to two decimals
pub fn thrust_to_weight(prop_size: f32, pitch: f32, blades: u8, battery: &BatterySpec, weight: f32) -> Option<f32> {
    if !weight.is_valid() || weight <= 0.0 {
        return None;
    }

    let thrust = motor_thrust_g(prop_size, pitch, blades, battery.cells)? * MOTOR_COUNT;
    Some(round_to(thrust / weight, 100.0))
}

/// Hover runtime in minutes, rounded to one decimal
pub fn estimate_runtime_minutes(battery: &BatterySpec, weight: f32) -> Option<f32> {
    if !weight.is_valid() || weight <= 0.0 {
        return None;
    }

    let hover_power_w = weight / HOVER_EFFICIENCY_G_PER_W;
    Some(round_to(battery.usable_energy_wh() / hover_power_w * MINUTES_PER_HOUR, 10.0))
}

/// Propeller label such as `"5.0x4.0 3-blade"`
pub fn propeller_summary(prop_size: f32, pitch: f32, blades: u8) -> String {
    format!("{:.1}x{:.1} {}-blade", prop_size, pitch, blades)
}

fn round_to(value: f32, scale: f32) -> f32 {
    libm::roundf(value * scale) / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_classes() {
        assert_eq!(weight_class(5.0, 600.0), WeightClass::Light);
        assert_eq!(weight_class(5.0, 650.0), WeightClass::Medium);
        assert_eq!(weight_class(7.0, 900.0), WeightClass::Medium);
        assert_eq!(weight_class(10.0, 900.5), WeightClass::Heavy);
        assert_eq!(weight_class(4.9, 2000.0), WeightClass::Unspecified);
        assert_eq!(weight_class(f32::NAN, 700.0), WeightClass::Unspecified);
        assert_eq!(WeightClass::Medium.name(), "medium");
    }

    #[test]
    fn battery_parsing() {
        assert_eq!(BatterySpec::parse("4S"), Some(BatterySpec { cells: 4, capacity_mah: 1300 }));
        assert_eq!(BatterySpec::parse(" 6s 1300mAh "), Some(BatterySpec { cells: 6, capacity_mah: 1300 }));
        assert_eq!(BatterySpec::parse("1S"), Some(BatterySpec { cells: 1, capacity_mah: 450 }));
        assert_eq!(BatterySpec::parse("4S1500"), Some(BatterySpec { cells: 4, capacity_mah: 1500 }));
        assert_eq!(BatterySpec::parse("6S"), Some(BatterySpec { cells: 6, capacity_mah: 1300 }));
        assert_eq!(BatterySpec::parse("0S"), None);
        assert_eq!(BatterySpec::parse("9S"), None);
        assert_eq!(BatterySpec::parse("lipo"), None);
        assert_eq!(BatterySpec::parse(""), None);
        assert_eq!(BatterySpec::parse("4"), None);
    }

    #[test]
    fn five_inch_thrust_ratio() {
        let battery = BatterySpec { cells: 4, capacity_mah: 1300 };
        assert_eq!(motor_thrust_g(5.0, 4.0, 3, 4), Some(1500.0));
        assert_eq!(thrust_to_weight(5.0, 4.0, 3, &battery, 750.0), Some(8.0));
        assert_eq!(thrust_to_weight(5.0, 4.0, 5, &battery, 750.0), None);
        assert_eq!(thrust_to_weight(5.0, 4.0, 3, &battery, 0.0), None);
        assert_eq!(thrust_to_weight(0.0, 4.0, 3, &battery, 750.0), None);
    }

    #[test]
    fn runtime_estimate() {
        let battery = BatterySpec { cells: 4, capacity_mah: 1300 };
        assert_eq!(estimate_runtime_minutes(&battery, 750.0), Some(4.9));
        assert_eq!(estimate_runtime_minutes(&battery, -1.0), None);

        let lighter = estimate_runtime_minutes(&battery, 500.0).unwrap_or_default();
        assert!(lighter > 4.9);
    }

    #[test]
    fn propeller_label() {
        assert_eq!(propeller_summary(5.0, 4.0, 3), "5.0x4.0 3-blade");
        assert_eq!(propeller_summary(7.5, 3.5, 2), "7.5x3.5 2-blade");
    }
}
