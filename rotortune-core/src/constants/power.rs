//! Thrust and Battery Estimation Coefficients
//!
//! Coarse heuristics for descriptive metrics. They are calibrated on common
//! builds (5" 3-blade on 4S ≈ 1.5 kg static thrust per motor) and are only
//! meant to place a build in the right ballpark.

/// Static thrust coefficient (grams per in² · in of pitch on 4S).
///
/// Per-motor thrust ≈ `K · D² · pitch · blade_factor · cells / 4`.
pub const THRUST_COEFFICIENT_G: f32 = 15.0;

/// Reference cell count the thrust coefficient is calibrated for.
pub const THRUST_REFERENCE_CELLS: f32 = 4.0;

/// Motors on a quadcopter.
pub const MOTOR_COUNT: f32 = 4.0;

/// Relative thrust by blade count, 3-blade = 1.0.
pub const BLADE_FACTOR_2: f32 = 0.85;
/// Relative thrust of a 3-blade propeller.
pub const BLADE_FACTOR_3: f32 = 1.0;
/// Relative thrust of a 4-blade propeller.
pub const BLADE_FACTOR_4: f32 = 1.1;

/// Nominal LiPo cell voltage (V).
pub const LIPO_NOMINAL_CELL_V: f32 = 3.7;

/// Largest cell count recognized in a battery description.
pub const MAX_CELL_COUNT: u8 = 8;

/// Share of pack energy used before landing (0.0-1.0).
///
/// Flying LiPos below ~20% remaining damages them.
pub const USABLE_CAPACITY_RATIO: f32 = 0.8;

/// Hover efficiency of a typical multirotor (grams lifted per watt).
pub const HOVER_EFFICIENCY_G_PER_W: f32 = 4.0;

/// Default pack capacity by cell count when the description has none (mAh).
///
/// Index 0 is 1S. Values are the most common pack size for each voltage.
pub const DEFAULT_CAPACITY_MAH: [u16; 8] = [450, 450, 850, 1300, 1100, 1300, 1300, 1300];

/// Minutes per hour.
pub const MINUTES_PER_HOUR: f32 = 60.0;
