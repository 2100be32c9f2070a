//! Presentation rounding. Never applied to values used in further math.

use estimator_core::constants::DISPLAY_DAY_PRECISION;

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Days are shown with one decimal place.
pub fn display_days(days: f64) -> f64 {
    round_to(days, DISPLAY_DAY_PRECISION)
}

/// Cost is shown with the catalog's currency precision.
pub fn display_cost(cost: f64, precision: u32) -> f64 {
    round_to(cost, precision)
}

/// `12` for whole numbers, `2.5` otherwise.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
