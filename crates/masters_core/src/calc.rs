//! 80% rule arithmetic.
//!
//! # Responsibility
//! - Compute snatch and clean & jerk plus/minus values and minimums from
//!   declared entry values.
//! - Coerce raw form text into whole numbers.
//!
//! # Invariants
//! - The threshold is `ceil(total * 0.8)` computed in exact integer math.
//! - Inputs are `i32` and results `i64`, so no input combination overflows.
//! - Functions are pure; no logging, no state.

use serde::{Deserialize, Serialize};

/// Declared entry values for one entrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration {
    pub snatch: i32,
    pub clean_jerk: i32,
    pub entry_total: i32,
}

/// Snatch evaluation derived from a [`Declaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnatchMetrics {
    pub plus_minus: i64,
    pub minimum: i64,
}

/// Clean & jerk evaluation derived from a [`Declaration`] and the snatch taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanJerkMetrics {
    pub plus_minus: i64,
    pub minimum: i64,
}

/// Returns `ceil(entry_total * 0.8)`.
///
/// Evaluated as `ceil(4 * total / 5)` with floor division, which rounds
/// toward +infinity for negative totals as well.
pub fn eighty_percent_threshold(entry_total: i32) -> i64 {
    (4 * i64::from(entry_total) + 4).div_euclid(5)
}

/// Snatch plus/minus and minimum snatch.
///
/// - plus/minus = (snatch + clean_jerk) - threshold
/// - minimum = snatch - plus/minus
pub fn snatch_metrics(declared: &Declaration) -> SnatchMetrics {
    let plus_minus = i64::from(declared.snatch) + i64::from(declared.clean_jerk)
        - eighty_percent_threshold(declared.entry_total);
    SnatchMetrics {
        plus_minus,
        minimum: i64::from(declared.snatch) - plus_minus,
    }
}

/// CJ plus/minus and minimum CJ once the snatch taken is known.
///
/// - plus/minus = (clean_jerk + snatch_taken) - threshold
/// - minimum = clean_jerk - plus/minus
pub fn clean_jerk_metrics(declared: &Declaration, snatch_taken: i32) -> CleanJerkMetrics {
    let plus_minus = i64::from(declared.clean_jerk) + i64::from(snatch_taken)
        - eighty_percent_threshold(declared.entry_total);
    CleanJerkMetrics {
        plus_minus,
        minimum: i64::from(declared.clean_jerk) - plus_minus,
    }
}

/// Coerces form text into a whole number.
///
/// Accepts plain integers and decimal notations without a fractional part
/// (`"100.0"`, `"1e2"`). Returns `None` for anything else, which callers
/// treat as a missing value.
pub fn parse_whole_number(text: &str) -> Option<i32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i32>() {
        return Some(value);
    }

    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    // Range and integrality were checked above.
    Some(value as i32)
}

/// Strict integer parse for the snatch taken field.
///
/// Only plain integer text is accepted; `"125.0"` is rejected.
pub fn parse_integer(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::{
        clean_jerk_metrics, eighty_percent_threshold, parse_integer, parse_whole_number,
        snatch_metrics, Declaration,
    };

    const SAMPLE: Declaration = Declaration {
        snatch: 100,
        clean_jerk: 120,
        entry_total: 270,
    };

    #[test]
    fn threshold_rounds_up() {
        assert_eq!(eighty_percent_threshold(270), 216);
        assert_eq!(eighty_percent_threshold(271), 217);
        assert_eq!(eighty_percent_threshold(274), 220);
        assert_eq!(eighty_percent_threshold(275), 220);
        assert_eq!(eighty_percent_threshold(0), 0);
    }

    #[test]
    fn threshold_rounds_toward_positive_infinity_for_negative_totals() {
        assert_eq!(eighty_percent_threshold(-5), -4);
        assert_eq!(eighty_percent_threshold(-6), -4);
        assert_eq!(eighty_percent_threshold(-1), 0);
    }

    #[test]
    fn threshold_does_not_overflow_at_extremes() {
        assert_eq!(eighty_percent_threshold(i32::MAX), 1_717_986_918);
        assert_eq!(eighty_percent_threshold(i32::MIN), -1_717_986_918);
    }

    #[test]
    fn snatch_metrics_match_reference_values() {
        let metrics = snatch_metrics(&SAMPLE);
        assert_eq!(metrics.plus_minus, 4);
        assert_eq!(metrics.minimum, 96);
    }

    #[test]
    fn clean_jerk_metrics_match_reference_values() {
        let metrics = clean_jerk_metrics(&SAMPLE, 125);
        assert_eq!(metrics.plus_minus, 29);
        assert_eq!(metrics.minimum, 91);
    }

    #[test]
    fn parse_accepts_integers_and_integral_decimals() {
        assert_eq!(parse_whole_number("100"), Some(100));
        assert_eq!(parse_whole_number("  120 "), Some(120));
        assert_eq!(parse_whole_number("-5"), Some(-5));
        assert_eq!(parse_whole_number("+7"), Some(7));
        assert_eq!(parse_whole_number("100.0"), Some(100));
        assert_eq!(parse_whole_number("1e2"), Some(100));
    }

    #[test]
    fn parse_rejects_non_integers_and_garbage() {
        assert_eq!(parse_whole_number(""), None);
        assert_eq!(parse_whole_number("   "), None);
        assert_eq!(parse_whole_number("abc"), None);
        assert_eq!(parse_whole_number("100.5"), None);
        assert_eq!(parse_whole_number("nan"), None);
        assert_eq!(parse_whole_number("inf"), None);
        assert_eq!(parse_whole_number("1e12"), None);
    }

    #[test]
    fn strict_integer_parse_rejects_decimal_notation() {
        assert_eq!(parse_integer(" 125 "), Some(125));
        assert_eq!(parse_integer("-3"), Some(-3));
        assert_eq!(parse_integer("125.0"), None);
        assert_eq!(parse_integer("1e2"), None);
        assert_eq!(parse_integer(""), None);
    }
}
