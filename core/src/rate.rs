//! Index-rate helpers: floor clamp, finiteness checks, wire formatting.

use crate::{
    error::{ScheduleError, ScheduleResult},
    types::IndexRate,
};

/// Fractional digits carried on the wire for every index rate.
pub const RATE_DECIMALS: usize = 6;

/// Clamp a rate to the floor. The clamped value is what later
/// adjustments compound from.
pub fn apply_floor(rate: IndexRate, floor: IndexRate) -> IndexRate {
    rate.max(floor)
}

pub fn ensure_finite(field: &'static str, value: f64) -> ScheduleResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScheduleError::invalid(field, format!("must be finite, got {value}")))
    }
}

/// Render a rate with exactly six fractional digits.
pub fn format_rate(rate: IndexRate) -> String {
    // -0.000000 would otherwise leak out of tiny negative round-offs
    let rendered = format!("{:.*}", RATE_DECIMALS, rate);
    match rendered.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => rendered,
    }
}

/// Parse a user-typed rate such as " 3.25 ".
pub fn parse_rate(field: &'static str, text: &str) -> ScheduleResult<IndexRate> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ScheduleError::invalid(field, format!("'{text}' is not a number")))?;
    ensure_finite(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_is_a_lower_bound_only() {
        assert_eq!(apply_floor(1.5, 2.0), 2.0);
        assert_eq!(apply_floor(2.5, 2.0), 2.5);
    }

    #[test]
    fn rates_render_with_six_decimals() {
        assert_eq!(format_rate(3.0), "3.000000");
        assert_eq!(format_rate(2.8182762638), "2.818276");
        assert_eq!(format_rate(-0.0000001), "0.000000");
        assert_eq!(format_rate(-1.25), "-1.250000");
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(ensure_finite("starting_index_rate", f64::NAN).is_err());
        assert!(ensure_finite("starting_index_rate", f64::INFINITY).is_err());
        assert!(parse_rate("index_rate", "inf").is_err());
        assert!(parse_rate("index_rate", "abc").is_err());
        assert_eq!(parse_rate("index_rate", " 3.25 ").unwrap(), 3.25);
    }
}
