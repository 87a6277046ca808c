//! Calendar arithmetic for effective dates.
//!
//! Month rule: keep the day of month when the target month has it,
//! otherwise clamp to the target month's last day. Every schedule date
//! is computed from the anchor date, never by stepping from a clamped
//! date, so a Jan 31 anchor gives Feb 29, Mar 31, Apr 30, ...

use crate::error::{ScheduleError, ScheduleResult};
use chrono::{Months, NaiveDate};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// `anchor` advanced by `months` calendar months.
pub fn add_months(anchor: NaiveDate, months: u32) -> ScheduleResult<NaiveDate> {
    anchor
        .checked_add_months(Months::new(months))
        .ok_or_else(|| {
            ScheduleError::invalid(
                "starting_date",
                format!("{anchor} + {months} months is outside the supported calendar"),
            )
        })
}

/// Date of the `step`-th cadence boundary after `anchor`.
pub fn cadence_date(anchor: NaiveDate, cadence_periods: u32, step: u32) -> ScheduleResult<NaiveDate> {
    let months = cadence_periods.checked_mul(step).ok_or_else(|| {
        ScheduleError::invalid(
            "cadence_periods",
            format!("{cadence_periods} x {step} overflows the month counter"),
        )
    })?;
    add_months(anchor, months)
}

pub fn parse_iso_date(field: &'static str, text: &str) -> ScheduleResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), ISO_DATE_FORMAT)
        .map_err(|e| ScheduleError::invalid(field, format!("'{text}' is not a YYYY-MM-DD date: {e}")))
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_end_clamps_without_drift() {
        let anchor = d(2024, 1, 31);
        let dates: Vec<NaiveDate> = (1..=3)
            .map(|k| cadence_date(anchor, 1, k).unwrap())
            .collect();

        assert_eq!(dates, vec![d(2024, 2, 29), d(2024, 3, 31), d(2024, 4, 30)]);
    }

    #[test]
    fn non_leap_february_clamps_to_28th() {
        assert_eq!(add_months(d(2023, 1, 31), 1).unwrap(), d(2023, 2, 28));
    }

    #[test]
    fn zero_step_is_the_anchor() {
        assert_eq!(cadence_date(d(2024, 6, 15), 12, 0).unwrap(), d(2024, 6, 15));
    }

    #[test]
    fn iso_dates_parse_and_format() {
        let date = parse_iso_date("effective_date", "2025-01-01").unwrap();
        assert_eq!(date, d(2025, 1, 1));
        assert_eq!(format_iso_date(date), "2025-01-01");

        assert!(parse_iso_date("effective_date", "01/01/2025").is_err());
        assert!(parse_iso_date("effective_date", "2025-02-30").is_err());
    }
}
