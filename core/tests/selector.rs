//! Selector dispatch and manual-list validation.

use chrono::NaiveDate;
use rate_schedule_core::{
    policy::{AdjustmentKind, PatternPolicy, RandomPolicy, RateBasis},
    selector::ManualAdjustment,
    AdjustmentMode, PatternScheduleGenerator, RandomScheduleGenerator, RateAdjustmentSelector,
    ScheduleGenerator,
};

fn basis(cadence: u32) -> RateBasis {
    RateBasis {
        starting_index_rate: 2.5,
        starting_date:       NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        minimum_rate:        0.0,
        cadence_periods:     cadence,
    }
}

fn manual(rows: &[(&str, &str)]) -> AdjustmentMode {
    AdjustmentMode::Manual {
        adjustments: rows.iter().map(|(d, r)| ManualAdjustment::new(*d, *r)).collect(),
    }
}

#[test]
fn no_mode_means_no_changes() {
    let events = RateAdjustmentSelector::new().select(&AdjustmentMode::None).expect("select schedule");
    assert!(events.is_empty());
}

#[test]
fn pattern_mode_delegates_to_pattern_generator() {
    let policy = PatternPolicy {
        basis:                basis(12),
        adjustment_count:     3,
        adjustment_kind:      AdjustmentKind::FixedAmount,
        adjustment_magnitude: 0.5,
    };
    let expected = PatternScheduleGenerator::new().generate(&policy).expect("generate schedule");
    let got = RateAdjustmentSelector::new()
        .select(&AdjustmentMode::Pattern(policy))
        .expect("select schedule");
    assert_eq!(got, expected);
}

#[test]
fn random_mode_delegates_to_random_generator() {
    let policy = RandomPolicy {
        basis:                   basis(1),
        total_periods:           60,
        target_adjustment_count: 4,
        max_absolute_adjustment: 0.5,
        random_seed:             Some(11),
    };
    let expected = RandomScheduleGenerator::new().generate(&policy).expect("generate schedule");
    let got = RateAdjustmentSelector::new()
        .select(&AdjustmentMode::Random(policy))
        .expect("select schedule");
    assert_eq!(got, expected);
}

#[test]
fn manual_rows_are_parsed_and_ordered() {
    let mode = manual(&[("2026-01-01", "3.75"), ("2025-01-01", " 3.25 ")]);
    let events = RateAdjustmentSelector::new().select(&mode).expect("select schedule");

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].effective_date, NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"));
    assert_eq!(events[0].index_rate, 3.25);
    assert_eq!(events[1].effective_date, NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"));
    assert_eq!(events[1].index_rate, 3.75);
}

#[test]
fn empty_manual_list_is_empty() {
    assert!(RateAdjustmentSelector::new().select(&manual(&[])).expect("select schedule").is_empty());
}

#[test]
fn bad_manual_rows_are_rejected() {
    let selector = RateAdjustmentSelector::new();
    let cases = [
        manual(&[("2025-13-01", "3.0")]),
        manual(&[("01/01/2025", "3.0")]),
        manual(&[("2025-01-01", "three")]),
        manual(&[("2025-01-01", "NaN")]),
        manual(&[("2025-01-01", "-0.5")]),
        manual(&[("2025-01-01", "3.0"), ("2025-01-01", "3.5")]),
    ];

    for mode in cases {
        let err = selector.select(&mode).unwrap_err();
        assert!(err.is_invalid_policy(), "expected InvalidPolicy for {mode:?}, got {err}");
    }
}

#[test]
fn generator_errors_pass_through() {
    let policy = RandomPolicy {
        basis:                   basis(1),
        total_periods:           5,
        target_adjustment_count: 10,
        max_absolute_adjustment: 1.0,
        random_seed:             Some(1),
    };
    let err = RateAdjustmentSelector::new()
        .select(&AdjustmentMode::Random(policy))
        .unwrap_err();
    assert!(err.is_invalid_policy());
}
