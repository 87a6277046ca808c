//! Pattern schedule — deterministic, formula-driven rate progression.

use crate::{
    calendar::cadence_date,
    error::ScheduleResult,
    event::{describe, RateAdjustmentEvent},
    generator::ScheduleGenerator,
    policy::{AdjustmentKind, PatternPolicy},
    rate::{apply_floor, ensure_finite},
    types::IndexRate,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct PatternScheduleGenerator;

impl PatternScheduleGenerator {
    pub fn new() -> Self {
        Self
    }

    fn step(kind: AdjustmentKind, magnitude: f64, rate: IndexRate) -> IndexRate {
        match kind {
            AdjustmentKind::FixedAmount => rate + magnitude,
            AdjustmentKind::Percentage  => rate + rate * magnitude / 100.0,
        }
    }
}

impl ScheduleGenerator for PatternScheduleGenerator {
    type Policy = PatternPolicy;

    fn name(&self) -> &'static str { "pattern" }

    fn generate(&self, policy: &PatternPolicy) -> ScheduleResult<Vec<RateAdjustmentEvent>> {
        policy.validate()?;
        let basis = &policy.basis;

        // Resolve every date first so a calendar overflow cannot leave
        // a half-built sequence behind.
        let dates = (1..=policy.adjustment_count)
            .map(|i| cadence_date(basis.starting_date, basis.cadence_periods, i))
            .collect::<ScheduleResult<Vec<_>>>()?;

        // Compounding can overflow even from finite inputs; check every
        // step before any event exists.
        let mut rate = basis.starting_index_rate;
        let mut rates = Vec::with_capacity(dates.len());
        for _ in 0..dates.len() {
            let next = ensure_finite(
                "adjustment_magnitude",
                Self::step(policy.adjustment_kind, policy.adjustment_magnitude, rate),
            )?;
            // Floor is sticky: the next step compounds from the clamped rate.
            rate = apply_floor(next, basis.minimum_rate);
            rates.push(rate);
        }

        let events: Vec<RateAdjustmentEvent> = dates
            .into_iter()
            .zip(rates)
            .map(|(date, rate)| RateAdjustmentEvent::new(date, rate))
            .collect();

        log::debug!(
            "{}: {} adjustments from {:.6} every {} periods: [{}]",
            self.name(),
            events.len(),
            basis.starting_index_rate,
            basis.cadence_periods,
            describe(&events)
        );

        Ok(events)
    }
}
