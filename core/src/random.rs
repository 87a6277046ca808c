//! Random schedule — bounded, direction-random perturbations at a
//! random subset of payment periods.
//!
//! DRAW ORDER (observable whenever a seed is supplied):
//!   1. Selection stream: draw `bounded(total_periods) + 1` until
//!      `target_adjustment_count` distinct periods are held, rejecting
//!      repeats; sort ascending.
//!   2. Perturbation stream, once per selected period in ascending
//!      order: `u1` picks the direction (down when `u1 < 0.5`), then
//!      `u2 * max_absolute_adjustment` is the magnitude.
//! The two streams are separate (see rng.rs), so selection never
//! depends on how many perturbation draws were made.

use crate::{
    calendar::cadence_date,
    error::ScheduleResult,
    event::{describe, RateAdjustmentEvent},
    generator::ScheduleGenerator,
    policy::RandomPolicy,
    rate::apply_floor,
    rng::{RngBank, ScheduleRng, StreamSlot},
    types::PeriodIndex,
};
use std::collections::BTreeSet;

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomScheduleGenerator;

impl RandomScheduleGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Distinct periods in `1..=total_periods`, ascending.
    pub fn select_periods(
        rng: &mut ScheduleRng,
        total_periods: u32,
        count: u32,
    ) -> Vec<PeriodIndex> {
        let mut selected = BTreeSet::new();
        while selected.len() < count as usize {
            let period = rng.next_u64_below(u64::from(total_periods)) as PeriodIndex + 1;
            selected.insert(period);
        }
        selected.into_iter().collect()
    }

    /// Signed perturbation in `[-max_abs, max_abs]`.
    fn perturbation(rng: &mut ScheduleRng, max_abs: f64) -> f64 {
        let direction = if rng.chance(0.5) { -1.0 } else { 1.0 };
        let magnitude = rng.next_f64() * max_abs;
        direction * magnitude
    }
}

impl ScheduleGenerator for RandomScheduleGenerator {
    type Policy = RandomPolicy;

    fn name(&self) -> &'static str { "random" }

    fn generate(&self, policy: &RandomPolicy) -> ScheduleResult<Vec<RateAdjustmentEvent>> {
        policy.validate()?;
        let basis = &policy.basis;

        let bank = match policy.random_seed {
            Some(seed) => RngBank::new(seed),
            None => {
                let bank = RngBank::from_entropy();
                log::debug!("{}: no seed supplied, drew seed {}", self.name(), bank.seed());
                bank
            }
        };

        let mut selection = bank.stream(StreamSlot::Selection);
        let periods = Self::select_periods(
            &mut selection,
            policy.total_periods,
            policy.target_adjustment_count,
        );

        // Period k falls k-1 cadence steps after the first due date.
        let dates = periods
            .iter()
            .map(|&k| cadence_date(basis.starting_date, basis.cadence_periods, k - 1))
            .collect::<ScheduleResult<Vec<_>>>()?;

        let mut rng = bank.stream(StreamSlot::Perturbation);
        let mut rate = basis.starting_index_rate;
        let events: Vec<RateAdjustmentEvent> = dates
            .into_iter()
            .map(|date| {
                let delta = Self::perturbation(&mut rng, policy.max_absolute_adjustment);
                rate = apply_floor(rate + delta, basis.minimum_rate);
                RateAdjustmentEvent::new(date, rate)
            })
            .collect();

        log::debug!(
            "{}: seed {} {} stream picked periods {:?} of {}, {} stream gave [{}]",
            self.name(),
            bank.seed(),
            selection.name,
            periods,
            policy.total_periods,
            rng.name,
            describe(&events)
        );

        Ok(events)
    }
}
