//! Generator trait shared by the pattern and random schedules.
//!
//! RULE: Every generator is a pure function of its policy.
//! It validates the whole policy before producing the first event
//! and never returns a partial sequence.

use crate::{error::ScheduleResult, event::RateAdjustmentEvent};

/// The contract every schedule generator must fulfill.
pub trait ScheduleGenerator {
    type Policy;

    /// Unique stable name, used in log lines.
    fn name(&self) -> &'static str;

    /// Produce the full, date-ordered event sequence for `policy`.
    fn generate(&self, policy: &Self::Policy) -> ScheduleResult<Vec<RateAdjustmentEvent>>;
}
