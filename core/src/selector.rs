//! Rate-adjustment selector — picks the one active source of
//! rate-change events and is the only caller of the generators.
//!
//! Manual, pattern and random modes are mutually exclusive because
//! AdjustmentMode holds exactly one of them.

use crate::{
    calendar::parse_iso_date,
    error::{ScheduleError, ScheduleResult},
    event::RateAdjustmentEvent,
    generator::ScheduleGenerator,
    pattern::PatternScheduleGenerator,
    policy::{PatternPolicy, RandomPolicy},
    random::RandomScheduleGenerator,
    rate::parse_rate,
};
use serde::{Deserialize, Serialize};

/// One row of a hand-entered schedule, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualAdjustment {
    pub effective_date: String,
    pub index_rate:     String,
}

impl ManualAdjustment {
    pub fn new(effective_date: impl Into<String>, index_rate: impl Into<String>) -> Self {
        Self {
            effective_date: effective_date.into(),
            index_rate:     index_rate.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdjustmentMode {
    /// Adjustable loan whose index never changes.
    #[default]
    None,
    Manual { adjustments: Vec<ManualAdjustment> },
    Pattern(PatternPolicy),
    Random(RandomPolicy),
}

impl AdjustmentMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::None          => "none",
            Self::Manual { .. } => "manual",
            Self::Pattern(_)    => "pattern",
            Self::Random(_)     => "random",
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RateAdjustmentSelector {
    pattern: PatternScheduleGenerator,
    random:  RandomScheduleGenerator,
}

impl RateAdjustmentSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, mode: &AdjustmentMode) -> ScheduleResult<Vec<RateAdjustmentEvent>> {
        let events = match mode {
            AdjustmentMode::None                      => Vec::new(),
            AdjustmentMode::Manual { adjustments }    => Self::validate_manual(adjustments)?,
            AdjustmentMode::Pattern(policy)           => self.pattern.generate(policy)?,
            AdjustmentMode::Random(policy)            => self.random.generate(policy)?,
        };
        log::debug!("selector: mode={} produced {} events", mode.label(), events.len());
        Ok(events)
    }

    /// Parse and re-check a hand-entered list, then order it by date.
    fn validate_manual(rows: &[ManualAdjustment]) -> ScheduleResult<Vec<RateAdjustmentEvent>> {
        let mut events = rows
            .iter()
            .map(|row| {
                let date = parse_iso_date("effective_date", &row.effective_date)?;
                let rate = parse_rate("index_rate", &row.index_rate)?;
                if rate < 0.0 {
                    return Err(ScheduleError::invalid(
                        "index_rate",
                        format!("must not be negative, got {rate} on {date}"),
                    ));
                }
                Ok(RateAdjustmentEvent::new(date, rate))
            })
            .collect::<ScheduleResult<Vec<_>>>()?;

        events.sort_by_key(|e| e.effective_date);
        if let Some(dup) = events.windows(2).find(|w| w[0].effective_date == w[1].effective_date) {
            return Err(ScheduleError::invalid(
                "effective_date",
                format!("{} appears more than once", dup[0].effective_date),
            ));
        }
        Ok(events)
    }
}
