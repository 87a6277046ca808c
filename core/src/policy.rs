//! Adjustment policies — immutable inputs to the schedule generators.
//!
//! A policy is built fresh from form state for every calculation and
//! is never mutated afterwards. Validation happens up front so that a
//! generator either returns a full sequence or nothing.

use crate::{
    error::{ScheduleError, ScheduleResult},
    rate::ensure_finite,
    types::{IndexRate, Seed},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields shared by every generated schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateBasis {
    pub starting_index_rate: IndexRate,
    pub starting_date:       NaiveDate,
    #[serde(default)]
    pub minimum_rate:        IndexRate,
    pub cadence_periods:     u32,
}

impl RateBasis {
    pub fn validate(&self) -> ScheduleResult<()> {
        ensure_finite("starting_index_rate", self.starting_index_rate)?;
        ensure_finite("minimum_rate", self.minimum_rate)?;
        if self.cadence_periods == 0 {
            return Err(ScheduleError::invalid("cadence_periods", "must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// Magnitude is a percentage of the current rate (5 means +5% of it).
    Percentage,
    /// Magnitude is added to the rate in percentage points.
    FixedAmount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternPolicy {
    #[serde(flatten)]
    pub basis:                RateBasis,
    pub adjustment_count:     u32,
    pub adjustment_kind:      AdjustmentKind,
    pub adjustment_magnitude: f64,
}

impl PatternPolicy {
    pub fn validate(&self) -> ScheduleResult<()> {
        self.basis.validate()?;
        ensure_finite("adjustment_magnitude", self.adjustment_magnitude)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomPolicy {
    #[serde(flatten)]
    pub basis:                   RateBasis,
    pub total_periods:           u32,
    pub target_adjustment_count: u32,
    pub max_absolute_adjustment: f64,
    #[serde(default)]
    pub random_seed:             Option<Seed>,
}

impl RandomPolicy {
    pub fn validate(&self) -> ScheduleResult<()> {
        self.basis.validate()?;
        ensure_finite("max_absolute_adjustment", self.max_absolute_adjustment)?;
        if self.max_absolute_adjustment < 0.0 {
            return Err(ScheduleError::invalid(
                "max_absolute_adjustment",
                format!("must not be negative, got {}", self.max_absolute_adjustment),
            ));
        }
        if self.target_adjustment_count > self.total_periods {
            return Err(ScheduleError::invalid(
                "target_adjustment_count",
                format!(
                    "{} exceeds the {} periods available",
                    self.target_adjustment_count, self.total_periods
                ),
            ));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.random_seed = Some(seed);
        self
    }
}
