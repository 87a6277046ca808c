//! Rate fields of the calculation request body.
//!
//! The remote calculator receives these next to the loan amount and
//! payment terms. `rate_adjustments` is `null` for a fixed-rate loan
//! and an array (possibly empty) for an adjustable one.

use crate::{
    error::{ScheduleError, ScheduleResult},
    event::{is_strictly_increasing, RateAdjustmentEvent},
    types::IndexRate,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateRequest {
    pub annual_interest_rate:  Option<f64>,
    pub initial_interest_rate: Option<f64>,
    pub initial_index_rate:    Option<IndexRate>,
    pub margin:                f64,
    pub rate_adjustments:      Option<Vec<RateAdjustmentEvent>>,
    pub max_rate_change:       Option<f64>,
    pub max_interest_rate:     Option<f64>,
    pub adjust_payment:        bool,
    pub fixed_rate_period:     Option<u32>,
    pub adjustment_frequency:  Option<u32>,
    pub minimum_interest_rate: Option<f64>,
}

/// Adjustable-rate terms other than the event schedule itself.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustableRateTerms {
    pub initial_interest_rate: f64,
    pub initial_index_rate:    Option<IndexRate>,
    pub margin:                f64,
    pub max_rate_change:       Option<f64>,
    pub max_interest_rate:     Option<f64>,
    pub adjust_payment:        bool,
    pub fixed_rate_period:     Option<u32>,
    pub adjustment_frequency:  Option<u32>,
    pub minimum_interest_rate: f64,
}

impl RateRequest {
    pub fn fixed(annual_interest_rate: f64) -> Self {
        Self {
            annual_interest_rate:  Some(annual_interest_rate),
            initial_interest_rate: None,
            initial_index_rate:    None,
            margin:                0.0,
            rate_adjustments:      None,
            max_rate_change:       None,
            max_interest_rate:     None,
            adjust_payment:        true,
            fixed_rate_period:     None,
            adjustment_frequency:  None,
            minimum_interest_rate: None,
        }
    }

    /// Adjustable request carrying `events`, which must already be in
    /// strictly increasing date order.
    pub fn adjustable(
        terms: &AdjustableRateTerms,
        events: Vec<RateAdjustmentEvent>,
    ) -> ScheduleResult<Self> {
        if !is_strictly_increasing(&events) {
            return Err(ScheduleError::invalid(
                "rate_adjustments",
                "effective dates must be strictly increasing",
            ));
        }
        Ok(Self {
            annual_interest_rate:  None,
            initial_interest_rate: Some(terms.initial_interest_rate),
            initial_index_rate:    terms.initial_index_rate,
            margin:                terms.margin,
            rate_adjustments:      Some(events),
            max_rate_change:       terms.max_rate_change,
            max_interest_rate:     terms.max_interest_rate,
            adjust_payment:        terms.adjust_payment,
            fixed_rate_period:     terms.fixed_rate_period,
            adjustment_frequency:  terms.adjustment_frequency,
            minimum_interest_rate: Some(terms.minimum_interest_rate),
        })
    }

    pub fn is_adjustable(&self) -> bool {
        self.rate_adjustments.is_some()
    }

    pub fn to_json(&self) -> ScheduleResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
