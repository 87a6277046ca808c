//! Rate-change events — the single output shape of every generator.

use crate::{
    calendar::{format_iso_date, ISO_DATE_FORMAT},
    rate::format_rate,
    types::IndexRate,
};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// The index rate that applies from `effective_date` onwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateAdjustmentEvent {
    pub effective_date: NaiveDate,
    pub index_rate:     IndexRate,
}

impl RateAdjustmentEvent {
    pub fn new(effective_date: NaiveDate, index_rate: IndexRate) -> Self {
        Self { effective_date, index_rate }
    }

    /// Wire form: `{"effective_date": "YYYY-MM-DD", "index_rate": "0.000000"}`.
    pub fn to_wire(&self) -> WireAdjustment {
        WireAdjustment {
            effective_date: format_iso_date(self.effective_date),
            index_rate:     format_rate(self.index_rate),
        }
    }
}

impl Serialize for RateAdjustmentEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire().serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireAdjustment {
    pub effective_date: String,
    pub index_rate:     String,
}

/// True when every date is strictly later than the one before it.
pub fn is_strictly_increasing(events: &[RateAdjustmentEvent]) -> bool {
    events
        .windows(2)
        .all(|w| w[0].effective_date < w[1].effective_date)
}

pub(crate) fn describe(events: &[RateAdjustmentEvent]) -> String {
    events
        .iter()
        .map(|e| format!("{}={}", e.effective_date.format(ISO_DATE_FORMAT), format_rate(e.index_rate)))
        .collect::<Vec<_>>()
        .join(", ")
}
