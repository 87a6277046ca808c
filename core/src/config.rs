//! Loan form documents — the rate-related state of the input form.
//!
//! A form is read from JSON, turned into an AdjustmentMode and then
//! into the rate fields of the calculation request. Nothing here is
//! persisted; a fresh form is built for every calculation.

use crate::{
    error::{ScheduleError, ScheduleResult},
    policy::{AdjustmentKind, PatternPolicy, RandomPolicy, RateBasis},
    rate::ensure_finite,
    request::{AdjustableRateTerms, RateRequest},
    selector::{AdjustmentMode, ManualAdjustment, RateAdjustmentSelector},
    types::{IndexRate, Seed},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanForm {
    /// Loan term in payments.
    pub loan_term:            u32,
    pub first_due_date:       NaiveDate,
    /// Present for fixed-rate loans only.
    #[serde(default)]
    pub annual_interest_rate: Option<f64>,
    /// Present for adjustable-rate loans only.
    #[serde(default)]
    pub adjustable:           Option<AdjustableForm>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustableForm {
    pub initial_interest_rate: f64,
    /// Falls back to initial_interest_rate - margin.
    #[serde(default)]
    pub initial_index_rate:    Option<IndexRate>,
    #[serde(default)]
    pub margin:                f64,
    #[serde(default)]
    pub minimum_interest_rate: f64,
    #[serde(default)]
    pub max_rate_change:       Option<f64>,
    #[serde(default)]
    pub max_interest_rate:     Option<f64>,
    #[serde(default = "default_adjust_payment")]
    pub adjust_payment:        bool,
    #[serde(default)]
    pub fixed_rate_period:     Option<u32>,
    #[serde(default)]
    pub adjustment_frequency:  Option<u32>,
    #[serde(default)]
    pub schedule:              ScheduleForm,
}

fn default_adjust_payment() -> bool { true }

/// Which schedule source the user ticked, with its own inputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleForm {
    #[default]
    None,
    Manual {
        adjustments: Vec<ManualAdjustment>,
    },
    Pattern {
        adjustment_kind:      AdjustmentKind,
        adjustment_magnitude: f64,
        #[serde(default = "default_cadence")]
        cadence_periods:      u32,
        adjustment_count:     u32,
    },
    Random {
        target_adjustment_count: u32,
        max_absolute_adjustment: f64,
        #[serde(default = "default_cadence")]
        cadence_periods:         u32,
        #[serde(default)]
        random_seed:             Option<Seed>,
    },
}

fn default_cadence() -> u32 { 1 }

impl AdjustableForm {
    pub fn starting_index_rate(&self) -> IndexRate {
        self.initial_index_rate
            .unwrap_or(self.initial_interest_rate - self.margin)
    }

    pub fn terms(&self) -> AdjustableRateTerms {
        AdjustableRateTerms {
            initial_interest_rate: self.initial_interest_rate,
            initial_index_rate:    self.initial_index_rate,
            margin:                self.margin,
            max_rate_change:       self.max_rate_change,
            max_interest_rate:     self.max_interest_rate,
            adjust_payment:        self.adjust_payment,
            fixed_rate_period:     self.fixed_rate_period,
            adjustment_frequency:  self.adjustment_frequency,
            minimum_interest_rate: self.minimum_interest_rate,
        }
    }
}

impl LoanForm {
    /// Load a form document from `path`.
    /// In tests, use LoanForm::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Self::from_json(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))
    }

    pub fn from_json(content: &str) -> ScheduleResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Pin the random schedule to `seed`. No effect on other modes.
    pub fn with_seed(mut self, seed: Seed) -> Self {
        if let Some(ScheduleForm::Random { random_seed, .. }) =
            self.adjustable.as_mut().map(|a| &mut a.schedule)
        {
            *random_seed = Some(seed);
        }
        self
    }

    /// The schedule source selected on the form, or None for a
    /// fixed-rate loan.
    pub fn adjustment_mode(&self) -> ScheduleResult<Option<AdjustmentMode>> {
        let Some(adj) = &self.adjustable else {
            return Ok(None);
        };
        ensure_finite("initial_interest_rate", adj.initial_interest_rate)?;
        ensure_finite("margin", adj.margin)?;

        let basis = |cadence_periods| RateBasis {
            starting_index_rate: adj.starting_index_rate(),
            starting_date:       self.first_due_date,
            minimum_rate:        adj.minimum_interest_rate,
            cadence_periods,
        };

        let mode = match &adj.schedule {
            ScheduleForm::None => AdjustmentMode::None,
            ScheduleForm::Manual { adjustments } => AdjustmentMode::Manual {
                adjustments: adjustments.clone(),
            },
            ScheduleForm::Pattern {
                adjustment_kind,
                adjustment_magnitude,
                cadence_periods,
                adjustment_count,
            } => AdjustmentMode::Pattern(PatternPolicy {
                basis:                basis(*cadence_periods),
                adjustment_count:     *adjustment_count,
                adjustment_kind:      *adjustment_kind,
                adjustment_magnitude: *adjustment_magnitude,
            }),
            ScheduleForm::Random {
                target_adjustment_count,
                max_absolute_adjustment,
                cadence_periods,
                random_seed,
            } => AdjustmentMode::Random(RandomPolicy {
                basis:                   basis(*cadence_periods),
                total_periods:           self.loan_term,
                target_adjustment_count: *target_adjustment_count,
                max_absolute_adjustment: *max_absolute_adjustment,
                random_seed:             *random_seed,
            }),
        };
        Ok(Some(mode))
    }

    /// Rate fields of the calculation request for this form.
    pub fn build_request(&self, selector: &RateAdjustmentSelector) -> ScheduleResult<RateRequest> {
        if self.loan_term == 0 {
            return Err(ScheduleError::invalid("loan_term", "must be at least 1 payment"));
        }
        let request = match (self.adjustment_mode()?, &self.adjustable) {
            (Some(mode), Some(adj)) => {
                let events = selector.select(&mode).inspect_err(|e| {
                    log::warn!("form rejected in {} mode: {e}", mode.label());
                })?;
                RateRequest::adjustable(&adj.terms(), events)?
            }
            _ => {
                let rate = self.annual_interest_rate.ok_or_else(|| {
                    ScheduleError::invalid(
                        "annual_interest_rate",
                        "is required when the loan is not adjustable",
                    )
                })?;
                RateRequest::fixed(ensure_finite("annual_interest_rate", rate)?)
            }
        };
        Ok(request)
    }

    /// Form with hardcoded defaults for use in unit tests:
    /// a 60-payment adjustable loan stepping +0.5 every 12 payments.
    pub fn default_test() -> Self {
        Self {
            loan_term:            60,
            first_due_date:       NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            annual_interest_rate: None,
            adjustable: Some(AdjustableForm {
                initial_interest_rate: 4.0,
                initial_index_rate:    Some(2.5),
                margin:                1.5,
                minimum_interest_rate: 0.0,
                max_rate_change:       Some(2.0),
                max_interest_rate:     Some(10.0),
                adjust_payment:        true,
                fixed_rate_period:     Some(12),
                adjustment_frequency:  Some(12),
                schedule: ScheduleForm::Pattern {
                    adjustment_kind:      AdjustmentKind::FixedAmount,
                    adjustment_magnitude: 0.5,
                    cadence_periods:      12,
                    adjustment_count:     3,
                },
            }),
        }
    }
}
