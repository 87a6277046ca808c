//! Adjustable-rate schedule generation for the loan calculator.
//!
//! DEPENDENCY ORDER (leaves first):
//!   1. calendar, rate         — date and rate helpers
//!   2. rng                    — seeded, component-local streams
//!   3. pattern, random        — the two generators
//!   4. selector               — picks one schedule source
//!   5. request, config        — request fields and form documents

pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod generator;
pub mod pattern;
pub mod policy;
pub mod random;
pub mod rate;
pub mod request;
pub mod rng;
pub mod selector;
pub mod types;

pub use error::{ScheduleError, ScheduleResult};
pub use event::RateAdjustmentEvent;
pub use generator::ScheduleGenerator;
pub use pattern::PatternScheduleGenerator;
pub use random::RandomScheduleGenerator;
pub use selector::{AdjustmentMode, RateAdjustmentSelector};
