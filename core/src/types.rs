//! Shared primitive types used across the schedule generators.

/// An index rate, expressed in percent (2.5 means 2.5%).
pub type IndexRate = f64;

/// A 1-based payment period number within the loan term.
pub type PeriodIndex = u32;

/// Seed for the component-local random streams.
pub type Seed = u64;
