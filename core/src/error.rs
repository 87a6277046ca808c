use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A precondition on the adjustment policy does not hold.
    /// Raised before any event is produced.
    #[error("Invalid policy: {field} {reason}")]
    InvalidPolicy { field: &'static str, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScheduleError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidPolicy { field, reason: reason.into() }
    }

    pub fn is_invalid_policy(&self) -> bool {
        matches!(self, Self::InvalidPolicy { .. })
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
