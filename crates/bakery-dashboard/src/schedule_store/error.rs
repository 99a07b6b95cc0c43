//! Error types for the schedule store.

use crate::model::UnknownDay;
use store_framework::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScheduleError {
    /// The day picker sent something other than a full English day name.
    #[error("Invalid day: {0}")]
    InvalidDay(String),

    /// A required form field was empty or only whitespace.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Schedule store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<UnknownDay> for ScheduleError {
    fn from(e: UnknownDay) -> Self {
        ScheduleError::InvalidDay(e.0)
    }
}

impl From<StoreError> for ScheduleError {
    fn from(e: StoreError) -> Self {
        match e.entity_error::<ScheduleError>() {
            Some(inner) => inner.clone(),
            None => ScheduleError::StoreUnavailable(e.to_string()),
        }
    }
}
