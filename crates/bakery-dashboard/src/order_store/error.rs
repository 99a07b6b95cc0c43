//! Error types for the order store.

use crate::model::UnknownStatus;
use store_framework::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Text that is not one of the five statuses (or `all`, where a filter is expected).
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    #[error("Order store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<UnknownStatus> for OrderError {
    fn from(e: UnknownStatus) -> Self {
        OrderError::UnknownStatus(e.0)
    }
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        if let Some(inner) = e.entity_error::<OrderError>() {
            return inner.clone();
        }
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::StoreUnavailable(other.to_string()),
        }
    }
}
