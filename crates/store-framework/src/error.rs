//! # Framework Errors
//!
//! Errors raised by the store plumbing itself, independent of any record type.
//! Each store maps these into its own error enum at the client boundary.

/// Errors that can occur within the store framework.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Returns the record-level error if this wraps one of type `E`.
    pub fn entity_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            StoreError::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
