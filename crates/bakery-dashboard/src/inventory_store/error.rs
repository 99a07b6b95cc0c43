//! Error types for the inventory store.

use store_framework::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Inventory item not found: {0}")]
    NotFound(String),

    #[error("Inventory store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<StoreError> for InventoryError {
    fn from(e: StoreError) -> Self {
        if let Some(inner) = e.entity_error::<InventoryError>() {
            return inner.clone();
        }
        match e {
            StoreError::NotFound(id) => InventoryError::NotFound(id),
            other => InventoryError::StoreUnavailable(other.to_string()),
        }
    }
}
