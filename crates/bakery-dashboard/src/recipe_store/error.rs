//! Error types for the recipe store.

use super::validation::ValidationErrors;
use store_framework::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecipeError {
    /// The form failed one or more field checks; nothing was stored.
    #[error("Invalid recipe: {0}")]
    Validation(ValidationErrors),

    #[error("Recipe store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<ValidationErrors> for RecipeError {
    fn from(e: ValidationErrors) -> Self {
        RecipeError::Validation(e)
    }
}

impl From<StoreError> for RecipeError {
    fn from(e: StoreError) -> Self {
        match e.entity_error::<RecipeError>() {
            Some(inner) => inner.clone(),
            None => RecipeError::StoreUnavailable(e.to_string()),
        }
    }
}
