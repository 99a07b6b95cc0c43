//! # Recipe Store
//!
//! Owns the recipe collection, most recent first. Creation runs the form checks inside the
//! store, so a rejected form never touches the collection.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_framework::StoreEntity) implementation for [`Recipe`]
//! - [`error`] - [`RecipeError`]
//! - [`validation`] - field checks and their messages
//! - [`views`] - title search and the confirmation toast
//! - [`new()`] - Factory function that creates the store and its client

pub mod entity;
pub mod error;
pub mod validation;
pub mod views;

pub use error::*;
pub use validation::*;
pub use views::*;

use crate::model::Recipe;
use crate::seed;
use store_framework::{StoreActor, StoreClient};

/// Creates the recipe store and its client, optionally holding the placeholder recipes.
pub fn new(capacity: usize, seed: bool) -> (StoreActor<Recipe>, StoreClient<Recipe>) {
    if seed {
        StoreActor::seeded(capacity, seed::recipes())
    } else {
        StoreActor::new(capacity)
    }
}
