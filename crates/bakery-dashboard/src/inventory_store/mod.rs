//! # Inventory Store
//!
//! Owns the ingredient stock records and the stock-changing actions.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_framework::StoreEntity) implementation for
//!   [`InventoryItem`]
//! - [`error`] - [`InventoryError`]
//! - [`actions`] - [`InventoryAction`] and [`InventoryActionResult`]
//! - [`views`] - search and low-stock filters
//! - [`new()`] - Factory function that creates the store and its client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! // +1 / -1 buttons on an inventory row
//! inventory_client.increment(id).await?;
//! inventory_client.decrement(id).await?;
//!
//! // Ratio and tier for the progress bar
//! let level = inventory_client.stock_level(id).await?;
//! ```
//!
//! Stock is clamped at zero on the way down and unbounded on the way up.

pub mod actions;
pub mod entity;
pub mod error;
pub mod views;

pub use actions::*;
pub use error::*;
pub use views::*;

use crate::model::InventoryItem;
use crate::seed;
use store_framework::{StoreActor, StoreClient};

/// Creates the inventory store and its client, optionally holding the placeholder shelf.
pub fn new(
    capacity: usize,
    seed: bool,
) -> (StoreActor<InventoryItem>, StoreClient<InventoryItem>) {
    if seed {
        StoreActor::seeded(capacity, seed::inventory_items())
    } else {
        StoreActor::new(capacity)
    }
}
