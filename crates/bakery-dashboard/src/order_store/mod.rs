//! # Order Store
//!
//! Owns customer orders. Orders only exist as seed data: the entity's creation payload is
//! [`Infallible`](std::convert::Infallible), so there is no way to ask this store for a new
//! order. The one mutation is a status change.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_framework::StoreEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`views`] - status tab filtering
//! - [`new()`] - Factory function that creates the store and its client
//!
//! Any status may be set from any other, including the current one.

pub mod actions;
pub mod entity;
pub mod error;
pub mod views;

pub use actions::*;
pub use error::*;
pub use views::*;

use crate::model::Order;
use crate::seed;
use store_framework::{StoreActor, StoreClient};

/// Creates the order store and its client, optionally holding the placeholder orders.
pub fn new(capacity: usize, seed: bool) -> (StoreActor<Order>, StoreClient<Order>) {
    if seed {
        StoreActor::seeded(capacity, seed::orders())
    } else {
        StoreActor::new(capacity)
    }
}
