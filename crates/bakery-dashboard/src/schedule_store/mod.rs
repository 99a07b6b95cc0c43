//! # Schedule Store
//!
//! Owns the week's baking tasks. Tasks are only ever appended: there is no update, delete or
//! status change, so the entity declares no actions.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_framework::StoreEntity) implementation for
//!   [`BakingTask`]
//! - [`error`] - [`ScheduleError`]
//! - [`views`] - day lanes and weekly totals over a task snapshot
//! - [`new()`] - Factory function that creates the store and its client
//!
//! ## Usage
//!
//! ```rust
//! use bakery_dashboard::schedule_store::{self, TaskForm};
//! use bakery_dashboard::clients::ScheduleClient;
//! use bakery_dashboard::model::Weekday;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (store, generic_client) = schedule_store::new(8, false);
//!     let client = ScheduleClient::new(generic_client);
//!     tokio::spawn(store.run());
//!
//!     let form = TaskForm {
//!         recipe: "Baguette".to_string(),
//!         day: "Friday".to_string(),
//!         ..TaskForm::default()
//!     };
//!     client.add_task(&form).await?;
//!
//!     let friday = client.tasks_by_day(Weekday::Friday).await?;
//!     assert_eq!(friday[0].quantity, 12);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod views;

pub use error::*;
pub use views::*;

use crate::model::BakingTask;
use crate::seed;
use store_framework::{StoreActor, StoreClient};

/// Creates the schedule store and its client, optionally holding the placeholder week.
pub fn new(capacity: usize, seed: bool) -> (StoreActor<BakingTask>, StoreClient<BakingTask>) {
    if seed {
        StoreActor::seeded(capacity, seed::baking_tasks())
    } else {
        StoreActor::new(capacity)
    }
}
