//! Type-safe wrappers around [`StoreClient`](store_framework::StoreClient), one per view.

pub mod inventory_client;
pub mod order_client;
pub mod recipe_client;
pub mod schedule_client;

pub use inventory_client::*;
pub use order_client::*;
pub use recipe_client::*;
pub use schedule_client::*;
