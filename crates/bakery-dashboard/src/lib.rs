//! # Bakery Dashboard
//!
//! State core of a small bakery's admin dashboard: the weekly baking schedule, ingredient
//! inventory, customer orders and recipes, each held by its own store actor, plus a read-only
//! dashboard over all of them.
//!
//! - **[model]**: plain records ([`BakingTask`](model::BakingTask),
//!   [`InventoryItem`](model::InventoryItem), [`Order`](model::Order), [`Recipe`](model::Recipe))
//!   and their status/tone tables.
//! - **Stores**: [`schedule_store`], [`inventory_store`], [`order_store`], [`recipe_store`],
//!   each a [`StoreEntity`](store_framework::StoreEntity) implementation plus pure views.
//! - **[clients]**: typed wrappers the views call.
//! - **[lifecycle]**: [`BakerySystem`](lifecycle::BakerySystem) and its configuration.
//! - **[dashboard]**: aggregation for the landing page.
//!
//! ```rust
//! use bakery_dashboard::lifecycle::{BakerySystem, SystemConfig};
//! use bakery_dashboard::model::{OrderStatus, Weekday};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = BakerySystem::new(SystemConfig::default());
//!
//!     system.orders.set_status("ORD-101".into(), OrderStatus::Completed).await?;
//!     let snapshot = system.dashboard().snapshot(Weekday::Monday).await?;
//!     assert_eq!(snapshot.todays_tasks.len(), 2);
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod dashboard;
pub mod inventory_store;
pub mod lifecycle;
pub mod model;
pub mod order_store;
pub mod recipe_store;
pub mod schedule_store;
pub mod seed;

pub use dashboard::{Dashboard, DashboardError, DashboardSnapshot};
