use super::config::SystemConfig;
use crate::clients::{InventoryClient, OrderClient, RecipeClient, ScheduleClient};
use crate::dashboard::Dashboard;
use crate::{inventory_store, order_store, recipe_store, schedule_store};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("{failed} store task(s) failed during shutdown")]
    TasksFailed { failed: usize },
}

/// The running set of stores behind the dashboard.
///
/// # Example
///
/// ```ignore
/// let system = BakerySystem::new(SystemConfig::from_env());
///
/// system.orders.set_status("ORD-101".into(), OrderStatus::InProgress).await?;
/// let snapshot = system.dashboard().snapshot(Weekday::Monday).await?;
///
/// system.shutdown().await?;
/// ```
pub struct BakerySystem {
    pub schedule: ScheduleClient,
    pub inventory: InventoryClient,
    pub orders: OrderClient,
    pub recipes: RecipeClient,

    /// Task handles for the store actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BakerySystem {
    /// Spawns the four stores. Must be called inside a Tokio runtime.
    ///
    /// A zero channel capacity is replaced by the default.
    pub fn new(config: SystemConfig) -> Self {
        let SystemConfig {
            channel_capacity,
            seed_placeholder_data: seed,
        } = config.sanitized();
        info!(channel_capacity, seed, "Starting bakery system");

        let (schedule_store, schedule) = schedule_store::new(channel_capacity, seed);
        let (inventory_store, inventory) = inventory_store::new(channel_capacity, seed);
        let (order_store, orders) = order_store::new(channel_capacity, seed);
        let (recipe_store, recipes) = recipe_store::new(channel_capacity, seed);

        let handles = vec![
            tokio::spawn(schedule_store.run()),
            tokio::spawn(inventory_store.run()),
            tokio::spawn(order_store.run()),
            tokio::spawn(recipe_store.run()),
        ];

        Self {
            schedule: ScheduleClient::new(schedule),
            inventory: InventoryClient::new(inventory),
            orders: OrderClient::new(orders),
            recipes: RecipeClient::new(recipes),
            handles,
        }
    }

    /// A dashboard reading from this system's stores.
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(
            self.schedule.clone(),
            self.inventory.clone(),
            self.orders.clone(),
        )
    }

    /// Drops the clients and waits for every store to stop.
    ///
    /// Returns an error if any store task panicked.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down bakery system...");

        drop(self.schedule);
        drop(self.inventory);
        drop(self.orders);
        drop(self.recipes);

        let mut failed = 0;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(ShutdownError::TasksFailed { failed });
        }
        info!("Bakery system shut down");
        Ok(())
    }
}
