//! # Dashboard
//!
//! Read-only aggregation for the landing page. Every slice is derived from the same stores the
//! dedicated views use, so a task added on the schedule or a status changed on the order page
//! shows up here on the next read. The weekly sales series is fixed placeholder data.

use crate::clients::{InventoryClient, OrderClient, ScheduleClient};
use crate::inventory_store::{self, InventoryError};
use crate::model::{BakingTask, InventoryItem, Order, OrderId, OrderStatus, StatusChange, Weekday};
use crate::order_store::{self, OrderError};
use crate::schedule_store::{self, ProductTotal, ScheduleError};
use crate::seed::WEEKLY_SALES;
use serde::Serialize;
use store_framework::DomainClient;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DashboardError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailySales {
    pub day: Weekday,
    pub revenue: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesOverview {
    /// Monday first.
    pub days: Vec<DailySales>,
    pub total: u32,
}

impl SalesOverview {
    pub fn weekly() -> Self {
        let days: Vec<DailySales> = WEEKLY_SALES
            .into_iter()
            .map(|(day, revenue)| DailySales { day, revenue })
            .collect();
        let total = days.iter().map(|d| d.revenue).sum();
        Self { days, total }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickInsights {
    pub most_scheduled: Option<ProductTotal>,
    pub low_stock_count: usize,
}

/// Everything the dashboard shows, read in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub today: Weekday,
    pub todays_tasks: Vec<BakingTask>,
    pub pending_orders: Vec<Order>,
    pub low_inventory: Vec<InventoryItem>,
    pub sales: SalesOverview,
    pub insights: QuickInsights,
}

#[derive(Clone)]
pub struct Dashboard {
    schedule: ScheduleClient,
    inventory: InventoryClient,
    orders: OrderClient,
}

impl Dashboard {
    pub fn new(schedule: ScheduleClient, inventory: InventoryClient, orders: OrderClient) -> Self {
        Self {
            schedule,
            inventory,
            orders,
        }
    }

    pub async fn todays_tasks(&self, today: Weekday) -> Result<Vec<BakingTask>, DashboardError> {
        Ok(self.schedule.tasks_by_day(today).await?)
    }

    /// Orders not yet completed or cancelled.
    pub async fn pending_orders(&self) -> Result<Vec<Order>, DashboardError> {
        Ok(self.orders.open_orders().await?)
    }

    pub async fn low_inventory(&self) -> Result<Vec<InventoryItem>, DashboardError> {
        Ok(self.inventory.low_stock().await?)
    }

    pub fn sales_overview(&self) -> SalesOverview {
        SalesOverview::weekly()
    }

    pub async fn quick_insights(&self) -> Result<QuickInsights, DashboardError> {
        let most_scheduled = self.schedule.most_scheduled_product().await?;
        let low_stock_count = self.inventory.low_stock().await?.len();
        Ok(QuickInsights {
            most_scheduled,
            low_stock_count,
        })
    }

    /// Same operation as the order page's status menu.
    pub async fn set_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<StatusChange, DashboardError> {
        Ok(self.orders.set_status(id, status).await?)
    }

    /// Reads all three stores concurrently and derives every slice from those snapshots.
    #[instrument(skip(self))]
    pub async fn snapshot(&self, today: Weekday) -> Result<DashboardSnapshot, DashboardError> {
        let (tasks, items, orders) = tokio::try_join!(
            async { self.schedule.list().await.map_err(DashboardError::from) },
            async { self.inventory.list().await.map_err(DashboardError::from) },
            async { self.orders.list().await.map_err(DashboardError::from) },
        )?;

        let low_inventory: Vec<InventoryItem> =
            inventory_store::low_stock(&items).cloned().collect();
        Ok(DashboardSnapshot {
            today,
            todays_tasks: schedule_store::tasks_by_day(&tasks, today).cloned().collect(),
            pending_orders: order_store::open_orders(&orders).cloned().collect(),
            insights: QuickInsights {
                most_scheduled: schedule_store::most_scheduled_product(&tasks),
                low_stock_count: low_inventory.len(),
            },
            low_inventory,
            sales: SalesOverview::weekly(),
        })
    }
}
