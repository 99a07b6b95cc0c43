//! # Order Client
//!
//! Status changes and status tabs for the order view. The dashboard uses the same client, so a
//! change made from either place lands in the one order store.
use crate::model::{Order, OrderId, OrderStatus, StatusChange, StatusFilter};
use crate::order_store::{self, OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use store_framework::{DomainClient, StoreClient, StoreError};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Replaces an order's status. Unknown ids fail with [`OrderError::NotFound`].
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<StatusChange, OrderError> {
        debug!("Sending request");
        let OrderActionResult::SetStatus(change) = self
            .inner
            .perform_action(id.clone(), OrderAction::SetStatus(status))
            .await?;
        info!(%id, from = %change.previous, to = %change.current, "Order status changed");
        Ok(change)
    }

    #[instrument(skip(self))]
    pub async fn by_status(&self, filter: StatusFilter) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(order_store::by_status(&orders, filter).cloned().collect())
    }

    /// Same as [`by_status`](Self::by_status), taking the tab value as text
    /// (`all` or a status label).
    pub async fn by_status_label(&self, label: &str) -> Result<Vec<Order>, OrderError> {
        let filter: StatusFilter = label.parse()?;
        self.by_status(filter).await
    }

    /// Orders that are neither completed nor cancelled.
    #[instrument(skip(self))]
    pub async fn open_orders(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(order_store::open_orders(&orders).cloned().collect())
    }
}

#[async_trait]
impl DomainClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> OrderError {
        OrderError::from(e)
    }
}
