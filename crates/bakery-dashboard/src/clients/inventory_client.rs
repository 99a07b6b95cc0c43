//! # Inventory Client
//!
//! Provides the inventory view's operations on top of `StoreClient<InventoryItem>`.
use crate::inventory_store::{self, InventoryAction, InventoryActionResult, InventoryError};
use crate::model::{IngredientForm, InventoryItem, ItemId, StockLevel};
use async_trait::async_trait;
use store_framework::{DomainClient, StoreClient, StoreError};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct InventoryClient {
    inner: StoreClient<InventoryItem>,
}

impl InventoryClient {
    pub fn new(inner: StoreClient<InventoryItem>) -> Self {
        Self { inner }
    }

    /// Adds an ingredient from the dialog.
    ///
    /// An incomplete form adds nothing and returns `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn add_item(&self, form: &IngredientForm) -> Result<Option<ItemId>, InventoryError> {
        let Some(params) = form.parse() else {
            debug!("Incomplete ingredient form ignored");
            return Ok(None);
        };
        let id = self.inner.create(params).await?;
        info!(%id, "Ingredient added");
        Ok(Some(id))
    }

    /// Applies a signed change and returns the new stock.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: ItemId, delta: i64) -> Result<u32, InventoryError> {
        debug!("Adjusting stock for {} by {}", id, delta);
        match self
            .inner
            .perform_action(id, InventoryAction::AdjustStock(delta))
            .await?
        {
            InventoryActionResult::AdjustStock(stock) => Ok(stock),
            other => Err(unexpected(other)),
        }
    }

    pub async fn increment(&self, id: ItemId) -> Result<u32, InventoryError> {
        self.adjust_stock(id, 1).await
    }

    pub async fn decrement(&self, id: ItemId) -> Result<u32, InventoryError> {
        self.adjust_stock(id, -1).await
    }

    #[instrument(skip(self))]
    pub async fn stock_level(&self, id: ItemId) -> Result<StockLevel, InventoryError> {
        match self
            .inner
            .perform_action(id, InventoryAction::StockLevel)
            .await?
        {
            InventoryActionResult::StockLevel(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Name search; the empty term returns everything.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Result<Vec<InventoryItem>, InventoryError> {
        let items = self.list().await?;
        Ok(inventory_store::search(&items, term).cloned().collect())
    }

    /// Items in the critical or low band.
    #[instrument(skip(self))]
    pub async fn low_stock(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        let items = self.list().await?;
        Ok(inventory_store::low_stock(&items).cloned().collect())
    }
}

fn unexpected(result: InventoryActionResult) -> InventoryError {
    InventoryError::StoreUnavailable(format!("Unexpected action result: {result:?}"))
}

#[async_trait]
impl DomainClient<InventoryItem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &StoreClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: StoreError) -> InventoryError {
        InventoryError::from(e)
    }
}
