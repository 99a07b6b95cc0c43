//! [`StoreEntity`] implementation for [`InventoryItem`].

use super::actions::{InventoryAction, InventoryActionResult};
use super::error::InventoryError;
use crate::model::{InventoryCreate, InventoryItem, ItemId};
use store_framework::StoreEntity;

impl StoreEntity for InventoryItem {
    type Id = ItemId;
    type Create = InventoryCreate;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Error = InventoryError;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn from_create_params(id: ItemId, params: InventoryCreate) -> Result<Self, InventoryError> {
        Ok(InventoryItem::new(
            id,
            params.name,
            params.current_stock,
            params.max_stock,
            params.unit,
        ))
    }

    /// # Actions
    /// - `AdjustStock`: applies the delta and returns the new stock
    /// - `StockLevel`: returns ratio and tier
    fn handle_action(
        &mut self,
        action: InventoryAction,
    ) -> Result<InventoryActionResult, InventoryError> {
        match action {
            InventoryAction::AdjustStock(delta) => {
                Ok(InventoryActionResult::AdjustStock(self.adjust(delta)))
            }
            InventoryAction::StockLevel => Ok(InventoryActionResult::StockLevel(self.stock_level())),
        }
    }
}
