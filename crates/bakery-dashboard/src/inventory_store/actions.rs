//! Custom actions for the inventory store.
//!
//! Handled by [`StoreEntity::handle_action`](store_framework::StoreEntity::handle_action) on
//! [`InventoryItem`](crate::model::InventoryItem).

use crate::model::StockLevel;

#[derive(Debug, Clone, PartialEq)]
pub enum InventoryAction {
    /// Adds a signed amount to the current stock.
    ///
    /// Negative deltas stop at zero; positive ones may push stock past `max_stock`.
    AdjustStock(i64),
    /// Reads the ratio and tier without modifying anything.
    StockLevel,
}

/// Results from [`InventoryAction`]s; variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    /// Stock after the adjustment.
    AdjustStock(u32),
    StockLevel(StockLevel),
}
