//! Filters over an inventory snapshot.

use crate::model::{contains_ignore_case, InventoryItem, StockTier};

/// Items whose name contains `term`, ignoring case. An empty term keeps everything.
pub fn search<'a>(
    items: &'a [InventoryItem],
    term: &'a str,
) -> impl Iterator<Item = &'a InventoryItem> {
    items
        .iter()
        .filter(move |item| contains_ignore_case(&item.name, term))
}

/// Items below the healthy band (ratio under 50%).
pub fn low_stock(items: &[InventoryItem]) -> impl Iterator<Item = &InventoryItem> {
    items
        .iter()
        .filter(|item| item.stock_level().tier != StockTier::Healthy)
}
