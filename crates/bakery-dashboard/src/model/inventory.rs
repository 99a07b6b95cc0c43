//! Ingredient stock records and the stock-level classification.

use crate::model::Tone;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for inventory items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// One ingredient and how much of it is on the shelf.
///
/// `current_stock` never goes below zero but may exceed `max_stock`; only decrements clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub current_stock: u32,
    pub max_stock: u32,
    /// Free text, e.g. "kg" or "units".
    pub unit: String,
}

impl InventoryItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        current_stock: u32,
        max_stock: u32,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            current_stock,
            max_stock,
            unit: unit.into(),
        }
    }

    pub fn stock_ratio(&self) -> f64 {
        stock_ratio(self.current_stock, self.max_stock)
    }

    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_ratio(self.stock_ratio())
    }

    /// Applies a signed stock change.
    ///
    /// Increments are unbounded (past `max_stock` is fine); decrements stop at zero.
    pub fn adjust(&mut self, delta: i64) -> u32 {
        let next = i64::from(self.current_stock).saturating_add(delta);
        self.current_stock = u32::try_from(next.max(0)).unwrap_or(u32::MAX);
        self.current_stock
    }
}

/// Fill percentage, `current / max * 100`, or 0 when `max` is 0.
pub fn stock_ratio(current_stock: u32, max_stock: u32) -> f64 {
    if max_stock > 0 {
        f64::from(current_stock) / f64::from(max_stock) * 100.0
    } else {
        0.0
    }
}

/// Three-band classification of a stock ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockTier {
    /// Below 25%.
    Critical,
    /// 25% up to, not including, 50%.
    Low,
    /// 50% and above.
    Healthy,
}

impl StockTier {
    /// Bands are closed at the bottom: exactly 25 is `Low`, exactly 50 is `Healthy`.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 25.0 {
            StockTier::Critical
        } else if ratio < 50.0 {
            StockTier::Low
        } else {
            StockTier::Healthy
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockTier::Critical => "Critical",
            StockTier::Low => "Low",
            StockTier::Healthy => "Healthy",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            StockTier::Critical => Tone::Danger,
            StockTier::Low => Tone::Warning,
            StockTier::Healthy => Tone::Success,
        }
    }
}

/// Ratio plus the tier it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockLevel {
    pub ratio: f64,
    pub tier: StockTier,
}

impl StockLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            tier: StockTier::from_ratio(ratio),
        }
    }
}

/// Validated payload for a new inventory item.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryCreate {
    pub name: String,
    pub current_stock: u32,
    pub max_stock: u32,
    pub unit: String,
}

/// Raw text from the "Add New Ingredient" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientForm {
    pub name: String,
    pub current_stock: String,
    pub max_stock: String,
    pub unit: String,
}

impl IngredientForm {
    /// Turns the form into a creation payload.
    ///
    /// Returns `None` when name, max stock or unit is empty, or when max stock is not a whole
    /// number. Current stock falls back to 0 when empty or unparseable.
    pub fn parse(&self) -> Option<InventoryCreate> {
        if self.name.is_empty() || self.max_stock.is_empty() || self.unit.is_empty() {
            return None;
        }
        let max_stock = self.max_stock.trim().parse::<u32>().ok()?;
        let current_stock = self.current_stock.trim().parse::<u32>().unwrap_or(0);
        Some(InventoryCreate {
            name: self.name.clone(),
            current_stock,
            max_stock,
            unit: self.unit.clone(),
        })
    }
}
