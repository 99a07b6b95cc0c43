//! Customer orders and their fulfilment status.

use crate::model::Tone;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Order number as printed on the ticket, e.g. `ORD-101`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(format!("ORD-{id}"))
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Ready for Pickup")]
    ReadyForPickup,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::ReadyForPickup,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::ReadyForPickup => "Ready for Pickup",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            OrderStatus::Pending => Tone::Neutral,
            OrderStatus::InProgress => Tone::Info,
            OrderStatus::ReadyForPickup => Tone::Warning,
            OrderStatus::Completed => Tone::Success,
            OrderStatus::Cancelled => Tone::Danger,
        }
    }

    /// Completed and cancelled orders need no further attention.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Entries of the "Update Status" menu: every status except this one.
    pub fn alternatives(self) -> impl Iterator<Item = OrderStatus> {
        OrderStatus::ALL.into_iter().filter(move |status| *status != self)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that is neither a status label nor `all`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// The six order tabs: everything, or one exact status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFilter {
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl From<OrderStatus> for StatusFilter {
    fn from(status: OrderStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    /// `all` or one of the five status labels; nothing else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub customer_name: String,
    /// Free text, e.g. "2024-08-25" or "Today, 2:00 PM".
    pub due_date: String,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(
        order_id: impl Into<OrderId>,
        customer_name: impl Into<String>,
        due_date: impl Into<String>,
        status: OrderStatus,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            customer_name: customer_name.into(),
            due_date: due_date.into(),
            status,
        }
    }
}

/// What a status change replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub previous: OrderStatus,
    pub current: OrderStatus,
}
