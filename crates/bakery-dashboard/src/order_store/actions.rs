//! Custom actions for the order store.

use crate::model::{OrderStatus, StatusChange};

#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Replaces the status unconditionally.
    SetStatus(OrderStatus),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    SetStatus(StatusChange),
}
