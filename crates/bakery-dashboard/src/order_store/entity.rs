//! [`StoreEntity`] implementation for [`Order`].

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::model::{Order, OrderId, StatusChange};
use std::convert::Infallible;
use store_framework::StoreEntity;

impl StoreEntity for Order {
    type Id = OrderId;
    type Create = Infallible;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.order_id
    }

    fn from_create_params(_id: OrderId, params: Infallible) -> Result<Self, OrderError> {
        match params {}
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::SetStatus(status) => {
                let previous = std::mem::replace(&mut self.status, status);
                Ok(OrderActionResult::SetStatus(StatusChange {
                    previous,
                    current: status,
                }))
            }
        }
    }
}
