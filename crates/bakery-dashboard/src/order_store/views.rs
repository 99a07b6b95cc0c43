//! Status tabs over an order snapshot.

use crate::model::{Order, StatusFilter};

/// Orders shown under a tab. `StatusFilter::All` keeps the full collection.
pub fn by_status(orders: &[Order], filter: StatusFilter) -> impl Iterator<Item = &Order> {
    orders
        .iter()
        .filter(move |order| filter.matches(order.status))
}

/// Orders that still need work: anything not completed or cancelled.
pub fn open_orders(orders: &[Order]) -> impl Iterator<Item = &Order> {
    orders.iter().filter(|order| !order.status.is_terminal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;

    fn orders() -> Vec<Order> {
        vec![
            Order::new("ORD-101", "Alice Johnson", "2024-08-25", OrderStatus::Pending),
            Order::new("ORD-104", "Diana Miller", "2024-08-22", OrderStatus::Completed),
            Order::new("ORD-106", "Frank White", "2024-08-21", OrderStatus::Cancelled),
            Order::new("ORD-108", "Henry Wilson", "2024-08-24", OrderStatus::ReadyForPickup),
        ]
    }

    #[test]
    fn test_all_returns_everything() {
        let orders = orders();
        assert_eq!(by_status(&orders, StatusFilter::All).count(), orders.len());
    }

    #[test]
    fn test_concrete_status_matches_exactly() {
        let orders = orders();
        let done: Vec<_> = by_status(&orders, OrderStatus::Completed.into())
            .map(|o| o.order_id.to_string())
            .collect();
        assert_eq!(done, vec!["ORD-104"]);
        assert_eq!(
            by_status(&orders, OrderStatus::InProgress.into()).count(),
            0
        );
    }

    #[test]
    fn test_open_orders_skip_terminal() {
        let orders = orders();
        let open: Vec<_> = open_orders(&orders)
            .map(|o| o.order_id.to_string())
            .collect();
        assert_eq!(open, vec!["ORD-101", "ORD-108"]);
    }
}
