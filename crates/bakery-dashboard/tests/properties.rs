use bakery_dashboard::clients::InventoryClient;
use bakery_dashboard::inventory_store::{self, InventoryAction, InventoryActionResult};
use bakery_dashboard::model::{
    IngredientForm, InventoryItem, ItemId, Order, OrderStatus, StatusFilter, StockTier,
};
use bakery_dashboard::order_store::{self, OrderAction};
use bakery_dashboard::seed;
use proptest::prelude::*;
use store_framework::{DomainClient, StoreEntity};

fn arb_status() -> impl Strategy<Value = OrderStatus> {
    prop::sample::select(OrderStatus::ALL.to_vec())
}

fn arb_unparseable_stock() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-zA-Z]{1,6}",
        Just("-3".to_string()),
        Just("1.5".to_string()),
    ]
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn added_item_without_stock_starts_at_zero(
        name in "[A-Za-z][A-Za-z ]{0,15}",
        max_stock in 1u32..10_000,
        unit in "[a-z]{1,5}",
        current in arb_unparseable_stock(),
    ) {
        let (before, after, new_id) = block_on(async {
            let (store, client) = inventory_store::new(8, true);
            tokio::spawn(store.run());
            let inventory = InventoryClient::new(client);

            let before = inventory.search("").await.unwrap();
            let form = IngredientForm {
                name: name.clone(),
                current_stock: current.clone(),
                max_stock: max_stock.to_string(),
                unit: unit.clone(),
            };
            let new_id = inventory.add_item(&form).await.unwrap();
            let after = inventory.search("").await.unwrap();
            (before, after, new_id)
        });

        let new_id = new_id.expect("complete form adds an item");
        prop_assert_eq!(after.len(), before.len() + 1);
        let added: Vec<_> = after.iter().filter(|item| item.id == new_id).collect();
        prop_assert_eq!(added.len(), 1);
        prop_assert_eq!(added[0].current_stock, 0);
        prop_assert_eq!(&added[0].name, &name);
    }

    #[test]
    fn repeated_decrement_stops_at_zero(current in 0u32..200, extra in 1u32..20) {
        let mut item = InventoryItem::new(ItemId(1), "Yeast", current, 50, "g");
        for _ in 0..(current + extra) {
            let result = item.handle_action(InventoryAction::AdjustStock(-1)).unwrap();
            prop_assert!(matches!(result, InventoryActionResult::AdjustStock(_)));
        }
        prop_assert_eq!(item.current_stock, 0);
    }

    #[test]
    fn exact_quarter_is_low_and_exact_half_is_healthy(k in 1u32..1_000_000) {
        let quarter = InventoryItem::new(ItemId(1), "Flour", k, k * 4, "kg");
        prop_assert_eq!(quarter.stock_ratio(), 25.0);
        prop_assert_eq!(quarter.stock_level().tier, StockTier::Low);

        let half = InventoryItem::new(ItemId(2), "Flour", k, k * 2, "kg");
        prop_assert_eq!(half.stock_ratio(), 50.0);
        prop_assert_eq!(half.stock_level().tier, StockTier::Healthy);
    }

    #[test]
    fn set_status_then_filter_includes_order(index in 0usize..8, status in arb_status()) {
        let mut orders: Vec<Order> = seed::orders();
        orders[index].handle_action(OrderAction::SetStatus(status)).unwrap();
        let target = orders[index].order_id.clone();

        let tab: Vec<_> = order_store::by_status(&orders, StatusFilter::Only(status)).collect();
        prop_assert!(tab.iter().any(|order| order.order_id == target));
        prop_assert_eq!(order_store::by_status(&orders, StatusFilter::All).count(), orders.len());
    }
}

#[test]
fn search_with_empty_term_is_identity() {
    let items = seed::inventory_items();
    let found: Vec<_> = inventory_store::search(&items, "").cloned().collect();
    assert_eq!(found, items);
}

#[tokio::test]
async fn inventory_list_is_store_order() {
    let (store, client) = inventory_store::new(8, true);
    tokio::spawn(store.run());
    let inventory = InventoryClient::new(client);
    let ids: Vec<_> = inventory.list().await.unwrap().into_iter().map(|i| i.id).collect();
    assert_eq!(ids, (1..=8).map(ItemId).collect::<Vec<_>>());
}
