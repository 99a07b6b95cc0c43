//! Boots the bakery system with placeholder data, walks through every view's operations once
//! and logs what each one returns.

use bakery_dashboard::lifecycle::{BakerySystem, SystemConfig};
use bakery_dashboard::model::{IngredientForm, ItemId, OrderStatus, RecipeForm, StatusFilter, Weekday};
use bakery_dashboard::schedule_store::TaskForm;
use chrono::Datelike;
use store_framework::tracing::setup_tracing;
use tracing::{info, warn, Instrument};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = SystemConfig::from_env();
    let system = BakerySystem::new(config);
    let today = Weekday::from(chrono::Local::now().weekday());
    info!(%today, "Bakery dashboard starting");

    async {
        let form = TaskForm {
            recipe: "Cinnamon Buns".to_string(),
            day: today.to_string(),
            ..TaskForm::default()
        };
        let id = system.schedule.add_task(&form).await?;
        info!(%id, "Added task");

        for lane in system.schedule.week_lanes().await? {
            info!(day = %lane.day, tasks = lane.tasks.len(), "Lane");
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(tracing::info_span!("schedule"))
    .await?;

    async {
        let flour = ItemId(1);
        let stock = system.inventory.increment(flour).await?;
        let level = system.inventory.stock_level(flour).await?;
        info!(stock, ratio = level.ratio, tier = level.tier.label(), "Flour adjusted");

        let form = IngredientForm {
            name: "Rye Flour".to_string(),
            current_stock: String::new(),
            max_stock: "40".to_string(),
            unit: "kg".to_string(),
        };
        match system.inventory.add_item(&form).await? {
            Some(id) => info!(%id, "Ingredient added"),
            None => warn!("Ingredient form incomplete"),
        }

        let matches = system.inventory.search("flour").await?;
        info!(matches = matches.len(), "Searched for flour");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(tracing::info_span!("inventory"))
    .await?;

    async {
        let change = system
            .orders
            .set_status("ORD-101".into(), OrderStatus::ReadyForPickup)
            .await?;
        let menu: Vec<&str> = change.current.alternatives().map(|s| s.as_str()).collect();
        info!(?menu, "Status menu for ORD-101");

        for filter in std::iter::once(StatusFilter::All)
            .chain(OrderStatus::ALL.into_iter().map(StatusFilter::from))
        {
            let orders = system.orders.by_status(filter).await?;
            info!(?filter, count = orders.len(), "Order tab");
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(tracing::info_span!("orders"))
    .await?;

    async {
        match system
            .recipes
            .add_recipe(RecipeForm::new("ab", 10, "https://x.com/i.png"))
            .await
        {
            Ok(added) => info!(slug = %added.recipe.slug, "Unexpectedly accepted"),
            Err(e) => info!(error = %e, "Short title rejected"),
        }

        let added = system
            .recipes
            .add_recipe(RecipeForm::new(
                "Honey Oat Loaf",
                75,
                "https://images.example.com/honey-oat.png",
            ))
            .await?;
        info!(
            title = %added.toast.title,
            description = %added.toast.description,
            path = %added.recipe.detail_path(),
            "Recipe toast"
        );
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(tracing::info_span!("recipes"))
    .await?;

    let snapshot = system.dashboard().snapshot(today).await?;
    info!(
        todays_tasks = snapshot.todays_tasks.len(),
        pending_orders = snapshot.pending_orders.len(),
        low_inventory = snapshot.low_inventory.len(),
        weekly_revenue = snapshot.sales.total,
        "Dashboard"
    );
    if let Some(top) = &snapshot.insights.most_scheduled {
        info!(product = %top.product_name, quantity = top.quantity, "Most scheduled this week");
    }

    system.shutdown().await?;
    Ok(())
}
