//! Placeholder data every store starts from when seeding is enabled.

use crate::model::{
    BakingTask, InventoryItem, ItemId, Order, OrderStatus, Recipe, RecipeId, TaskId, TaskStatus,
    Weekday,
};

pub fn baking_tasks() -> Vec<BakingTask> {
    vec![
        BakingTask::new(TaskId(1), "Sourdough Loaf", 20, "06:00 AM", Weekday::Monday),
        BakingTask::new(TaskId(2), "Croissants", 50, "07:30 AM", Weekday::Monday),
        BakingTask::new(TaskId(3), "Baguette", 40, "08:00 AM", Weekday::Tuesday)
            .with_status(TaskStatus::InProgress),
        BakingTask::new(TaskId(4), "Whole Wheat", 15, "09:00 AM", Weekday::Wednesday)
            .with_status(TaskStatus::Completed),
        BakingTask::new(TaskId(5), "Sourdough Loaf", 25, "06:00 AM", Weekday::Friday),
        BakingTask::new(TaskId(6), "Rye Bread", 10, "10:00 AM", Weekday::Friday),
    ]
}

pub fn inventory_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new(ItemId(1), "Organic Whole Wheat Flour", 15, 100, "kg"),
        InventoryItem::new(ItemId(2), "Active Dry Yeast", 45, 50, "g"),
        InventoryItem::new(ItemId(3), "Belgian Dark Chocolate", 8, 20, "kg"),
        InventoryItem::new(ItemId(4), "Sea Salt Flakes", 900, 1000, "g"),
        InventoryItem::new(ItemId(5), "Unsalted Butter", 30, 50, "lbs"),
        InventoryItem::new(ItemId(6), "Granulated Sugar", 75, 100, "kg"),
        InventoryItem::new(ItemId(7), "Free-Range Eggs", 22, 144, "units"),
        InventoryItem::new(ItemId(8), "Vanilla Extract", 500, 2000, "ml"),
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order::new("ORD-101", "Alice Johnson", "2024-08-25", OrderStatus::Pending),
        Order::new("ORD-102", "Bob Williams", "2024-08-24", OrderStatus::InProgress),
        Order::new("ORD-103", "Charlie Brown", "2024-08-23", OrderStatus::ReadyForPickup),
        Order::new("ORD-104", "Diana Miller", "2024-08-22", OrderStatus::Completed),
        Order::new("ORD-105", "Eva Green", "2024-08-26", OrderStatus::Pending),
        Order::new("ORD-106", "Frank White", "2024-08-21", OrderStatus::Cancelled),
        Order::new("ORD-107", "Grace Lee", "2024-08-25", OrderStatus::InProgress),
        Order::new("ORD-108", "Henry Wilson", "2024-08-24", OrderStatus::ReadyForPickup),
    ]
}

/// Seeded slugs are hand-picked and do not all follow `slugify(title)`.
pub fn recipes() -> Vec<Recipe> {
    let recipe = |id, slug: &str, title: &str, image_url: &str, prep_time| Recipe {
        id: RecipeId(id),
        slug: slug.to_string(),
        title: title.to_string(),
        image_url: image_url.to_string(),
        prep_time,
    };
    vec![
        recipe(
            1,
            "classic-sourdough-loaf",
            "Classic Sourdough Loaf",
            "https://images.unsplash.com/photo-1598373182133-52452f7691ef?q=80&w=800",
            240,
        ),
        recipe(
            2,
            "flaky-croissants",
            "Flaky Butter Croissants",
            "https://images.unsplash.com/photo-1555949258-a2aa4d4e9219?q=80&w=800",
            180,
        ),
        recipe(
            3,
            "whole-wheat-boule",
            "Artisan Whole Wheat Boule",
            "https://images.unsplash.com/photo-1533089860892-27fb63e26082?q=80&w=800",
            150,
        ),
        recipe(
            4,
            "cinnamon-raisin-bagels",
            "Cinnamon Raisin Bagels",
            "https://images.unsplash.com/photo-1597697241253-154b7e887f89?q=80&w=800",
            90,
        ),
        recipe(
            5,
            "chocolate-chip-cookies",
            "Gooey Chocolate Chip Cookies",
            "https://images.unsplash.com/photo-1598188198942-033169877b08?q=80&w=800",
            30,
        ),
        recipe(
            6,
            "blueberry-muffins",
            "Bakery-Style Blueberry Muffins",
            "https://images.unsplash.com/photo-1579584393943-4c9f186ac94a?q=80&w=800",
            45,
        ),
    ]
}

/// Revenue per weekday, Monday first. Fixed figures, not computed from orders.
pub const WEEKLY_SALES: [(Weekday, u32); 7] = [
    (Weekday::Monday, 450),
    (Weekday::Tuesday, 520),
    (Weekday::Wednesday, 680),
    (Weekday::Thursday, 590),
    (Weekday::Friday, 810),
    (Weekday::Saturday, 1240),
    (Weekday::Sunday, 1100),
];
