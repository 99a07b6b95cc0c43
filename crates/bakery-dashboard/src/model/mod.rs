//! Record types owned by the stores, plus the enum-keyed lookup tables that go with them.

pub mod inventory;
pub mod order;
pub mod recipe;
pub mod task;
pub mod tone;

pub use inventory::*;
pub use order::*;
pub use recipe::*;
pub use task::*;
pub use tone::*;

/// Case-insensitive substring match used by every search box. An empty term matches everything.
pub fn contains_ignore_case(haystack: &str, term: &str) -> bool {
    term.is_empty() || haystack.to_lowercase().contains(&term.to_lowercase())
}
