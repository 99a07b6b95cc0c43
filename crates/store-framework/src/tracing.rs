//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the structured logger shared by every binary in the workspace.
//!
//! Store actors log with an `entity_type` field instead of a module path, so the target is
//! hidden and the compact format keeps one line per event:
//!
//! ```text
//! INFO Store started entity_type="InventoryItem" size=8
//! INFO Action ok entity_type="InventoryItem" id=3 outcome=AdjustStock(7)
//! INFO Created entity_type="Recipe" id=7 size=7
//! ```
//!
//! Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # mutations and lifecycle
//! RUST_LOG=debug cargo run     # every request with its payload
//! RUST_LOG=store_framework=debug,bakery_dashboard=info cargo run
//! ```
//!
//! With nothing set, only errors are printed.

/// Initializes the global tracing subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
