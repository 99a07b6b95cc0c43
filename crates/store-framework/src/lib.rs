//! # Store Framework
//!
//! Building blocks for keeping small in-memory record collections behind a message-passing
//! boundary. Each collection is owned by one [`StoreActor`] task; views reach it through a
//! cloneable [`StoreClient`] and never touch the collection directly.
//!
//! ## Why a store per collection?
//!
//! - **One owner**: the actor task is the only code that mutates its records, so there is no
//!   shared mutable state and no lock.
//! - **Explicit commands**: every mutation is a typed request (`Create`, `Action`), and every
//!   read (`Get`, `List`) returns an owned snapshot. A view can hold on to a snapshot without
//!   holding the store.
//! - **Ordering you can rely on**: requests are answered in arrival order, so a `List` sent
//!   after a mutation on the same client always sees that mutation.
//!
//! ## Core Components
//!
//! - [`StoreEntity`]: the trait a record type implements (ID, create payload, actions, error,
//!   placement).
//! - [`StoreActor`]: the generic actor that owns the collection and its ID counter.
//! - [`StoreClient`]: the type-safe async handle.
//! - [`DomainClient`]: shared `get`/`list` for store-specific client wrappers.
//! - [`StoreError`]: framework errors (closed store, not found, entity error).
//!
//! ## Quick Start
//!
//! ```rust
//! use store_framework::{StoreActor, StoreEntity};
//!
//! #[derive(Clone, Debug)]
//! struct Bun { id: u32, glazed: bool }
//! #[derive(Debug)] struct BunCreate;
//! #[derive(Debug)] enum BunAction { Glaze }
//! #[derive(Debug, thiserror::Error)] #[error("bun error")] struct BunError;
//!
//! impl StoreEntity for Bun {
//!     type Id = u32;
//!     type Create = BunCreate;
//!     type Action = BunAction;
//!     type ActionResult = bool;
//!     type Error = BunError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, _: BunCreate) -> Result<Self, BunError> {
//!         Ok(Self { id, glazed: false })
//!     }
//!     fn handle_action(&mut self, action: BunAction) -> Result<bool, BunError> {
//!         match action {
//!             BunAction::Glaze => Ok(!std::mem::replace(&mut self.glazed, true)),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Bun>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let id = client.create(BunCreate).await.unwrap();
//!     assert!(client.perform_action(id, BunAction::Glaze).await.unwrap());
//!     assert!(client.get(id).await.unwrap().unwrap().glazed);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockStore`] answers a real `StoreClient` from scripted expectations, so wrappers
//! built on top of a client can be tested without a running store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::DomainClient;
pub use entity::{Placement, StoreEntity};
pub use error::StoreError;
pub use message::{Response, StoreRequest};
