//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every record type (baking task, ingredient, order,
//! recipe) implements to be owned by a generic [`StoreActor`](crate::StoreActor). It names the
//! identifier, the creation payload, the record-specific actions and the error type, and it
//! decides where new records land in the store's ordering.
//!
//! # Associated Types
//! A `BakingTask` store only accepts a `TaskCreate` payload, and an order store that declares
//! `Create = Infallible` cannot be asked to create anything at all. The compiler rejects the
//! wrong payload before any message is sent.
//!
//! # Ordering
//! Stores keep insertion order. [`StoreEntity::PLACEMENT`] defaults to [`Placement::Append`];
//! an entity listed most-recent-first overrides it with [`Placement::Prepend`].

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Where a freshly created record is placed in the store's ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// New records go to the back (insertion order).
    Append,
    /// New records go to the front (most recent first).
    Prepend,
}

/// Trait that any record type must implement to be managed by `StoreActor`.
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from u32 so the store can allocate identifiers from its counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// Enum representing record-specific operations (e.g. `AdjustStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The error type for this record.
    ///
    /// One enum per store rather than one per action: clients deal with a single
    /// `InventoryError`, at the cost of that enum being the union of every failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Where newly created records are placed.
    const PLACEMENT: Placement = Placement::Append;

    /// The identifier this record is keyed by.
    fn id(&self) -> &Self::Id;

    /// Construct the full record from the allocated ID and the payload.
    /// Returning an error leaves the store untouched.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Handle a record-specific action against this record.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
