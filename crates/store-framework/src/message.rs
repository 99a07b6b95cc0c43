//! # Generic Messages
//!
//! The request type carried from a `StoreClient` to its `StoreActor`.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by stores.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a store actor.
///
/// Records in this system are created and then acted on, never replaced or removed, so the
/// vocabulary is:
///
/// - **Create**: allocate an ID and build a record from [`StoreEntity::Create`].
/// - **Get**: fetch one record by ID.
/// - **List**: snapshot of the whole collection, in store order.
/// - **Action**: run a record-specific [`StoreEntity::Action`].
///
/// Generic over `T: StoreEntity`, so a recipe payload can never reach the inventory store.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
