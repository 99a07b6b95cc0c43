//! # Generic Store Actor
//!
//! `StoreActor` owns one record collection and processes requests for it sequentially.
//! It is the "server" half of a store; [`StoreClient`] is the cloneable handle views hold.

use crate::client::StoreClient;
use crate::entity::{Placement, StoreEntity};
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::{HashMap, VecDeque};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of records.
///
/// Each store runs in its own Tokio task and handles one request at a time, so a mutation
/// always completes before the next request (including a `List`) is looked at. No `Mutex`
/// guards the collection; exclusive ownership inside the task is enough.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StoreActor::new()` (or `seeded()`) returns the actor and its client.
/// 2.  **Run**: spawn `actor.run()` in a background task.
/// 3.  **Use**: clone the client into whichever view needs it.
///
/// ```rust
/// use store_framework::{StoreActor, StoreEntity};
///
/// #[derive(Clone, Debug)] struct Loaf { id: u32, name: String }
/// #[derive(Debug)] struct LoafCreate { name: String }
/// #[derive(Debug)] enum LoafAction {}
/// #[derive(Debug, thiserror::Error)] #[error("loaf error")] struct LoafError;
///
/// impl StoreEntity for Loaf {
///     type Id = u32;
///     type Create = LoafCreate;
///     type Action = LoafAction;
///     type ActionResult = ();
///     type Error = LoafError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, params: LoafCreate) -> Result<Self, LoafError> {
///         Ok(Self { id, name: params.name })
///     }
///     fn handle_action(&mut self, action: LoafAction) -> Result<(), LoafError> { match action {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Loaf>::new(10);
///     tokio::spawn(actor.run());
///
///     let id = client.create(LoafCreate { name: "Baguette".into() }).await.unwrap();
///     let all = client.list().await.unwrap();
///     assert_eq!(all[0].id, id);
/// }
/// ```
///
/// # Implementation Details
///
/// Records live in a `HashMap` keyed by ID; a separate `VecDeque` of IDs carries the display
/// order. Creation allocates IDs from a `u32` counter and skips any value already taken by a
/// seeded record.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Id, T>,
    order: VecDeque<T::Id>,
    next_id: u32,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates an empty store and its client.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        Self::seeded(buffer_size, Vec::new())
    }

    /// Creates a store pre-populated with `seed`, kept in the given order.
    ///
    /// A seed record whose ID repeats an earlier one replaces it in place.
    pub fn seeded(buffer_size: usize, seed: Vec<T>) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let mut actor = Self {
            receiver,
            store: HashMap::with_capacity(seed.len()),
            order: VecDeque::with_capacity(seed.len()),
            next_id: 1,
        };
        for item in seed {
            let id = item.id().clone();
            if actor.store.insert(id.clone(), item).is_none() {
                actor.order.push_back(id);
            }
        }
        let client = StoreClient::new(sender);
        (actor, client)
    }

    fn allocate_id(&mut self) -> T::Id {
        loop {
            let id = T::Id::from(self.next_id);
            self.next_id = self.next_id.wrapping_add(1);
            if !self.store.contains_key(&id) {
                return id;
            }
        }
    }

    fn snapshot(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.store.get(id))
            .cloned()
            .collect()
    }

    /// Runs the store's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // "InventoryItem" rather than "bakery_dashboard::model::inventory::InventoryItem"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = self.allocate_id();

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item);
                            match T::PLACEMENT {
                                Placement::Append => self.order.push_back(id.clone()),
                                Placement::Prepend => self.order.push_front(id.clone()),
                            }
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.snapshot()));
                }
                StoreRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action)
                            .map_err(|e| StoreError::EntityError(Box::new(e)));
                        match &result {
                            Ok(outcome) => info!(entity_type, %id, ?outcome, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        text: String,
    }

    #[derive(Debug)]
    struct NoteCreate {
        text: String,
    }

    #[derive(Debug)]
    enum NoteAction {
        Shout,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("empty note")]
    struct NoteError;

    impl StoreEntity for Note {
        type Id = u32;
        type Create = NoteCreate;
        type Action = NoteAction;
        type ActionResult = String;
        type Error = NoteError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
            if params.text.is_empty() {
                return Err(NoteError);
            }
            Ok(Self {
                id,
                text: params.text,
            })
        }

        fn handle_action(&mut self, action: NoteAction) -> Result<String, NoteError> {
            match action {
                NoteAction::Shout => {
                    self.text = self.text.to_uppercase();
                    Ok(self.text.clone())
                }
            }
        }
    }

    #[derive(Clone, Debug)]
    struct Headline {
        id: u32,
    }

    impl StoreEntity for Headline {
        type Id = u32;
        type Create = ();
        type Action = std::convert::Infallible;
        type ActionResult = ();
        type Error = NoteError;
        const PLACEMENT: Placement = Placement::Prepend;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, _: ()) -> Result<Self, NoteError> {
            Ok(Self { id })
        }

        fn handle_action(&mut self, action: Self::Action) -> Result<(), NoteError> {
            match action {}
        }
    }

    fn note(id: u32, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_appends_and_skips_seeded_ids() {
        let (actor, client) = StoreActor::seeded(8, vec![note(1, "rye"), note(2, "spelt")]);
        tokio::spawn(actor.run());

        let id = client
            .create(NoteCreate {
                text: "oat".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, 3);

        let all = client.list().await.unwrap();
        let ids: Vec<u32> = all.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_seed_with_gap_does_not_collide() {
        let (actor, client) = StoreActor::seeded(8, vec![note(2, "a")]);
        tokio::spawn(actor.run());

        let first = client.create(NoteCreate { text: "b".into() }).await.unwrap();
        let second = client.create(NoteCreate { text: "c".into() }).await.unwrap();
        assert_eq!((first, second), (1, 3));
    }

    #[tokio::test]
    async fn test_rejected_create_leaves_store_unchanged() {
        let (actor, client) = StoreActor::seeded(8, vec![note(1, "rye")]);
        tokio::spawn(actor.run());

        let err = client
            .create(NoteCreate {
                text: String::new(),
            })
            .await
            .unwrap_err();
        assert!(err.entity_error::<NoteError>().is_some());
        assert_eq!(client.list().await.unwrap(), vec![note(1, "rye")]);
    }

    #[tokio::test]
    async fn test_prepend_placement_lists_newest_first() {
        let (actor, client) = StoreActor::<Headline>::new(8);
        tokio::spawn(actor.run());

        client.create(()).await.unwrap();
        client.create(()).await.unwrap();
        let ids: Vec<u32> = client.list().await.unwrap().iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_action_on_missing_record_is_not_found() {
        let (actor, client) = StoreActor::<Note>::new(8);
        tokio::spawn(actor.run());

        let err = client.perform_action(42, NoteAction::Shout).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "42"));
    }

    #[tokio::test]
    async fn test_action_mutates_in_place() {
        let (actor, client) = StoreActor::seeded(8, vec![note(1, "rye")]);
        tokio::spawn(actor.run());

        let shouted = client.perform_action(1, NoteAction::Shout).await.unwrap();
        assert_eq!(shouted, "RYE");
        assert_eq!(client.get(1).await.unwrap(), Some(note(1, "RYE")));
    }
}
