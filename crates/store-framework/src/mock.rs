//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` hands out a real [`StoreClient<T>`] whose requests are answered from a queue of
//! expectations instead of a running store. Domain clients (search wrappers, form parsing,
//! dashboard aggregation) can then be tested without spawning any store actor.
//!
//! | | MockStore | Real StoreActor |
//! |---|---|---|
//! | **State** | Scripted answers | Real collection |
//! | **Use case** | Logic *around* the client | The store itself, or the whole system |
//! | **Error injection** | `return_err` | Needs a specific state |
//!
//! ```rust
//! use store_framework::mock::MockStore;
//! use store_framework::{StoreEntity, StoreError};
//!
//! #[derive(Clone, Debug, PartialEq)] struct Loaf { id: u32 }
//! #[derive(Debug)] struct LoafCreate;
//! #[derive(Debug)] enum LoafAction {}
//! #[derive(Debug, thiserror::Error)] #[error("loaf")] struct LoafError;
//!
//! impl StoreEntity for Loaf {
//!     type Id = u32; type Create = LoafCreate; type Action = LoafAction;
//!     type ActionResult = (); type Error = LoafError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, _: LoafCreate) -> Result<Self, LoafError> { Ok(Self { id }) }
//!     fn handle_action(&mut self, action: LoafAction) -> Result<(), LoafError> { match action {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Loaf>::new();
//!     mock.expect_list().return_ok(vec![Loaf { id: 1 }]);
//!     mock.expect_get(2).return_err(StoreError::StoreClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.list().await.unwrap(), vec![Loaf { id: 1 }]);
//!     assert!(matches!(client.get(2).await, Err(StoreError::StoreClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For step-by-step control (inspect each payload, answer by hand) use [`create_mock_client`]
//! with [`expect_create`], [`expect_get`], [`expect_list`] and [`expect_action`].

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: StoreEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Create {
        response: Result<T::Id, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, StoreError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A scripted store with expectation tracking.
///
/// Expectations are consumed in order. A request that does not match the next expectation
/// (wrong kind, or wrong ID) panics the responder task, which surfaces in the test as a
/// dropped response.
pub struct MockStore<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockStore<T> {
    /// Creates a new mock store with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StoreRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
                        assert_eq!(id, want, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "action sent to unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list`.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an action against `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: StoreEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, StoreError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response,
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: StoreEntity> {
    expectations: Queue<T>,
}

impl<T: StoreEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.push(Ok(id));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Id, StoreError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: StoreEntity> {
    expectations: Queue<T>,
}

impl<T: StoreEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, records: Vec<T>) {
        self.push(Ok(records));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<T>, StoreError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response });
    }
}

/// Builder for action expectations.
pub struct ActionExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: StoreEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, StoreError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Action {
            id: self.id,
            response,
        });
    }
}

// =============================================================================
// STEP-BY-STEP HELPERS
// =============================================================================

/// Creates a client and the receiving end of its channel, so a test can play the store
/// by hand: receive each request, assert on its payload, answer it.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a List request.
pub async fn expect_list<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tray {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct TrayCreate {
        label: String,
    }

    #[derive(Debug)]
    enum TrayAction {
        Rotate,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tray error")]
    struct TrayError;

    impl StoreEntity for Tray {
        type Id = u32;
        type Create = TrayCreate;
        type Action = TrayAction;
        type ActionResult = bool;
        type Error = TrayError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, params: TrayCreate) -> Result<Self, TrayError> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        fn handle_action(&mut self, action: TrayAction) -> Result<bool, TrayError> {
            match action {
                TrayAction::Rotate => Ok(true),
            }
        }
    }

    #[tokio::test]
    async fn test_step_by_step_create() {
        let (client, mut receiver) = create_mock_client::<Tray>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(TrayCreate {
                    label: "top rack".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "top rack");
        responder.send(Ok(7)).unwrap();

        assert_eq!(create_task.await.unwrap().unwrap(), 7);
    }

    #[tokio::test]
    async fn test_step_by_step_action() {
        let (client, mut receiver) = create_mock_client::<Tray>(10);

        let task = tokio::spawn(async move { client.perform_action(3, TrayAction::Rotate).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, 3);
        assert!(matches!(action, TrayAction::Rotate));
        responder.send(Ok(false)).unwrap();

        assert!(!task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_expectations_are_consumed_in_order() {
        let mut mock = MockStore::<Tray>::new();
        mock.expect_create().return_ok(1);
        mock.expect_list().return_ok(vec![Tray {
            id: 1,
            label: "proofing".to_string(),
        }]);
        mock.expect_get(1).return_ok(None);

        let client = mock.client();
        let id = client
            .create(TrayCreate {
                label: "proofing".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(client.list().await.unwrap().len(), 1);
        assert_eq!(client.get(1).await.unwrap(), None);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_response() {
        let mut mock = MockStore::<Tray>::new();
        mock.expect_list().return_ok(Vec::new());

        let client = mock.client();
        let result = client.get(9).await;
        assert!(matches!(result, Err(StoreError::StoreDropped)));
    }
}
