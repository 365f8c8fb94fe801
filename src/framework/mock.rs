//! # Mock Framework
//!
//! Utilities for testing code that talks to a [`ResourceClient`] without running a
//! real [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Use [`MockClient`] to script responses in order, then call
//! [`MockClient::verify`] to assert that every scripted request arrived and
//! nothing else did. For step-by-step control use [`create_mock_client`] with
//! the `expect_*` helpers.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client, with its canned response.
enum Expectation<T: ActorEntity> {
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Replace {
        response: Result<(), FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::List { .. } => "list".to_string(),
            Expectation::Get { id, .. } => format!("get({id})"),
            Expectation::Create { .. } => "create".to_string(),
            Expectation::Replace { .. } => "replace".to_string(),
            Expectation::Delete { id, .. } => format!("delete({id})"),
        }
    }
}

fn describe_request<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::List { .. } => "list".to_string(),
        ResourceRequest::Get { id, .. } => format!("get({id})"),
        ResourceRequest::Create { .. } => "create".to_string(),
        ResourceRequest::Replace { entity, .. } => format!("replace({})", entity.id()),
        ResourceRequest::Delete { id, .. } => format!("delete({id})"),
    }
}

type Shared<V> = Arc<Mutex<V>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in FIFO order. A request that does
/// not match the next expectation (wrong kind or wrong id) is recorded as a
/// mismatch and its response channel is dropped, so the caller sees
/// [`FrameworkError::ActorDropped`]. [`MockClient::verify`] then fails.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Item>::new();
/// mock.expect_get(id).return_ok(item.clone());
/// mock.expect_replace().return_ok(());
///
/// let client = ItemClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Shared<VecDeque<Expectation<T>>>,
    mismatches: Shared<Vec<String>>,
    created: Shared<Vec<T::CreateParams>>,
    replaced: Shared<Vec<T>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Shared<VecDeque<Expectation<T>>> = Arc::default();
        let mismatches: Shared<Vec<String>> = Arc::default();
        let created: Shared<Vec<T::CreateParams>> = Arc::default();
        let replaced: Shared<Vec<T>> = Arc::default();

        let exps = expectations.clone();
        let misses = mismatches.clone();
        let created_log = created.clone();
        let replaced_log = replaced.clone();

        // Spawn background task to answer requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = exps.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
                        if id == want =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { params, respond_to }, Some(Expectation::Create { response })) => {
                        created_log.lock().unwrap().push(params);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Replace { entity, respond_to }, Some(Expectation::Replace { response })) => {
                        replaced_log.lock().unwrap().push(entity);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: want, response }))
                        if id == want =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let expected = expectation
                            .map(|e| e.describe())
                            .unwrap_or_else(|| "nothing".to_string());
                        misses.lock().unwrap().push(format!(
                            "got {}, expected {}",
                            describe_request(&request),
                            expected
                        ));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            created,
            replaced,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::List { response })
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Create { response })
    }

    /// Expects a `replace` operation.
    pub fn expect_replace(&mut self) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Replace { response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Delete { id, response })
    }

    /// Entities received by `replace`, in arrival order.
    pub fn replaced(&self) -> Vec<T> {
        self.replaced.lock().unwrap().clone()
    }

    /// Number of `create` payloads received so far.
    pub fn created_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    /// Verifies that all expectations were met and no unexpected request arrived.
    pub fn verify(&self) {
        let misses = self.mismatches.lock().unwrap();
        if !misses.is_empty() {
            panic!("Unexpected requests: {}", misses.join("; "));
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            let pending: Vec<String> = exps.iter().map(|e| e.describe()).collect();
            panic!(
                "Not all expectations were met. {} remaining: {}",
                exps.len(),
                pending.join(", ")
            );
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that completes an expectation with its canned response.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Shared<VecDeque<Expectation<T>>>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: &Shared<VecDeque<Expectation<T>>>,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations: expectations.clone(),
            wrap: Box::new(wrap),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        let expectation = (self.wrap)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.wrap)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// Instead of a running actor, the returned client sends messages to a channel we
/// control. Tests pull each request off the `receiver`, assert on its contents,
/// and answer through the responder, which lets them simulate success, failure
/// or a vanished actor deterministically.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Responder<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Replace request
pub async fn expect_replace<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, Responder<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Replace { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, ItemId, NewItem};

    fn sample(id: i64) -> Item {
        let new = NewItem::new("Bag", "バッグ", "HERMES", 800_000, "2022-05-01").unwrap();
        Item::from_new(ItemId::try_from(id).unwrap(), new)
    }

    #[tokio::test]
    async fn test_mock_client_low_level() {
        let (client, mut receiver) = create_mock_client::<Item>(10);

        let get_task = tokio::spawn(async move { client.get(ItemId::try_from(1).unwrap()).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id.get(), 1);
        responder.send(Ok(sample(1))).unwrap();

        let result = get_task.await.unwrap();
        assert_eq!(result.unwrap().brand, "HERMES");
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Item>::new();
        let id = ItemId::try_from(1).unwrap();

        mock.expect_get(id).return_ok(sample(1));
        mock.expect_replace().return_ok(());

        let client = mock.client();
        let mut item = client.get(id).await.unwrap();
        item.name = "Kelly".to_string();
        client.replace(item).await.unwrap();

        mock.verify();
        assert_eq!(mock.replaced()[0].name, "Kelly");
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected requests")]
    async fn test_unscripted_request_fails_verification() {
        let mock = MockClient::<Item>::new();
        let result = mock.client().delete(ItemId::try_from(2).unwrap()).await;
        assert_eq!(result, Err(FrameworkError::ActorDropped));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "1 remaining")]
    async fn test_unmet_expectation_fails_verification() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_list().return_ok(vec![]);
        mock.verify();
    }
}
