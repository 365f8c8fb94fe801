//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the in-memory store.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all stored resource types must implement.
//! - [`ResourceActor`]: The generic actor that owns a collection of entities.
//! - [`ResourceClient`]: The generic client for communicating with the actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound).

use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any resource entity must implement to be managed by [`ResourceActor`].
///
/// # Architecture Note
/// The actor only needs to know how to identify an entity and how to build one
/// from its creation payload. Everything else (validation, merge rules) stays in
/// the domain layer, so the same actor loop can hold any resource type.
///
/// `Id` is `Ord` so that listings come back in a stable, ascending order.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type CreateParams: Send + Sync + Debug;

    /// Returns the identifier assigned at creation.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the assigned ID and the payload.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly onto the operations a persistent collection offers:
///
/// - **List**: Every entity, in ascending id order.
/// - **Get**: One entity by id, or `NotFound`.
/// - **Create**: Assigns the next id and stores the entity built from [`ActorEntity::CreateParams`].
/// - **Replace**: Overwrites an existing entity wholesale, or `NotFound`.
/// - **Delete**: Removes an entity, or `NotFound`.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Replace {
        entity: T,
        respond_to: Response<()>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its messages *sequentially*, so the `store` needs no
/// `Mutex`. Two callers replacing the same entity are simply applied in arrival
/// order; the last write wins.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Item" instead of "item_catalog::model::item::Item")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let all: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = all.len(), "List");
                    let _ = respond_to.send(Ok(all));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self
                        .store
                        .get(&id)
                        .cloned()
                        .ok_or_else(|| FrameworkError::NotFound(id.to_string()));
                    debug!(entity_type, %id, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(entity) => {
                            self.store.insert(id.clone(), entity.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(entity));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                        }
                    }
                }
                ResourceRequest::Replace { entity, respond_to } => {
                    let id = entity.id().clone();
                    debug!(entity_type, %id, "Replace");
                    if let Some(slot) = self.store.get_mut(&id) {
                        *slot = entity;
                        info!(entity_type, %id, "Replaced");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if self.store.remove(&id).is_some() {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn replace(&self, entity: T) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Replace { entity, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u64,
        text: String,
    }

    #[derive(Debug)]
    struct NoteCreate {
        text: String,
    }

    impl ActorEntity for Note {
        type Id = u64;
        type CreateParams = NoteCreate;

        fn id(&self) -> &u64 {
            &self.id
        }

        fn from_create_params(id: u64, params: NoteCreate) -> Result<Self, String> {
            if params.text.is_empty() {
                return Err("text is empty".to_string());
            }
            Ok(Self { id, text: params.text })
        }
    }

    fn spawn_notes() -> ResourceClient<Note> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || counter.fetch_add(1, Ordering::SeqCst);
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_resource_actor_crud_cycle() {
        let client = spawn_notes();

        // 1. Create assigns sequential ids
        let first = client.create(NoteCreate { text: "a".into() }).await.unwrap();
        let second = client.create(NoteCreate { text: "b".into() }).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        // 2. Replace overwrites the stored copy
        let edited = Note { id: 1, text: "a2".into() };
        client.replace(edited.clone()).await.unwrap();
        assert_eq!(client.get(1).await.unwrap(), edited);

        // 3. List comes back in id order
        let ids: Vec<u64> = client.list().await.unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);

        // 4. Delete removes it
        client.delete(1).await.unwrap();
        assert_eq!(client.get(1).await, Err(FrameworkError::NotFound("1".into())));
    }

    #[tokio::test]
    async fn test_missing_ids_report_not_found() {
        let client = spawn_notes();
        let ghost = Note { id: 9, text: "x".into() };

        assert_eq!(client.get(9).await, Err(FrameworkError::NotFound("9".into())));
        assert_eq!(client.replace(ghost).await, Err(FrameworkError::NotFound("9".into())));
        assert_eq!(client.delete(9).await, Err(FrameworkError::NotFound("9".into())));
    }

    #[tokio::test]
    async fn test_failed_construction_is_not_stored() {
        let client = spawn_notes();
        let result = client.create(NoteCreate { text: String::new() }).await;

        assert_eq!(result, Err(FrameworkError::Custom("text is empty".into())));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_closed_actor_is_reported() {
        let (actor, client) = ResourceActor::<Note>::new(1, || 1);
        drop(actor);
        assert_eq!(client.list().await, Err(FrameworkError::ActorClosed));
    }
}
