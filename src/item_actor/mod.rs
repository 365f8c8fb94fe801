//! Item storage actor: the in-memory backend behind [`ItemClient`].

pub mod entity;

use crate::clients::ItemClient;
use crate::framework::ResourceActor;
use crate::model::{Item, ItemId};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Creates a new Item actor and its client.
///
/// Ids are handed out from 1 upwards and never reused, even after deletes.
pub fn new(buffer_size: usize) -> (ResourceActor<Item>, ItemClient) {
    let item_id_counter = Arc::new(AtomicI64::new(1));
    let next_item_id = move || ItemId::from_sequence(item_id_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_item_id);
    let client = ItemClient::new(generic_client);

    (actor, client)
}
