//! [`ActorEntity`] implementation for [`Item`].
//!
//! Items reach the actor already validated as a [`NewItem`], so building the
//! stored entity only attaches the assigned id.

use crate::framework::ActorEntity;
use crate::model::{Item, ItemId, NewItem};

impl ActorEntity for Item {
    type Id = ItemId;
    type CreateParams = NewItem;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn from_create_params(id: ItemId, params: NewItem) -> Result<Self, String> {
        Ok(Item::from_new(id, params))
    }
}
