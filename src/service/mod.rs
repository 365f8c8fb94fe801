//! Business operations on items.

pub mod error;
pub mod item_service;

pub use error::*;
pub use item_service::*;
