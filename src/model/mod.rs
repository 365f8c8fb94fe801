//! Pure data structures and the validation rules that guard them.

pub mod category;
pub mod item;
pub mod summary;
pub mod validation;

pub use category::*;
pub use item::*;
pub use summary::*;
pub use validation::ValidationError;
