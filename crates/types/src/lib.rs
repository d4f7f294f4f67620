pub mod document;
pub mod drop_level;

pub use document::{Document, remove_empty_values};
pub use drop_level::DropLevel;
