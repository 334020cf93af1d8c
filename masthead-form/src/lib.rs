//! # masthead-form
//!
//! Form elements for tag editing: a multi-line text field and the tag
//! input that mirrors its value from an external tag store.

pub mod element;
pub mod error;
pub mod store;

pub use element::{TagInput, TextField};
pub use error::FormError;
pub use store::{MemoryTagStore, TagStore};
