//! `stockdash-core` — shared catalog primitives.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::ProductId;
pub use value_object::ValueObject;
