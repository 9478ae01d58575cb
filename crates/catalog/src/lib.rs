//! Catalog query engine.
//!
//! Evaluates a composite [`CatalogFilter`] over an in-memory product collection
//! and computes collection-wide [`CatalogStats`]. The engine is stateless: it
//! borrows the collection for the duration of a call and never mutates it.
//!
//! Pricing-derived criteria go through `stockdash-pricing`, so the numbers a
//! filter sees are the numbers every view renders.

pub mod config;
pub mod draft;
pub mod engine;
pub mod filter;
pub mod product;
pub mod stats;

pub use config::{CatalogConfig, EditLimits, PriceBands};
pub use draft::{DraftField, FieldError, ProductDraft, ValidationErrors};
pub use engine::{CatalogQueryEngine, CatalogView};
pub use filter::{CatalogFilter, PriceRange, StockState};
pub use product::{ProductRecord, derive_pricing};
pub use stats::CatalogStats;
