//! Catalog domain module.
//!
//! This crate contains the product record, its validation rules, and the
//! persistence boundary, implemented as deterministic domain logic plus an
//! in-memory store (no HTTP concerns).

pub mod product;
pub mod repository;

pub use product::{Product, ProductDraft, ProductPatch, ValidationError, ValidationErrors};
pub use repository::{InMemoryProductRepository, ProductRepository, StoreError};
