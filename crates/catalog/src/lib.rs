//! Product catalog domain module.
//!
//! This crate contains the product entity, its validation rules, and the
//! in-memory repository that owns the canonical product list. No IO, no HTTP.

pub mod product;
pub mod repository;
pub mod seed;

pub use product::{FieldViolation, Product};
pub use repository::ProductRepository;
