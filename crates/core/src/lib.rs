//! `invoicer-core`: ids, domain errors and the entity/value-object markers.
//!
//! This crate contains **pure domain** primitives (no rendering, no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::LineItemId;
pub use value_object::ValueObject;
