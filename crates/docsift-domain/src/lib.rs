//! Docsift Domain Layer
//!
//! Core vocabulary shared by every other layer: the document kinds the
//! pipeline understands, the duck-typed [`Document`] access trait satisfied
//! by whatever event type the host runtime uses, the [`FieldValue`] shape
//! written back onto documents, and the fixed field/tag names of the wire
//! contract.
//!
//! This crate carries no pipeline logic; the evaluation, caching, and
//! orchestration layers all depend on it and never on each other's types.

#![warn(missing_docs)]

pub mod constants;
pub mod document;
pub mod kind;
pub mod value;

// Re-exports for convenience
pub use document::{Document, MapDocument};
pub use kind::Kind;
pub use value::FieldValue;
