//! Domain types and validation rules for the family budget service.
//!
//! This crate performs no I/O. The database and HTTP crates depend on it for
//! identifiers, the error taxonomy, and the rules a category must satisfy
//! before it is persisted.

pub mod category;
pub mod color;
pub mod error;
pub mod types;
