//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Categories additionally carry `Deserialize` create and
//! update DTOs plus their validated forms.

pub mod budget;
pub mod category;
pub mod transaction;
pub mod user;
