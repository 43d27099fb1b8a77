//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//!
//! Generated assets are append-only, so there are no update DTOs.

pub mod generated_code;
pub mod generated_content;
pub mod generated_image;
pub mod user;
