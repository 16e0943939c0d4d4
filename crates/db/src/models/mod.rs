//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - For projects, an update DTO (all `Option` fields) for partial updates

pub mod document;
pub mod manufacturing_plan;
pub mod material;
pub mod milestone;
pub mod project;
pub mod project_detail;
pub mod team_member;
