//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO (intake DTOs carry `validator` derives)
//! - Where needed, a sanitized response struct for external output

pub mod anonymous_complaint;
pub mod comment;
pub mod complaint;
pub mod department;
pub mod feedback;
pub mod session;
pub mod user;
