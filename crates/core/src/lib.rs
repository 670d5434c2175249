//! Domain logic for the Civik municipal submission portal.
//!
//! Everything in this crate is pure: no I/O, no database handles, no
//! framework types. The API and repository layers depend on it; it depends
//! on nothing internal.

pub mod error;
pub mod reporting;
pub mod roles;
pub mod submission;
pub mod triage;
pub mod types;
pub mod visibility;
