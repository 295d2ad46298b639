//! Data models
//!
//! Shared between the HTTP client and the console UI.
//! Wire shapes use camelCase keys; ids come back Mongo-style (`_id`).

pub mod customer;

// Re-exports
pub use customer::*;
