//! Shared types for the reef console
//!
//! Customer model, form drafts, field validation, and the envelope
//! types spoken by the customers REST API. Used by both reef-client
//! and reef-console.

pub mod api;
pub mod models;
pub mod validation;

// Re-exports
pub use api::{CustomerDetailResponse, CustomerListResponse, MutationResponse};
pub use models::{Customer, CustomerDraft, CustomerPayload};
pub use validation::{CustomerField, FieldErrors, validate_draft};
