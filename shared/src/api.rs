//! Customer API envelopes
//!
//! Response shapes spoken by the customers REST service. Requests carry
//! a bare `CustomerPayload`; responses wrap their data in the envelopes
//! below.

use serde::{Deserialize, Serialize};

use crate::models::Customer;

/// `GET /customers` response: `{"customers": [...]}`.
///
/// A missing or null-ish key deserializes as an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerListResponse {
    #[serde(default)]
    pub customers: Vec<Customer>,
}

/// `GET /customers/{id}` response: `{"customer": {...}}`.
///
/// Servers signal "no such customer" either with a null/absent key or
/// with a plain 404; both surface as `None` downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDetailResponse {
    #[serde(default)]
    pub customer: Option<Customer>,
}

/// `POST /customers` and `PUT /customers/{id}` response.
///
/// `message` is shown to the operator verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub message: String,
    #[serde(default)]
    pub customer: Option<Customer>,
}
