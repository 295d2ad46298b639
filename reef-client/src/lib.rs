//! Reef Client - HTTP client for the customers API
//!
//! Typed network calls against the admin REST service.

pub mod config;
pub mod directory;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use directory::CustomerDirectory;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{Customer, CustomerPayload, MutationResponse};
