//! Directory seam between the console and the customers API
//!
//! Screens talk to a `CustomerDirectory` rather than to the HTTP client
//! directly, so demo mode and tests can swap in an in-memory store.

use async_trait::async_trait;

use shared::{Customer, CustomerPayload, MutationResponse};

use crate::{ClientResult, HttpClient};

/// Async surface of the customers API.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    async fn list_customers(&self) -> ClientResult<Vec<Customer>>;

    /// `None` means the id is unknown to the backing store.
    async fn fetch_customer(&self, id: &str) -> ClientResult<Option<Customer>>;

    async fn create_customer(&self, payload: &CustomerPayload) -> ClientResult<MutationResponse>;

    async fn update_customer(
        &self,
        id: &str,
        payload: &CustomerPayload,
    ) -> ClientResult<MutationResponse>;

    async fn delete_customer(&self, id: &str) -> ClientResult<()>;
}

#[async_trait]
impl CustomerDirectory for HttpClient {
    async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        HttpClient::list_customers(self).await
    }

    async fn fetch_customer(&self, id: &str) -> ClientResult<Option<Customer>> {
        HttpClient::fetch_customer(self, id).await
    }

    async fn create_customer(&self, payload: &CustomerPayload) -> ClientResult<MutationResponse> {
        HttpClient::create_customer(self, payload).await
    }

    async fn update_customer(
        &self,
        id: &str,
        payload: &CustomerPayload,
    ) -> ClientResult<MutationResponse> {
        HttpClient::update_customer(self, id, payload).await
    }

    async fn delete_customer(&self, id: &str) -> ClientResult<()> {
        HttpClient::delete_customer(self, id).await
    }
}
