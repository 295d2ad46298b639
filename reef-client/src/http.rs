//! HTTP client for the customers REST API

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use shared::{Customer, CustomerDetailResponse, CustomerListResponse, CustomerPayload, MutationResponse};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to the customers service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let mut builder = Client::builder();
        if config.timeout > 0 {
            builder = builder.timeout(std::time::Duration::from_secs(config.timeout));
        }
        let client = builder.build().expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!("PUT {}", url);
        let mut request = self.client.put(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, ignoring any response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!("DELETE {}", url);
        let mut request = self.client.delete(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }

    /// Map non-success statuses onto client errors
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::warn!("request failed: {} {}", status, text);
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        Ok(response)
    }

    // ========== Customers API ==========

    /// `GET /customers`, unwrapped from its envelope
    pub async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        let response: CustomerListResponse = self.get("customers").await?;
        Ok(response.customers)
    }

    /// `GET /customers/{id}`
    ///
    /// Both a 404 and a null `customer` key come back as `None`.
    pub async fn fetch_customer(&self, id: &str) -> ClientResult<Option<Customer>> {
        match self.get::<CustomerDetailResponse>(&format!("customers/{id}")).await {
            Ok(response) => Ok(response.customer),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// `POST /customers`
    pub async fn create_customer(&self, payload: &CustomerPayload) -> ClientResult<MutationResponse> {
        self.post("customers", payload).await
    }

    /// `PUT /customers/{id}`
    pub async fn update_customer(
        &self,
        id: &str,
        payload: &CustomerPayload,
    ) -> ClientResult<MutationResponse> {
        self.put(&format!("customers/{id}"), payload).await
    }

    /// `DELETE /customers/{id}`
    pub async fn delete_customer(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("customers/{id}")).await
    }
}
