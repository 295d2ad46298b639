//! Background API tasks and their result channel
//!
//! Every network call runs on its own task so the draw loop never
//! blocks. Results come back as `ApiEvent`s on one unbounded channel,
//! drained once per tick. Nothing here cancels or retries; a task that
//! outlives its screen simply has its event ignored on arrival.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use reef_client::{ClientResult, CustomerDirectory};
use shared::{Customer, CustomerPayload, MutationResponse};

/// Result of a finished background call.
#[derive(Debug)]
pub enum ApiEvent {
    /// `GET /customers` settled
    CustomersLoaded(ClientResult<Vec<Customer>>),
    /// `GET /customers/{id}` settled; `Ok(None)` means unknown id
    CustomerLoaded {
        id: String,
        result: ClientResult<Option<Customer>>,
    },
    /// Create or update settled
    CustomerSaved(ClientResult<MutationResponse>),
    /// `DELETE /customers/{id}` settled
    CustomerDeleted {
        id: String,
        result: ClientResult<()>,
    },
}

fn post(tx: &UnboundedSender<ApiEvent>, event: ApiEvent) {
    if tx.send(event).is_err() {
        tracing::warn!("ui channel closed before an api task finished");
    }
}

/// Fetch the full customer list.
pub fn load_customers(directory: Arc<dyn CustomerDirectory>, tx: UnboundedSender<ApiEvent>) {
    tokio::spawn(async move {
        let result = directory.list_customers().await;
        post(&tx, ApiEvent::CustomersLoaded(result));
    });
}

/// Fetch a single customer for the edit/view form.
pub fn load_customer(
    directory: Arc<dyn CustomerDirectory>,
    tx: UnboundedSender<ApiEvent>,
    id: String,
) {
    tokio::spawn(async move {
        let result = directory.fetch_customer(&id).await;
        post(&tx, ApiEvent::CustomerLoaded { id, result });
    });
}

/// Submit a validated payload: update when an id is present, create
/// otherwise.
pub fn save_customer(
    directory: Arc<dyn CustomerDirectory>,
    tx: UnboundedSender<ApiEvent>,
    id: Option<String>,
    payload: CustomerPayload,
) {
    tokio::spawn(async move {
        let result = match &id {
            Some(id) => directory.update_customer(id, &payload).await,
            None => directory.create_customer(&payload).await,
        };
        post(&tx, ApiEvent::CustomerSaved(result));
    });
}

/// Delete a customer by id.
pub fn delete_customer(
    directory: Arc<dyn CustomerDirectory>,
    tx: UnboundedSender<ApiEvent>,
    id: String,
) {
    tokio::spawn(async move {
        let result = directory.delete_customer(&id).await;
        post(&tx, ApiEvent::CustomerDeleted { id, result });
    });
}
