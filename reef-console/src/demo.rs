//! Seeded in-memory directory for --demo mode
//!
//! Speaks the same contract as the live API, including its success
//! messages, so every screen behaves identically with no server up.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use reef_client::{ClientError, ClientResult, CustomerDirectory};
use shared::{Customer, CustomerPayload, MutationResponse};

pub struct DemoDirectory {
    customers: Mutex<Vec<Customer>>,
    next_id: AtomicU64,
}

impl DemoDirectory {
    /// Empty store, mainly for tests.
    pub fn empty() -> Self {
        Self {
            customers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Store pre-filled with a handful of believable records.
    pub fn seeded() -> Self {
        let store = Self::empty();
        let seeds = [
            ("Dana Levi", "0521234567", "dana.levi@example.com", 3, 5, 1, 0),
            ("Noa Peretz", "0539876543", "noa.peretz@example.com", 0, 2, 0, 1),
            ("Avi Mizrahi", "0501112233", "avi.mizrahi@example.com", 7, 0, 2, 4),
            ("Maya Katz", "0544455667", "maya.katz@example.com", 1, 9, 0, 0),
            ("Yoni Bar", "0587654321", "yoni.bar@example.com", 2, 3, 3, 2),
            ("Tamar Azulay", "0523344556", "tamar.azulay@example.com", 0, 0, 6, 1),
        ];
        {
            let mut customers = store.customers.lock().unwrap_or_else(|e| e.into_inner());
            for (name, mobile, email, awaiting, approved, expired, unapproved) in seeds {
                customers.push(Customer {
                    id: format!("demo-{}", store.next_id.fetch_add(1, Ordering::Relaxed)),
                    name: name.to_string(),
                    mobile: mobile.to_string(),
                    email: email.to_string(),
                    proposals_awaiting: awaiting,
                    approve_proposal: approved,
                    expired_proposal: expired,
                    unapproved_proposal: unapproved,
                });
            }
        }
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Customer>> {
        self.customers.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl CustomerDirectory for DemoDirectory {
    async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        Ok(self.lock().clone())
    }

    async fn fetch_customer(&self, id: &str) -> ClientResult<Option<Customer>> {
        Ok(self.lock().iter().find(|c| c.id == id).cloned())
    }

    async fn create_customer(&self, payload: &CustomerPayload) -> ClientResult<MutationResponse> {
        let customer = Customer {
            id: format!("demo-{}", self.next_id.fetch_add(1, Ordering::Relaxed)),
            name: payload.name.clone(),
            mobile: payload.mobile.clone(),
            email: payload.email.clone(),
            proposals_awaiting: payload.proposals_awaiting,
            approve_proposal: payload.approve_proposal,
            expired_proposal: payload.expired_proposal,
            unapproved_proposal: payload.unapproved_proposal,
        };
        self.lock().push(customer.clone());
        Ok(MutationResponse {
            message: "Customer created successfully".to_string(),
            customer: Some(customer),
        })
    }

    async fn update_customer(
        &self,
        id: &str,
        payload: &CustomerPayload,
    ) -> ClientResult<MutationResponse> {
        let mut customers = self.lock();
        let Some(existing) = customers.iter_mut().find(|c| c.id == id) else {
            return Err(ClientError::NotFound("Customer not found".to_string()));
        };
        existing.name = payload.name.clone();
        existing.mobile = payload.mobile.clone();
        existing.email = payload.email.clone();
        existing.proposals_awaiting = payload.proposals_awaiting;
        existing.approve_proposal = payload.approve_proposal;
        existing.expired_proposal = payload.expired_proposal;
        existing.unapproved_proposal = payload.unapproved_proposal;
        let updated = existing.clone();
        Ok(MutationResponse {
            message: "Customer updated successfully".to_string(),
            customer: Some(updated),
        })
    }

    async fn delete_customer(&self, id: &str) -> ClientResult<()> {
        let mut customers = self.lock();
        let before = customers.len();
        customers.retain(|c| c.id != id);
        if customers.len() == before {
            return Err(ClientError::NotFound("Customer not found".to_string()));
        }
        Ok(())
    }
}
