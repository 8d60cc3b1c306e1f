use crate::api::{ApiClient, ApiError, Decision, PendingRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct ManagerRepository {
    client: Rc<ApiClient>,
}

impl ManagerRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_pending(&self) -> Result<Vec<PendingRequest>, ApiError> {
        self.client.get_pending_requests().await
    }

    pub async fn decide(&self, id: &str, decision: Decision) -> Result<(), ApiError> {
        match decision {
            Decision::Approve => self.client.approve_request(id).await,
            Decision::Reject => self.client.reject_request(id).await,
        }
    }
}

impl Default for ManagerRepository {
    fn default() -> Self {
        Self::new()
    }
}
