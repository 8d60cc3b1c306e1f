use crate::api::{ApiClient, ApiError, LeaveRequestRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct RequestsRepository {
    client: Rc<ApiClient>,
}

impl RequestsRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_my_requests(&self) -> Result<Vec<LeaveRequestRecord>, ApiError> {
        self.client.get_my_requests().await
    }
}

impl Default for RequestsRepository {
    fn default() -> Self {
        Self::new()
    }
}
