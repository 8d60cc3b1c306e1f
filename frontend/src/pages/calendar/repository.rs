use crate::api::{ApiClient, ApiError, ApplyLeaveRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct CalendarRepository {
    client: Rc<ApiClient>,
}

impl CalendarRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn apply_leave(&self, request: ApplyLeaveRequest) -> Result<(), ApiError> {
        self.client.apply_leave(request).await
    }
}

impl Default for CalendarRepository {
    fn default() -> Self {
        Self::new()
    }
}
