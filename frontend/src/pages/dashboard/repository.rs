use crate::api::{ApiClient, ApiError, LeaveBalance};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load_balances(&self) -> Result<Vec<LeaveBalance>, ApiError> {
        self.client.get_balances().await
    }
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::clear_session;
    use crate::test_support::helpers::store_session;
    use serde_json::json;

    #[tokio::test]
    async fn load_balances_reads_all_balances() {
        store_session("Jane Doe");
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/balance/all");
            then.status(200).json_body(json!([
                { "leaveType": "EARNED", "remainingDays": 10, "maxDays": 15 }
            ]));
        });

        let repo =
            DashboardRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.url(""))));
        let balances = repo.load_balances().await.unwrap();
        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].used_days(), 5);
        clear_session();
    }
}
