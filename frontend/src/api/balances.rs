use super::{
    client::ApiClient,
    types::{ApiError, LeaveBalance},
};

impl ApiClient {
    pub async fn get_balances(&self) -> Result<Vec<LeaveBalance>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(
                self.http_client()
                    .get(format!("{}/api/balance/all", base_url)),
            )
            .await?;
        self.map_json_response(response).await
    }
}
