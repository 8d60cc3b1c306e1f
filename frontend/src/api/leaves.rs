use super::{
    client::ApiClient,
    types::{ApiError, ApplyLeaveRequest, LeaveRequestRecord},
};

impl ApiClient {
    /// A `404` from the backend means the balance cannot cover the range and
    /// surfaces as `ApiError` with code `NOT_FOUND`.
    pub async fn apply_leave(&self, request: ApplyLeaveRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(
                self.http_client()
                    .post(format!("{}/api/leaves/apply", base_url))
                    .json(&request),
            )
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn get_my_requests(&self) -> Result<Vec<LeaveRequestRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(
                self.http_client()
                    .get(format!("{}/api/leaves/history", base_url)),
            )
            .await?;
        self.map_json_response(response).await
    }
}
