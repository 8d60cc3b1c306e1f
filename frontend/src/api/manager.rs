use super::{
    client::ApiClient,
    types::{ApiError, PendingRequest},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn segment(self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Reject => "reject",
        }
    }
}

impl ApiClient {
    pub async fn get_pending_requests(&self) -> Result<Vec<PendingRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(
                self.http_client()
                    .get(format!("{}/manage/users/pending", base_url)),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn approve_request(&self, id: &str) -> Result<(), ApiError> {
        self.decide_request(id, Decision::Approve).await
    }

    pub async fn reject_request(&self, id: &str) -> Result<(), ApiError> {
        self.decide_request(id, Decision::Reject).await
    }

    pub async fn decide_request(&self, id: &str, decision: Decision) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(self.http_client().put(format!(
                "{}/manage/requests/{}/{}",
                base_url,
                id,
                decision.segment()
            )))
            .await?;
        self.map_empty_response(response).await
    }
}
