use super::{
    client::{clear_session, persist_session, ApiClient},
    types::{ApiError, LoginRequest, SessionUser, SignUpRequest},
};
use crate::utils::navigation;

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<SessionUser, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_public(
                self.http_client()
                    .post(format!("{}/user/login", base_url))
                    .json(&request),
            )
            .await?;
        let user: SessionUser = self.map_json_response(response).await?;
        persist_session(&user)?;
        log::info!("signed in as {}", user.email);
        Ok(user)
    }

    pub async fn sign_up(&self, request: SignUpRequest) -> Result<SessionUser, ApiError> {
        if request.password != request.confirm_password {
            return Err(ApiError::validation("Passwords do not match!"));
        }
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_public(
                self.http_client()
                    .post(format!("{}/user/signIn", base_url))
                    .json(&request),
            )
            .await?;
        let user: SessionUser = self.map_json_response(response).await?;
        persist_session(&user)?;
        log::info!("registered {}", user.email);
        Ok(user)
    }

    /// Sessions are purely client-side; signing out forgets the token and
    /// leaves the app.
    pub fn logout(&self) {
        clear_session();
        navigation::replace_location("/");
    }
}
