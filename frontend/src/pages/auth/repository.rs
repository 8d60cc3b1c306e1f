use crate::api::{ApiClient, ApiError, LoginRequest, SessionUser, SignUpRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct AuthRepository {
    client: Rc<ApiClient>,
}

impl AuthRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<SessionUser, ApiError> {
        self.client.login(request).await
    }

    pub async fn sign_up(&self, request: SignUpRequest) -> Result<SessionUser, ApiError> {
        self.client.sign_up(request).await
    }

    pub fn logout(&self) {
        self.client.logout();
    }
}

impl Default for AuthRepository {
    fn default() -> Self {
        Self::new()
    }
}
