use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::types::*, config, utils::navigation, utils::storage as storage_utils};

pub const SESSION_STORAGE_KEY: &str = "leave-tracker-user";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    fn bearer_token() -> Result<String, ApiError> {
        load_session()
            .map(|user| user.jwt)
            .ok_or_else(|| ApiError::unauthorized("No session token"))
    }

    /// Sends a request without credentials (login, sign-up).
    pub(crate) async fn send_public(
        &self,
        builder: RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        self.send(request).await
    }

    /// Sends a request carrying the stored session's bearer token.
    pub(crate) async fn send_authorized(
        &self,
        builder: RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let token = match Self::bearer_token() {
            Ok(token) => token,
            Err(err) => {
                Self::handle_unauthorized_status(StatusCode::UNAUTHORIZED);
                return Err(err);
            }
        };
        let request = builder
            .bearer_auth(token)
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        let response = self.send(request).await?;
        Self::handle_unauthorized_status(response.status());
        Ok(response)
    }

    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, ApiError> {
        log::debug!("{} {}", request.method(), request.url());
        if let Some(mocked) = test_transport::respond(&request) {
            return mocked;
        }
        self.client.execute(request).await.map_err(|e| {
            log::error!("request failed: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("session rejected by backend; signing out");
            clear_session();
            navigation::replace_location("/");
        }
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// For endpoints whose success body is irrelevant.
    pub(crate) async fn map_empty_response(
        &self,
        response: reqwest::Response,
    ) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let error = serde_json::from_str::<ApiError>(&body)
            .unwrap_or_else(|_| ApiError::from_status(status, &body));
        log::warn!("backend answered {}: {}", status, error);
        error
    }
}

fn decode_claims(token: &str) -> Option<Value> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// `true` when the token carries an `exp` claim that has already passed.
/// Opaque tokens are treated as live; the backend has the final word.
pub(crate) fn token_expired(token: &str, now_unix: i64) -> bool {
    decode_claims(token)
        .and_then(|claims| claims.get("exp").and_then(Value::as_i64))
        .map(|exp| exp <= now_unix)
        .unwrap_or(false)
}

/// Stored session, if one exists and its token is usable.
pub fn load_session() -> Option<SessionUser> {
    let raw = storage_utils::get_item(SESSION_STORAGE_KEY).ok().flatten()?;
    let user: SessionUser = match serde_json::from_str(&raw) {
        Ok(user) => user,
        Err(err) => {
            log::warn!("discarding unreadable session: {}", err);
            clear_session();
            return None;
        }
    };
    if !user.has_token() || token_expired(&user.jwt, chrono::Utc::now().timestamp()) {
        return None;
    }
    Some(user)
}

pub fn persist_session(user: &SessionUser) -> Result<(), ApiError> {
    let raw = serde_json::to_string(user)
        .map_err(|e| ApiError::unknown(format!("Failed to store session: {}", e)))?;
    storage_utils::set_item(SESSION_STORAGE_KEY, &raw).map_err(ApiError::unknown)
}

pub fn clear_session() {
    if let Err(err) = storage_utils::remove_item(SESSION_STORAGE_KEY) {
        log::warn!("failed to clear session: {}", err);
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
mod test_transport {
    use super::ApiError;

    pub fn respond(_request: &reqwest::Request) -> Option<Result<reqwest::Response, ApiError>> {
        None
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
pub use test_transport::{register_mock, MockResponse, TestResponder};
