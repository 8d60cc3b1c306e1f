#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PUT: Method = Method::PUT;

    type RouteKey = (Method, String);

    /// In-process stand-in for the backend. Every request is journaled, then
    /// answered by the route registered for its method and path. Registering
    /// the same method and path again replaces the earlier answer.
    #[derive(Clone)]
    pub struct MockServer {
        state: Arc<Mutex<ServerState>>,
        base: String,
    }

    #[derive(Default)]
    struct ServerState {
        routes: HashMap<RouteKey, MockResponse>,
        journal: Vec<ReceivedRequest>,
    }

    impl ServerState {
        fn handle(&mut self, request: ReceivedRequest) -> Option<MockResponse> {
            let answer = self
                .routes
                .get(&(request.method.clone(), request.path.clone()))
                .cloned();
            self.journal.push(request);
            answer
        }
    }

    #[derive(Debug, Clone)]
    pub struct ReceivedRequest {
        pub method: Method,
        pub path: String,
        pub authorization: Option<String>,
        pub body: Option<Value>,
    }

    impl ReceivedRequest {
        fn capture(request: &reqwest::Request) -> Self {
            Self {
                method: request.method().clone(),
                path: request.url().path().to_string(),
                authorization: request
                    .headers()
                    .get(reqwest::header::AUTHORIZATION)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string),
                body: request
                    .body()
                    .and_then(|body| body.as_bytes())
                    .and_then(|bytes| serde_json::from_slice(bytes).ok()),
            }
        }
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            Self {
                state: Arc::default(),
                base: format!("http://mock-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            }
        }

        /// Absolute URL for `path`; also routes client traffic under it here.
        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);
            let key = when.into_key();
            self.lock().routes.insert(key, then.into_response());
        }

        pub fn received(&self) -> Vec<ReceivedRequest> {
            self.lock().journal.clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.lock()
                .journal
                .iter()
                .filter(|req| req.method == method && req.path == path)
                .count()
        }

        fn lock(&self) -> std::sync::MutexGuard<'_, ServerState> {
            self.state.lock().expect("mock server lock")
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let received = ReceivedRequest::capture(request);
            let label = format!("{} {}", received.method, received.path);
            self.state
                .lock()
                .map_err(|_| ApiError::unknown("mock server lock"))?
                .handle(received)
                .ok_or_else(|| ApiError::unknown(format!("No mock for {}", label)))
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }

        fn into_key(self) -> RouteKey {
            (
                self.method.expect("mock requires method"),
                self.path.expect("mock requires path"),
            )
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        fn into_response(self) -> MockResponse {
            MockResponse::json(
                self.status.unwrap_or(200),
                self.body.unwrap_or_else(|| serde_json::json!({})),
            )
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serde_json::json;

        fn request(method: Method, url: &str) -> reqwest::Request {
            reqwest::Request::new(method, reqwest::Url::parse(url).unwrap())
        }

        #[test]
        fn later_route_replaces_earlier_one() {
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path("/api/balances");
                then.status(500);
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/balances");
                then.status(200).json_body(json!([]));
            });

            let url = format!("{}/api/balances", server.base);
            let answer = server.respond(&request(GET, &url)).unwrap();
            assert_eq!(answer, MockResponse::json(200, json!([])));
        }

        #[test]
        fn unmatched_request_is_journaled_and_rejected() {
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path("/api/balances");
                then.status(200);
            });

            let url = format!("{}/api/balances", server.base);
            let err = server.respond(&request(POST, &url)).unwrap_err();
            assert!(err.to_string().contains("No mock for POST /api/balances"));
            assert_eq!(server.hits(POST, "/api/balances"), 1);
            assert_eq!(server.hits(GET, "/api/balances"), 0);
        }
    }
}
