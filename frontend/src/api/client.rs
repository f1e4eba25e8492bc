use reqwest::{header::HeaderMap, Client, RequestBuilder, Response, StatusCode};

use crate::{api::types::ApiError, config, state::session};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    token: Option<String>,
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
            token: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
            token: None,
        }
    }

    /// Pins the bearer token instead of reading it from the stored session.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
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

    fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        let token = self
            .token
            .clone()
            .or_else(|| session::load_stored_user_info().and_then(|info| info.token));
        if let Some(token) = token {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", token)
                    .parse()
                    .map_err(|_| ApiError::unknown("Invalid token format"))?,
            );
        }
        Ok(headers)
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::info!("API rejected the session, clearing stored user info");
            session::clear_stored_user_info();
        }
    }

    /// Sends a request with the session's auth headers attached.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .headers(self.auth_headers()?)
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if let Some(mocked) = mocked_response(&request) {
            return mocked;
        }

        let method = request.method().clone();
        let url = request.url().to_string();
        self.client.execute(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, url, e);
            ApiError::network()
        })
    }

    /// Converts a non-success response into the error the screen displays.
    pub(crate) async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let parsed: Result<ApiError, _> = response.json().await;
        match parsed {
            Ok(error) if status == StatusCode::UNAUTHORIZED => ApiError {
                code: ApiError::UNAUTHORIZED.to_string(),
                ..error
            },
            Ok(error) => error,
            Err(_) if status == StatusCode::UNAUTHORIZED => {
                ApiError::unauthorized("Not authorized")
            }
            Err(_) => ApiError::request_failed(format!("Request failed with status {}", status)),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mocked_response(request: &reqwest::Request) -> Option<Result<Response, ApiError>> {
    mock_registry::find_mock(request.url().as_str())
        .map(|responder| responder.respond(request).and_then(MockResponse::into_response))
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mocked_response(_request: &reqwest::Request) -> Option<Result<Response, ApiError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod mock_registry {
    use crate::api::ApiError;
    use serde_json::Value;
    use std::sync::{Arc, Mutex, OnceLock};

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Clone, Debug)]
    pub struct MockResponse {
        status: u16,
        body: Value,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self { status, body }
        }

        pub fn into_response(self) -> Result<reqwest::Response, ApiError> {
            let body = serde_json::to_vec(&self.body)
                .map_err(|e| ApiError::unknown(format!("mock body: {}", e)))?;
            let response = http::Response::builder()
                .status(self.status)
                .header("content-type", "application/json")
                .body(body)
                .map_err(|e| ApiError::unknown(format!("mock response: {}", e)))?;
            Ok(reqwest::Response::from(response))
        }
    }

    type Registry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

    fn registry() -> &'static Registry {
        static MOCKS: OnceLock<Registry> = OnceLock::new();
        MOCKS.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        if let Ok(mut mocks) = registry().lock() {
            mocks.retain(|(base, _)| base != &base_url);
            mocks.push((base_url, responder));
        }
    }

    pub(super) fn find_mock(url: &str) -> Option<Arc<dyn TestResponder>> {
        let mocks = registry().lock().ok()?;
        mocks
            .iter()
            .filter(|(base, _)| url.starts_with(base.as_str()))
            .max_by_key(|(base, _)| base.len())
            .map(|(_, responder)| Arc::clone(responder))
    }
}
