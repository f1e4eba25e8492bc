#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const DELETE: Method = Method::DELETE;

    /// Canned product API keyed by method and path, recording every request.
    #[derive(Clone)]
    pub struct MockServer {
        base: String,
        state: Arc<Mutex<Recorded>>,
    }

    #[derive(Default)]
    struct Recorded {
        routes: Vec<(Method, String, MockResponse)>,
        received: Vec<Received>,
    }

    #[derive(Clone, Debug)]
    pub struct Received {
        pub method: Method,
        pub path: String,
        pub authorization: Option<String>,
    }

    impl MockServer {
        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            Self {
                base: format!("http://mock-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)),
                state: Arc::default(),
            }
        }

        /// Base URL for an `ApiClient`; requests under it are answered here.
        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        /// Answers `method path` with `status` and a JSON `body`. Later routes win.
        pub fn on(&self, method: Method, path: &str, status: u16, body: Value) {
            self.state
                .lock()
                .expect("mock lock")
                .routes
                .push((method, path.to_string(), MockResponse::json(status, body)));
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.received()
                .iter()
                .filter(|request| request.method == method && request.path == path)
                .count()
        }

        pub fn received(&self) -> Vec<Received> {
            self.state.lock().expect("mock lock").received.clone()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method();
            let path = request.url().path();
            let mut state = self
                .state
                .lock()
                .map_err(|_| ApiError::unknown("mock lock"))?;
            state.received.push(Received {
                method: method.clone(),
                path: path.to_string(),
                authorization: request
                    .headers()
                    .get(reqwest::header::AUTHORIZATION)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string),
            });
            state
                .routes
                .iter()
                .rev()
                .find(|(route_method, route_path, _)| route_method == method && route_path == path)
                .map(|(_, _, response)| response.clone())
                .ok_or_else(|| ApiError::unknown(format!("No mock for {} {}", method, path)))
        }
    }
}
