//! HTTP transport to the GitHub REST API.
use crate::errors::{GhForksError, GhForksErrorKind};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use std::future::Future;
use std::pin::Pin;

/// GitHub API URL
pub(crate) const GITHUB_API_URL: &str = "api.github.com";

/// GitHub API Header
const GITHUB_API_HEADER: &str = "X-GitHub-Api-Version";

/// GitHub API Version
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Boxed future returned by [`Transport`] methods.
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, GhForksError>> + Send + 'a>>;

/// One HTTP request against the API, returning the response body.
///
/// The trait is the seam between the paginating connection and the wire;
/// tests substitute a recording fake here.
pub trait Transport: Send + Sync {
    /// GET `url` with `query` appended.
    fn get(&self, url: &str, query: &[(String, String)]) -> TransportFuture<'_>;

    /// POST `body` as JSON to `url`.
    fn post(&self, url: &str, body: serde_json::Value) -> TransportFuture<'_>;
}

/// Transport performing real requests with reqwest.
#[derive(Default, Debug, Clone)]
pub struct HttpTransport {
    /// Github token
    token: String,

    /// Reqwest client
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a new HttpTransport authenticated with `token`.
    pub fn new(token: String) -> Self {
        Self {
            token,
            client: reqwest::Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(String, String)]) -> TransportFuture<'_> {
        let token = self.token.clone();
        let client = self.client.clone();
        let url = url.to_string();
        let query = query.to_vec();
        Box::pin(async move {
            let request = client
                .get(&url)
                .query(&query)
                .header(AUTHORIZATION, format!("Bearer {token}"))
                .header(ACCEPT, "application/vnd.github+json")
                .header(USER_AGENT, concat!("gh-forks/", env!("CARGO_PKG_VERSION")))
                .header(GITHUB_API_HEADER, GITHUB_API_VERSION)
                .send();
            let response = request.await?;
            if !response.status().is_success() {
                let text = response.text().await?;
                return Err(GhForksError::new(GhForksErrorKind::Api).with_text(&text));
            }
            Ok(response.text().await?)
        })
    }

    fn post(&self, url: &str, body: serde_json::Value) -> TransportFuture<'_> {
        let token = self.token.clone();
        let client = self.client.clone();
        let url = url.to_string();
        Box::pin(async move {
            let request = client
                .post(&url)
                .header(AUTHORIZATION, format!("Bearer {token}"))
                .header(ACCEPT, "application/vnd.github+json")
                .header(USER_AGENT, concat!("gh-forks/", env!("CARGO_PKG_VERSION")))
                .header(GITHUB_API_HEADER, GITHUB_API_VERSION)
                .json(&body)
                .send();
            let response = request.await?;
            if !response.status().is_success() {
                let text = response.text().await?;
                return Err(GhForksError::new(GhForksErrorKind::Api).with_text(&text));
            }
            Ok(response.text().await?)
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording fake transport shared by the crate's tests.
    #![allow(clippy::unwrap_used)]
    use super::{Transport, TransportFuture};
    use std::sync::{Arc, Mutex};

    /// One request observed by [`FakeTransport`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) struct RecordedRequest {
        /// HTTP method.
        pub(crate) method: &'static str,
        /// Absolute request URL.
        pub(crate) url: String,
        /// Query pairs sent with the request.
        pub(crate) query: Vec<(String, String)>,
        /// JSON body, for POST requests.
        pub(crate) body: Option<serde_json::Value>,
    }

    /// Transport returning canned bodies and recording every request.
    #[derive(Default)]
    pub(crate) struct FakeTransport {
        /// Bodies returned in order; an empty JSON array once exhausted.
        responses: Mutex<Vec<String>>,
        /// Requests seen so far.
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl FakeTransport {
        /// Create a fake that answers with `responses` in order.
        pub(crate) fn with_responses(responses: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.iter().map(|r| (*r).to_string()).collect()),
                requests: Mutex::new(Vec::new()),
            })
        }

        /// Requests recorded so far.
        pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// Pop the next canned response.
        fn next_response(&self) -> String {
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                "[]".to_string()
            } else {
                responses.remove(0)
            }
        }
    }

    impl Transport for FakeTransport {
        fn get(&self, url: &str, query: &[(String, String)]) -> TransportFuture<'_> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method: "GET",
                url: url.to_string(),
                query: query.to_vec(),
                body: None,
            });
            let response = self.next_response();
            Box::pin(async move { Ok(response) })
        }

        fn post(&self, url: &str, body: serde_json::Value) -> TransportFuture<'_> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method: "POST",
                url: url.to_string(),
                query: Vec::new(),
                body: Some(body),
            });
            let response = self.next_response();
            Box::pin(async move { Ok(response) })
        }
    }
}
