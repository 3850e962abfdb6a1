//! Paginating connection to the GitHub REST API.
use crate::errors::GhForksError;
use crate::options::ApiOptions;
use crate::transport::{HttpTransport, Transport, GITHUB_API_URL};
use futures::Stream;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Page size used when the options do not specify one.
const DEFAULT_PAGE_SIZE: u32 = 100;

/// First page requested when the options do not specify one.
const DEFAULT_START_PAGE: u32 = 1;

/// Connection to the API, shared by all resource clients.
///
/// Performs single JSON requests and flattens paginated collections into
/// one lazy sequence. Holds the [`Transport`] for its entire lifetime.
#[derive(Clone)]
pub struct Connection {
    /// Wire transport.
    transport: Arc<dyn Transport>,
}

/// Build the absolute URL for an API resource path.
fn absolute(path: &str) -> Result<Url, GhForksError> {
    let base = Url::parse(&format!("https://{GITHUB_API_URL}/"))?;
    Ok(base.join(path)?)
}

impl Connection {
    /// Create a connection authenticated with `token`.
    pub fn new(token: String) -> Self {
        Self {
            transport: Arc::new(HttpTransport::new(token)),
        }
    }

    /// Create a connection over an existing transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// GET a single resource and deserialize the response.
    ///
    /// # Errors
    /// Error if the request fails or the response can't be deserialized
    pub async fn get<T>(&self, path: &str, params: &[(String, String)]) -> Result<T, GhForksError>
    where
        T: DeserializeOwned,
    {
        let url = absolute(path)?;
        let text = self.transport.get(url.as_str(), params).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// POST a JSON body to a resource and deserialize the response.
    ///
    /// # Errors
    /// Error if the request fails or the response can't be deserialized
    pub async fn post<T>(&self, path: &str, body: serde_json::Value) -> Result<T, GhForksError>
    where
        T: DeserializeOwned,
    {
        let url = absolute(path)?;
        let text = self.transport.post(url.as_str(), body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// GET every page of a collection, flattened into one lazy sequence.
    ///
    /// Pages are requested with increasing `page` numbers until one comes
    /// back empty, or until `page_count` pages were fetched. Nothing is
    /// requested before the stream is first polled.
    pub fn get_all_pages<T>(
        &self,
        path: String,
        params: Vec<(String, String)>,
        options: ApiOptions,
    ) -> impl Stream<Item = Result<T, GhForksError>> + Send + 'static
    where
        T: DeserializeOwned + Send + 'static,
    {
        let transport = Arc::clone(&self.transport);
        async_stream::try_stream! {
            let url = absolute(&path)?;
            let per_page = options.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
            let mut page = options.start_page.unwrap_or(DEFAULT_START_PAGE);
            let mut pages_fetched: u32 = 0;
            loop {
                if let Some(max) = options.page_count {
                    if pages_fetched >= max {
                        break;
                    }
                }
                let mut query = params.clone();
                query.push(("per_page".to_string(), per_page.to_string()));
                query.push(("page".to_string(), page.to_string()));
                let text = transport.get(url.as_str(), &query).await?;
                let items: Vec<T> = serde_json::from_str(&text)?;
                log::debug!("requested {path} (page {page}): {} items", items.len());
                if items.is_empty() {
                    break;
                }
                for item in items {
                    yield item;
                }
                pages_fetched += 1;
                page += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::FakeTransport;
    use futures::StreamExt;
    use serde::Deserialize;

    /// Minimal page item for pagination tests.
    #[derive(Debug, Deserialize, PartialEq, Eq)]
    struct Item {
        /// Item id.
        id: u64,
    }

    /// Collect a stream of items, panicking on the first error.
    async fn collect_ids(
        stream: impl Stream<Item = Result<Item, GhForksError>>,
    ) -> Vec<u64> {
        let items: Vec<Result<Item, GhForksError>> = stream.collect().await;
        items
            .into_iter()
            .map(|item| match item {
                Ok(item) => item.id,
                Err(e) => panic!("unexpected error: {e}"),
            })
            .collect()
    }

    #[tokio::test]
    async fn flattens_pages_in_order() {
        let transport = FakeTransport::with_responses(&[
            r#"[{"id":1},{"id":2}]"#,
            r#"[{"id":3}]"#,
            "[]",
        ]);
        let connection = Connection::with_transport(transport.clone());
        let stream = connection.get_all_pages::<Item>(
            "repos/octocat/Hello-World/forks".to_string(),
            Vec::new(),
            ApiOptions::default(),
        );
        assert_eq!(collect_ids(stream).await, vec![1, 2, 3]);

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        for (index, request) in requests.iter().enumerate() {
            assert_eq!(
                request.url,
                "https://api.github.com/repos/octocat/Hello-World/forks"
            );
            let page = ("page".to_string(), (index as u32 + 1).to_string());
            assert!(request.query.contains(&page));
            let per_page = ("per_page".to_string(), "100".to_string());
            assert!(request.query.contains(&per_page));
        }
    }

    #[test]
    fn stream_is_lazy_until_polled() {
        let transport = FakeTransport::with_responses(&[r#"[{"id":1}]"#]);
        let connection = Connection::with_transport(transport.clone());
        let stream = connection.get_all_pages::<Item>(
            "repos/octocat/Hello-World/forks".to_string(),
            Vec::new(),
            ApiOptions::default(),
        );
        assert!(transport.requests().is_empty());
        drop(stream);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn honors_page_count_limit() {
        let transport = FakeTransport::with_responses(&[
            r#"[{"id":1},{"id":2}]"#,
            r#"[{"id":3},{"id":4}]"#,
        ]);
        let connection = Connection::with_transport(transport.clone());
        let stream = connection.get_all_pages::<Item>(
            "repositories/1296269/forks".to_string(),
            Vec::new(),
            ApiOptions {
                page_count: Some(1),
                ..ApiOptions::default()
            },
        );
        assert_eq!(collect_ids(stream).await, vec![1, 2]);
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn honors_page_size_and_start_page() {
        let transport = FakeTransport::with_responses(&[r#"[{"id":5}]"#, "[]"]);
        let connection = Connection::with_transport(transport.clone());
        let stream = connection.get_all_pages::<Item>(
            "repos/octocat/Hello-World/forks".to_string(),
            Vec::new(),
            ApiOptions {
                page_size: Some(30),
                start_page: Some(3),
                page_count: None,
            },
        );
        assert_eq!(collect_ids(stream).await, vec![5]);

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        let per_page = ("per_page".to_string(), "30".to_string());
        assert!(requests[0].query.contains(&per_page));
        let first = ("page".to_string(), "3".to_string());
        assert!(requests[0].query.contains(&first));
        let second = ("page".to_string(), "4".to_string());
        assert!(requests[1].query.contains(&second));
    }

    #[tokio::test]
    async fn surfaces_deserialization_errors() {
        let transport = FakeTransport::with_responses(&["not json"]);
        let connection = Connection::with_transport(transport);
        let stream = connection.get_all_pages::<Item>(
            "repos/octocat/Hello-World/forks".to_string(),
            Vec::new(),
            ApiOptions::default(),
        );
        let items: Vec<Result<Item, GhForksError>> = stream.collect().await;
        assert_eq!(items.len(), 1);
        assert!(items[0].is_err());
    }

    #[tokio::test]
    async fn get_builds_absolute_url() {
        let transport = FakeTransport::with_responses(&[r#"{"id": 1}"#]);
        let connection = Connection::with_transport(transport.clone());
        let item: Result<Item, GhForksError> =
            connection.get("repositories/1296269/forks", &[]).await;
        match item {
            Ok(item) => assert_eq!(item.id, 1),
            Err(e) => panic!("unexpected error: {e}"),
        }
        assert_eq!(
            transport.requests()[0].url,
            "https://api.github.com/repositories/1296269/forks"
        );
    }
}
