//! Search client - request encoding, response interpretation, failure logging

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::error::SearchError;
use crate::messages::NetworkResponse;
use crate::models::{Query, SearchRequest};
use crate::network::transport::{HttpTransport, SearchTransport};

/// Posts queries to one fixed endpoint through a pluggable transport
#[derive(Clone)]
pub struct SearchClient {
    transport: Arc<dyn SearchTransport>,
    endpoint: Arc<str>,
}

impl SearchClient {
    pub fn new(transport: Arc<dyn SearchTransport>, endpoint: impl Into<String>) -> Self {
        SearchClient {
            transport,
            endpoint: Arc::from(endpoint.into()),
        }
    }

    /// Client talking real HTTP to the configured endpoint
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(HttpTransport::new(config.timeout())),
            config.endpoint.clone(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `{"query": query}` and return the `results` array.
    pub async fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let body = SearchRequest::new(query).to_json();
        let reply = self.transport.post_json(&self.endpoint, body).await?;
        reply.into_results()
    }
}

/// Run one search and package the outcome for the app layer.
///
/// A failure is logged here, once, and nowhere else.
pub async fn run_search(client: &SearchClient, id: u64, query: Query) -> NetworkResponse {
    let start = Instant::now();
    let outcome = client.search(&query).await;
    let time_ms = start.elapsed().as_millis() as u64;

    match outcome {
        Ok(results) => NetworkResponse::Results {
            id,
            results,
            time_ms,
        },
        Err(error) => {
            tracing::error!(id, query = %query, error = %error, "Error fetching search results");
            NetworkResponse::Failed { id, error, time_ms }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HttpReply;
    use crate::network::transport::fake::FakeTransport;
    use std::io;
    use std::sync::Mutex;

    const ENDPOINT: &str = "http://localhost:5000/search";

    fn client_with(replies: Vec<Result<HttpReply, SearchError>>) -> (SearchClient, Arc<FakeTransport>) {
        let transport = Arc::new(FakeTransport::replying(replies));
        (SearchClient::new(transport.clone(), ENDPOINT), transport)
    }

    /// Collects formatted tracing output for the current thread
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn count(&self, needle: &str) -> usize {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes).matches(needle).count()
        }
    }

    fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (buffer, guard)
    }

    #[tokio::test]
    async fn test_posts_query_to_endpoint() {
        let (client, transport) = client_with(vec![Ok(HttpReply::new(200, r#"{"results":[]}"#))]);
        client.search("cats & dogs").await.unwrap();

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, ENDPOINT);
        assert_eq!(requests[0].1, r#"{"query":"cats & dogs"}"#);
    }

    #[tokio::test]
    async fn test_empty_query_is_sent() {
        let (client, transport) = client_with(vec![Ok(HttpReply::new(200, r#"{"results":[]}"#))]);
        client.search("").await.unwrap();
        assert_eq!(transport.bodies(), vec![String::from(r#"{"query":""}"#)]);
    }

    #[tokio::test]
    async fn test_success_returns_results_verbatim() {
        let body = r#"{"results":["https://a.com","https://b.com"]}"#;
        let (client, _) = client_with(vec![Ok(HttpReply::new(200, body))]);
        let results = client.search("rust vs go").await.unwrap();
        assert_eq!(results, vec!["https://a.com", "https://b.com"]);
    }

    #[tokio::test]
    async fn test_server_error_logged_once() {
        let (logs, _guard) = capture_logs();
        let (client, _) = client_with(vec![Ok(HttpReply::new(500, "Internal Server Error"))]);

        let response = run_search(&client, 7, String::from("x")).await;

        assert!(matches!(
            response,
            NetworkResponse::Failed { id: 7, error: SearchError::Status(500), .. }
        ));
        assert_eq!(logs.count("Error fetching search results"), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_logged_once() {
        let (logs, _guard) = capture_logs();
        let (client, _) = client_with(vec![Err(SearchError::Transport(String::from(
            "connection refused",
        )))]);

        let response = run_search(&client, 1, String::from("x")).await;

        assert!(matches!(response, NetworkResponse::Failed { error: SearchError::Transport(_), .. }));
        assert_eq!(logs.count("Error fetching search results"), 1);
    }

    #[tokio::test]
    async fn test_success_logs_no_error() {
        let (logs, _guard) = capture_logs();
        let (client, _) = client_with(vec![Ok(HttpReply::new(200, r#"{"results":["https://a.com"]}"#))]);

        let response = run_search(&client, 2, String::from("a")).await;

        assert!(matches!(response, NetworkResponse::Results { id: 2, .. }));
        assert_eq!(logs.count("ERROR"), 0);
    }

    #[tokio::test]
    async fn test_shape_failure_is_an_error() {
        let (client, _) = client_with(vec![
            Ok(HttpReply::new(200, r#"{"results":"nope"}"#)),
            Ok(HttpReply::new(200, r#"{}"#)),
        ]);
        assert!(matches!(client.search("a").await, Err(SearchError::Shape(_))));
        assert!(matches!(client.search("a").await, Err(SearchError::Shape(_))));
    }

    #[tokio::test]
    async fn test_decode_failure() {
        let (client, _) = client_with(vec![Ok(HttpReply::new(200, "not json"))]);
        assert!(matches!(client.search("a").await, Err(SearchError::Decode(_))));
    }
}
