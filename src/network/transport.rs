//! Transport seam - the one place that actually talks HTTP

use std::time::Duration;

use futures_util::future::BoxFuture;
use reqwest::header::CONTENT_TYPE;

use crate::error::SearchError;
use crate::models::HttpReply;

/// Sends a JSON body with POST and hands back status + body text.
///
/// Implementations must not interpret the status; that is the caller's job.
pub trait SearchTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpReply, SearchError>>;
}

/// reqwest-backed transport
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        HttpTransport {
            client: create_client(timeout),
        }
    }
}

impl SearchTransport for HttpTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpReply, SearchError>> {
        Box::pin(async move {
            let resp = self
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await?;
            let status = resp.status().as_u16();
            let body = resp.text().await?;
            Ok(HttpReply { status, body })
        })
    }
}

/// Create an HTTP client. No timeout unless one is configured.
pub fn create_client(timeout: Option<Duration>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default HTTP client");
        reqwest::Client::new()
    })
}
