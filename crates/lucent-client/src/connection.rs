//! Connections to the search server.

use lucent_proto::QueryParams;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::Error;

/// Longest response body excerpt kept in an HTTP status error.
const MAX_ERROR_BODY: usize = 512;

/// A connection able to issue `GET` requests against the search server.
///
/// Implementations own timeouts and retries; the executer calls `get` once per
/// round trip and propagates any error unchanged. If an implementation is
/// shared between threads it must be safe for concurrent use.
pub trait Connection {
    /// Send `GET <path>?<params>` and return the response body.
    fn get(&self, path: &str, params: &QueryParams) -> Result<String, Error>;
}

/// Blocking HTTP connection.
pub struct HttpConnection {
    client: reqwest::blocking::Client,
    config: ClientConfig,
}

impl HttpConnection {
    /// Build a connection from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the configuration this connection was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Connection for HttpConnection {
    fn get(&self, path: &str, params: &QueryParams) -> Result<String, Error> {
        let url = endpoint_url(&self.config.base_url, path);
        debug!(url = %url, params = params.len(), "Sending search request");

        let response = self
            .client
            .get(&url)
            .query(params.as_map())
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Transport(format!("request to {} timed out", url))
                } else {
                    Error::Transport(format!("request to {} failed: {}", url, e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(url = %url, status = status.as_u16(), "Search request rejected");
            return Err(Error::Transport(format!(
                "{} returned HTTP {}: {}",
                url,
                status,
                excerpt(&body)
            )));
        }

        response
            .text()
            .map_err(|e| Error::Transport(format!("failed to read response from {}: {}", url, e)))
    }
}

impl std::fmt::Debug for HttpConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpConnection")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish()
    }
}

/// Join a base URL and an endpoint path with exactly one `/` between them.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("http://localhost:8983/solr/books", "/select"),
            "http://localhost:8983/solr/books/select"
        );
        assert_eq!(
            endpoint_url("http://localhost:8983/solr/books/", "/select"),
            "http://localhost:8983/solr/books/select"
        );
        assert_eq!(
            endpoint_url("http://localhost:8983/solr/books", "select"),
            "http://localhost:8983/solr/books/select"
        );
        assert_eq!(
            endpoint_url("http://localhost:8983/solr/", ""),
            "http://localhost:8983/solr"
        );
    }

    #[test]
    fn test_excerpt_truncates_long_bodies() {
        let body = "x".repeat(MAX_ERROR_BODY + 10);
        assert_eq!(excerpt(&body).len(), MAX_ERROR_BODY);
        assert_eq!(excerpt("short"), "short");
    }

    #[test]
    fn test_new_keeps_config() {
        let connection = HttpConnection::new(
            ClientConfig::new("http://localhost:8983/solr/books")
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();
        assert_eq!(connection.config().timeout, Duration::from_secs(2));
        assert!(format!("{:?}", connection).contains("solr/books"));
    }

    #[test]
    fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let connection = HttpConnection::new(
            ClientConfig::new("http://127.0.0.1:9/solr").with_timeout(Duration::from_secs(2)),
        )
        .unwrap();
        let params = QueryParams::from([("q", "*:*")]);
        let err = connection.get("/select", &params).unwrap_err();
        assert!(err.is_transport());
    }
}
