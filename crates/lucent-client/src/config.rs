//! Client configuration.

use std::time::Duration;

/// Default base URL of a local search server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8983/solr";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration for [`HttpConnection`](crate::HttpConnection).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the core or collection (e.g., "http://127.0.0.1:8983/solr/books").
    pub base_url: String,

    /// Request timeout, covering connect and body read.
    pub timeout: Duration,

    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a new client configuration with the specified base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }

    /// Create a configuration for a server on localhost on the default port.
    pub fn localhost() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::localhost()
    }
}

fn default_user_agent() -> String {
    format!("lucent/{}", env!("CARGO_PKG_VERSION"))
}
