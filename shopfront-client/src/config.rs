//! Client configuration

use shopfront_core::session::Session;

use crate::HttpClient;

/// Configuration for connecting to the storefront backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client bound to a session
    pub fn build(&self, session: Session) -> HttpClient {
        HttpClient::new(self, session)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_the_default_timeout() {
        let config = ClientConfig::new("https://shop.example.com").with_timeout(5);
        assert_eq!(config.base_url, "https://shop.example.com");
        assert_eq!(config.timeout, 5);

        let default = ClientConfig::default();
        assert_eq!(default.timeout, 30);
    }
}
