//! Client configuration

/// Connection settings for the customers API.
///
/// # Environment variables
///
/// Every field can be set from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | REEF_API_BASE_URL | http://localhost:4000 | API base URL |
/// | REEF_REQUEST_TIMEOUT_SECS | 30 | Request timeout, 0 disables |
/// | REEF_API_TOKEN | unset | Bearer token, sent when present |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:4000")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds (0 = no timeout)
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        let base = Self::default();
        Self {
            base_url: std::env::var("REEF_API_BASE_URL").unwrap_or(base.base_url),
            token: std::env::var("REEF_API_TOKEN").ok(),
            timeout: std::env::var("REEF_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(base.timeout),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:4000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.timeout, 30);
        assert!(config.token.is_none());
    }

    #[test]
    fn builder_overrides_stick() {
        let config = ClientConfig::new("https://api.reef.example")
            .with_token("tok")
            .with_timeout(5);
        assert_eq!(config.base_url, "https://api.reef.example");
        assert_eq!(config.token.as_deref(), Some("tok"));
        assert_eq!(config.timeout, 5);
    }
}
