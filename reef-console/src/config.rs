//! Console configuration

use reef_client::ClientConfig;

use crate::route::Route;

/// Runtime settings for the console.
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | REEF_API_BASE_URL | http://localhost:4000 | customers API base URL |
/// | REEF_REQUEST_TIMEOUT_SECS | 30 | request timeout, 0 disables |
/// | REEF_API_TOKEN | unset | bearer token |
/// | REEF_OPERATOR | David ben Yosef | operator shown in the sidebar |
/// | REEF_DEMO | unset | 1/true runs against the in-memory store |
///
/// Command line flags (`--base-url`, `--route`, `--operator`, `--demo`)
/// override the environment; see the binary's `--help`.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Connection settings handed to the HTTP client
    pub client: ClientConfig,
    /// Operator name for the sidebar footer
    pub operator: String,
    /// Run against the seeded in-memory store instead of the network
    pub demo: bool,
    /// Screen shown at startup
    pub initial_route: Route,
}

impl ConsoleConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let demo = std::env::var("REEF_DEMO")
            .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "True"))
            .unwrap_or(false);

        Self {
            client: ClientConfig::from_env(),
            operator: std::env::var("REEF_OPERATOR")
                .unwrap_or_else(|_| "David ben Yosef".to_string()),
            demo,
            initial_route: Route::Customers,
        }
    }

    /// Fixed settings for tests, no environment involved.
    pub fn with_overrides(base_url: &str, operator: &str) -> Self {
        Self {
            client: ClientConfig::new(base_url),
            operator: operator.to_string(),
            demo: false,
            initial_route: Route::Customers,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            operator: "David ben Yosef".to_string(),
            demo: false,
            initial_route: Route::Customers,
        }
    }
}
