//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Production base URL of the Property Validation API.
pub const DEFAULT_BASE_URL: &str = "https://api.bentley.com/validation/propertyValue";

/// API version requested through the `Accept` header.
pub const DEFAULT_API_VERSION: &str = "itwin-platform.v1";

/// Configuration for the Property Validation client.
///
/// # Example
///
/// ```
/// use property_validation::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_base_url("https://qa-api.bentley.com/validation/propertyValue")
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL that every endpoint path is appended to
    pub base_url: String,
    /// API version, sent as `application/vnd.bentley.<version>+json`
    pub api_version: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!(
                "property-validation-rs/{} (Rust)",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Value of the `Accept` header for this API version.
    pub fn accept_header(&self) -> String {
        format!("application/vnd.bentley.{}+json", self.api_version)
    }

    /// Check that the base URL parses and the API version is set.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported base URL scheme: {}",
                url.scheme()
            )));
        }
        if self.api_version.trim().is_empty() {
            return Err(Error::Config("API version must not be empty".to_string()));
        }
        Ok(())
    }
}
