//! Public configuration for the API key client.

/// Default server the client talks to when no base URL is given.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8787";

/// Configuration for the API key client.
///
/// # Example
///
/// ```
/// use apikeys_http::ApiKeyClientConfig;
///
/// let config = ApiKeyClientConfig::new()
///     .with_base_url("https://admin.example.com")
///     .with_user_agent("my-app/1.0");
/// assert_eq!(config.base_url(), "https://admin.example.com");
/// ```
#[derive(Debug, Clone)]
pub struct ApiKeyClientConfig {
    /// Origin (and optional path prefix) the `/api/apikeys` routes live under
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for ApiKeyClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("apikeys-http/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiKeyClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the server.
    ///
    /// Defaults to `http://127.0.0.1:8787`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The configured base URL, unparsed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
