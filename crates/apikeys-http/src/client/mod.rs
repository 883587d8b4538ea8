//! API key client.
//!
//! This module provides the client that turns API key operations into
//! requests against an [`HttpBackend`].

mod api_keys;

use url::Url;

use crate::config::ApiKeyClientConfig;
use crate::error::HttpResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::url::parse_base_url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default API key client using the reqwest HTTP backend.
pub type DefaultApiKeyClient = ApiKeyClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the `/api/apikeys` endpoints.
///
/// Generic over the HTTP backend so tests can inject canned responses.
/// Use `DefaultApiKeyClient` for production code. Holds no state besides
/// the backend and base URL, so concurrent calls are independent.
pub struct ApiKeyClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultApiKeyClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &ApiKeyClientConfig) -> HttpResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        Self::with_backend(&config.base_url, backend)
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> HttpResult<Self> {
        Self::new(&ApiKeyClientConfig::default())
    }
}

impl<B: HttpBackend> ApiKeyClient<B> {
    /// Create a new client with a custom backend.
    pub fn with_backend(base_url: &str, backend: B) -> HttpResult<Self> {
        Ok(Self {
            backend,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// The parsed base URL requests are built from.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}
