//! HTTP backend abstraction for the API key endpoints.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and performs exactly one attempt per request.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiKeyClientConfig;
use crate::error::HttpResult;

/// Content type declared on every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

// ============================================================================
// Request / Response
// ============================================================================

/// A request against the API key endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    /// Serialized JSON body, sent verbatim.
    pub body: Option<Vec<u8>>,
    /// Whether the caller reads the response body. When false the backend
    /// stops after the status line and hands back an empty body.
    pub reads_body: bool,
}

impl HttpRequest {
    pub const fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            body: None,
            reads_body: true,
        }
    }

    pub const fn post(url: Url, body: Vec<u8>) -> Self {
        Self {
            method: Method::POST,
            url,
            body: Some(body),
            reads_body: true,
        }
    }

    pub const fn delete(url: Url) -> Self {
        Self {
            method: Method::DELETE,
            url,
            body: None,
            reads_body: false,
        }
    }
}

/// A fully received response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the 200-299 range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> HttpResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can execute API key requests.
///
/// Implementations report transport failures as errors and hand back every
/// received response, whatever its status. Status interpretation belongs to
/// the client.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> HttpResult<HttpResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// No retries and no request timeout: a request runs until the server
/// answers or the connection fails.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ApiKeyClientConfig) -> HttpResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: HttpRequest) -> HttpResult<HttpResponse> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = if request.reads_body {
            response.bytes().await?.to_vec()
        } else {
            Vec::new()
        };

        Ok(HttpResponse { status, body })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
