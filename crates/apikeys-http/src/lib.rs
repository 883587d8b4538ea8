#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{ApiKeyClient, DefaultApiKeyClient};

// Configuration
pub use config::{ApiKeyClientConfig, DEFAULT_BASE_URL};

// Construction errors
pub use error::{HttpError, HttpResult};

// Backend seam
pub use http::{HttpBackend, HttpRequest, HttpResponse, ReqwestBackend};

// Silence unused dev-dependency warnings
#[cfg(test)]
use wiremock as _;
