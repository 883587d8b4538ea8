//! URL construction helpers for the API key endpoints.

use apikeys_core::ResourceId;
use apikeys_core::contracts::http::api_keys::API_KEYS_PATH;
use url::Url;

use crate::error::{HttpError, HttpResult};

/// Parse and validate a configured base URL.
///
/// Query and fragment are dropped; any path is kept as a prefix for the
/// API routes.
pub fn parse_base_url(raw: &str) -> HttpResult<Url> {
    let mut url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(HttpError::InvalidBaseUrl {
            url: raw.to_string(),
        });
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Build the collection URL (`{base}/api/apikeys`).
pub fn build_collection_url(base: &Url) -> Url {
    let mut url = base.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}{API_KEYS_PATH}"));

    url
}

/// Build the URL of a single key (`{base}/api/apikeys/{id}`).
///
/// Named ids are percent-encoded as one path segment.
pub fn build_resource_url(base: &Url, id: &ResourceId) -> Url {
    let mut url = build_collection_url(base);
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(&id.to_string());
    }
    url
}
