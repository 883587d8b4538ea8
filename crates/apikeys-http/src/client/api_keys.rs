//! Transport-level API key operations.
//!
//! These return `HttpError` so tests can assert on the underlying cause.
//! The contract impls in `port.rs` collapse them into `ApiKeyError`.

use apikeys_core::{ApiKey, NewApiKey, ResourceId};
use tracing::debug;

use crate::error::{HttpError, HttpResult};
use crate::http::{HttpBackend, HttpRequest, HttpResponse};
use crate::url::{build_collection_url, build_resource_url};

use super::ApiKeyClient;

impl<B: HttpBackend> ApiKeyClient<B> {
    /// `GET /api/apikeys`
    pub(crate) async fn fetch_all(&self) -> HttpResult<Vec<ApiKey>> {
        let url = build_collection_url(&self.base_url);
        self.send(HttpRequest::get(url)).await?.json()
    }

    /// `GET /api/apikeys/{id}`
    pub(crate) async fn fetch_one(&self, id: &ResourceId) -> HttpResult<ApiKey> {
        let url = build_resource_url(&self.base_url, id);
        self.send(HttpRequest::get(url)).await?.json()
    }

    /// `POST /api/apikeys`
    pub(crate) async fn create_key(&self, payload: &NewApiKey) -> HttpResult<ApiKey> {
        let url = build_collection_url(&self.base_url);
        let body = serde_json::to_vec(payload)?;
        self.send(HttpRequest::post(url, body)).await?.json()
    }

    /// `DELETE /api/apikeys/{id}`
    ///
    /// The response body is ignored.
    pub(crate) async fn delete_key(&self, id: &ResourceId) -> HttpResult<()> {
        let url = build_resource_url(&self.base_url, id);
        self.send(HttpRequest::delete(url)).await?;
        Ok(())
    }

    /// Execute a request once and reject statuses outside 200-299.
    async fn send(&self, request: HttpRequest) -> HttpResult<HttpResponse> {
        let method = request.method.clone();
        let url = request.url.to_string();
        debug!(%method, %url, "Sending API key request");

        let response = self.backend.execute(request).await?;
        debug!(%method, %url, status = response.status.as_u16(), "Received response");

        if !response.is_success() {
            return Err(HttpError::Status {
                status: response.status.as_u16(),
                url,
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{client_with, fake_key_json};
    use crate::http::testing::{CannedResponse, FakeBackend};
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_all_parses_array_in_order() {
        let backend = FakeBackend::new().with_response(
            Method::GET,
            "/api/apikeys",
            CannedResponse::json(200, &json!([fake_key_json(2, "b"), fake_key_json(1, "a")])),
        );
        let client = client_with(backend);

        let keys = client.fetch_all().await.unwrap();
        assert_eq!(keys.iter().map(|k| k.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_status_error_carries_status_and_url() {
        let backend = FakeBackend::new().with_response(
            Method::GET,
            "/api/apikeys",
            CannedResponse::raw(500, r#"{"error":"boom"}"#),
        );
        let client = client_with(backend);

        match client.fetch_all().await {
            Err(HttpError::Status { status, url }) => {
                assert_eq!(status, 500);
                assert_eq!(url, "http://keys.test/api/apikeys");
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let backend = FakeBackend::new().with_response(
            Method::GET,
            "/api/apikeys",
            CannedResponse::raw(200, "<html>oops</html>"),
        );
        let client = client_with(backend);

        assert!(matches!(client.fetch_all().await, Err(HttpError::Json(_))));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_json_error() {
        let backend = FakeBackend::new().with_response(
            Method::GET,
            "/api/apikeys",
            CannedResponse::json(200, &json!([{"id": "not-a-number"}])),
        );
        let client = client_with(backend);

        assert!(matches!(client.fetch_all().await, Err(HttpError::Json(_))));
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let backend = FakeBackend::new().with_response(
            Method::DELETE,
            "/api/apikeys/5",
            CannedResponse::raw(200, "not json at all"),
        );
        let client = client_with(backend);

        client.delete_key(&ResourceId::from(5_i64)).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_sends_serialized_payload() {
        let backend = FakeBackend::new().with_response(
            Method::POST,
            "/api/apikeys",
            CannedResponse::json(201, &fake_key_json(3, "ci")),
        );
        let client = client_with(backend);

        let created = client.create_key(&NewApiKey::new("ci")).await.unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(client.backend.single_body(), json!({"description": "ci"}));
    }
}
