//! Contract implementations for `ApiKeyClient`.
//!
//! This module implements the core-owned call contracts, collapsing
//! transport errors into the `ApiKeyError` kind of each operation.

use apikeys_core::{
    ApiKey, ApiKeyError, ApiKeyResult, CreateCall, ListCall, NewApiKey, RemoveCall, ResourceId,
};
use async_trait::async_trait;
use tracing::debug;

use crate::client::ApiKeyClient;
use crate::error::HttpError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Log the transport cause and replace it with the operation's error kind.
fn collapse(kind: ApiKeyError) -> impl FnOnce(HttpError) -> ApiKeyError {
    move |err| {
        debug!(error = %err, "{kind}");
        kind
    }
}

// ============================================================================
// Contract Implementations
// ============================================================================

#[async_trait]
impl<B: HttpBackend> ListCall<ApiKey> for ApiKeyClient<B> {
    type Error = ApiKeyError;

    async fn list(&self) -> ApiKeyResult<Vec<ApiKey>> {
        self.fetch_all()
            .await
            .map_err(collapse(ApiKeyError::FetchFailed))
    }
}

#[async_trait]
impl<B: HttpBackend> CreateCall<ApiKey, NewApiKey> for ApiKeyClient<B> {
    type Error = ApiKeyError;

    async fn create(&self, data: NewApiKey) -> ApiKeyResult<ApiKey> {
        self.create_key(&data)
            .await
            .map_err(collapse(ApiKeyError::CreateFailed))
    }
}

#[async_trait]
impl<B: HttpBackend> RemoveCall for ApiKeyClient<B> {
    type Error = ApiKeyError;

    async fn remove(&self, id: ResourceId) -> ApiKeyResult<()> {
        self.delete_key(&id)
            .await
            .map_err(collapse(ApiKeyError::DeleteFailed))
    }
}

impl<B: HttpBackend> ApiKeyClient<B> {
    /// Fetch a single key by id.
    pub async fn get(&self, id: impl Into<ResourceId> + Send) -> ApiKeyResult<ApiKey> {
        self.fetch_one(&id.into())
            .await
            .map_err(collapse(ApiKeyError::FetchFailed))
    }
}
