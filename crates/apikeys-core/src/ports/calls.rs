//! Generic REST call contracts.
//!
//! Each trait describes the shape of one kind of call against a resource
//! collection. Adapters implement the subset their resource supports;
//! front ends stay generic over the traits they need.
//!
//! # Design
//!
//! - One trait per call so a resource can support list/create/remove
//!   without pretending to support update
//! - Associated `Error` so each adapter keeps its own taxonomy
//! - Object-safe via `async_trait`

use async_trait::async_trait;

use super::resource_id::ResourceId;

/// Fetch every item of a collection.
#[async_trait]
pub trait ListCall<T: Send + 'static>: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// List all items, in the order the server returned them.
    async fn list(&self) -> Result<Vec<T>, Self::Error>;
}

/// Create an item from a payload of type `U`, returning the stored item.
#[async_trait]
pub trait CreateCall<T: Send + 'static, U: Send + 'static>: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn create(&self, data: U) -> Result<T, Self::Error>;
}

/// Replace the item addressed by `id` with a payload of type `U`.
#[async_trait]
pub trait UpdateCall<T: Send + 'static, U: Send + 'static>: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn update(&self, id: &str, data: U) -> Result<T, Self::Error>;
}

/// Delete the item addressed by `id`.
#[async_trait]
pub trait RemoveCall: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn remove(&self, id: ResourceId) -> Result<(), Self::Error>;
}
