//! Port definitions.
//!
//! Generic call contracts that REST adapters implement and front ends
//! consume, plus the error taxonomy callers observe.

mod calls;
mod error;
mod resource_id;

pub use calls::{CreateCall, ListCall, RemoveCall, UpdateCall};
pub use error::{ApiKeyError, ApiKeyResult};
pub use resource_id::ResourceId;
