#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod contracts;
pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{ApiKey, DateString, NewApiKey};
pub use ports::{
    ApiKeyError, ApiKeyResult, CreateCall, ListCall, RemoveCall, ResourceId, UpdateCall,
};
