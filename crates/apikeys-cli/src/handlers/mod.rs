//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(client, ..., out) -> Result<()>`
//! - Generic over the call contracts they need, so tests can mock them
//! - Thin: call the client, render, write to `out`

pub mod create;
pub mod list;
pub mod remove;
pub mod show;
