//! Show command handler.

use std::io::Write;

use anyhow::Result;
use apikeys_http::{ApiKeyClient, HttpBackend};
use chrono::Utc;

use crate::presentation::render_key_details;

/// Fetch one key and print all of its fields.
pub async fn execute<B, W>(client: &ApiKeyClient<B>, id: i64, out: &mut W) -> Result<()>
where
    B: HttpBackend,
    W: Write,
{
    let key = client.get(id).await?;
    write!(out, "{}", render_key_details(&key, Utc::now()))?;
    Ok(())
}
