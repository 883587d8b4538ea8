//! Create command handler.

use std::io::Write;

use anyhow::Result;
use apikeys_core::{ApiKey, CreateCall, DateString, NewApiKey};
use chrono::Utc;
use tracing::info;

use crate::presentation::render_key_details;

/// Create a key and print the record the server stored.
pub async fn execute<C, W>(
    client: &C,
    description: String,
    expires_at: Option<DateString>,
    out: &mut W,
) -> Result<()>
where
    C: CreateCall<ApiKey, NewApiKey>,
    W: Write,
{
    let payload = NewApiKey::new(description).with_optional_expires_at(expires_at);
    let created = client.create(payload).await?;
    info!(id = created.id, description = %created.description, "API key created");

    writeln!(out, "Created API key {}", created.id)?;
    write!(out, "{}", render_key_details(&created, Utc::now()))?;
    Ok(())
}
