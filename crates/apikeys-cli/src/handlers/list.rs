//! List command handler.

use std::io::Write;

use anyhow::Result;
use apikeys_core::{ApiKey, ListCall};
use chrono::Utc;

use crate::presentation::render_key_table;

/// Fetch every key and print them as a table, in server order.
pub async fn execute<C, W>(client: &C, out: &mut W) -> Result<()>
where
    C: ListCall<ApiKey>,
    W: Write,
{
    let keys = client.list().await?;

    if keys.is_empty() {
        writeln!(out, "No API keys found.")?;
        return Ok(());
    }

    write!(out, "{}", render_key_table(&keys, Utc::now()))?;
    writeln!(out)?;
    writeln!(out, "{} key(s)", keys.len())?;
    Ok(())
}
