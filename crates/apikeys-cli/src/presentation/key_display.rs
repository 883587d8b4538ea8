//! API key display formatting.

use std::fmt::Write;

use apikeys_core::ApiKey;
use chrono::{DateTime, Utc};

use super::tables::{format_optional, separator, truncate_string};

const DESCRIPTION_WIDTH: usize = 30;
const TIMESTAMP_WIDTH: usize = 25;

/// Status label for a key at `now`.
pub fn key_status(key: &ApiKey, now: DateTime<Utc>) -> &'static str {
    if key.is_expired_at(now) {
        "expired"
    } else {
        "active"
    }
}

/// Render keys as a fixed-width table, one row per key, in the given order.
pub fn render_key_table(keys: &[ApiKey], now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let header = format!(
        "{:<6} {:<dw$} {:<tw$} {:<tw$} {:<tw$} {}",
        "ID",
        "DESCRIPTION",
        "CREATED",
        "LAST USED",
        "EXPIRES",
        "STATUS",
        dw = DESCRIPTION_WIDTH,
        tw = TIMESTAMP_WIDTH,
    );
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", separator(header.len()));

    for key in keys {
        let _ = writeln!(
            out,
            "{:<6} {:<dw$} {:<tw$} {:<tw$} {:<tw$} {}",
            key.id,
            truncate_string(&key.description, DESCRIPTION_WIDTH),
            truncate_string(&key.created_at, TIMESTAMP_WIDTH),
            truncate_string(&key.last_used_at, TIMESTAMP_WIDTH),
            truncate_string(
                &format_optional(key.expires_at.as_ref(), "never"),
                TIMESTAMP_WIDTH
            ),
            key_status(key, now),
            dw = DESCRIPTION_WIDTH,
            tw = TIMESTAMP_WIDTH,
        );
    }

    out
}

/// Render every field of one key, one per line.
pub fn render_key_details(key: &ApiKey, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID:          {}", key.id);
    let _ = writeln!(out, "Description: {}", key.description);
    let _ = writeln!(out, "Created:     {}", key.created_at);
    let _ = writeln!(out, "Last used:   {}", key.last_used_at);
    let _ = writeln!(
        out,
        "Expires:     {}",
        format_optional(key.expires_at.as_ref(), "never")
    );
    let _ = writeln!(out, "Status:      {}", key_status(key, now));
    out
}
