//! API key domain types.
//!
//! Timestamps are carried as the text the server wrote. The client never
//! reformats them, so a value read from one response can be sent back or
//! compared byte-for-byte.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A date-time encoded as text (RFC 3339 or ISO 8601 without offset).
pub type DateString = String;

// ─────────────────────────────────────────────────────────────────────────────
// ApiKey
// ─────────────────────────────────────────────────────────────────────────────

/// An API key record as returned by the server.
///
/// The server assigns `id`, `created_at` and `last_used_at`. A missing
/// `expires_at` means the key never expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    /// Server-assigned identifier. The server reports `-1` when the
    /// store did not hand back a row id.
    pub id: i64,
    /// Human-readable description.
    pub description: String,
    /// When the key was created.
    pub created_at: DateString,
    /// When the key was last presented to the server.
    pub last_used_at: DateString,
    /// When the key stops being accepted, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateString>,
}

impl ApiKey {
    /// Whether the key has no expiration.
    pub const fn never_expires(&self) -> bool {
        self.expires_at.is_none()
    }

    /// Parse `expires_at` into a UTC instant.
    ///
    /// Returns `None` when the key never expires or the text is not a
    /// recognised timestamp.
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        self.expires_at.as_deref().and_then(parse_timestamp)
    }

    /// Whether the key is expired at `now`.
    ///
    /// Unparseable expiry text is not treated as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at_utc().is_some_and(|expiry| expiry <= now)
    }
}

/// Parse a server timestamp.
///
/// Accepts RFC 3339 (`2030-01-01T00:00:00Z`) and offset-less ISO 8601
/// (`2030-01-01T00:00:00`, `2030-01-01 00:00:00.123`), the latter taken
/// as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

// ─────────────────────────────────────────────────────────────────────────────
// NewApiKey
// ─────────────────────────────────────────────────────────────────────────────

/// Payload for creating an API key.
///
/// `expires_at` is omitted from the serialized body when `None`, never
/// written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApiKey {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateString>,
}

impl NewApiKey {
    /// A key that never expires.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            expires_at: None,
        }
    }

    /// Set the expiration timestamp. The text is sent as given.
    #[must_use]
    pub fn with_expires_at(mut self, expires_at: impl Into<DateString>) -> Self {
        self.expires_at = Some(expires_at.into());
        self
    }

    /// Set an optional expiration timestamp.
    #[must_use]
    pub fn with_optional_expires_at(mut self, expires_at: Option<DateString>) -> Self {
        self.expires_at = expires_at;
        self
    }
}
