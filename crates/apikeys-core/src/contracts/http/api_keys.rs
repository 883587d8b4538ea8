//! API key route constants.

/// Collection endpoint for API keys (list and create). Single keys live one
/// path segment below it.
pub const API_KEYS_PATH: &str = "/api/apikeys";
