//! HTTP route constants.

pub mod api_keys;
