//! Core domain types.
//!
//! These types represent API key records as the server exchanges them,
//! independent of any transport concerns.

mod api_key;

pub use api_key::{ApiKey, DateString, NewApiKey, parse_timestamp};
