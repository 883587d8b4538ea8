//! Terminal presentation helpers.
//!
//! Rendering returns strings so handlers decide where output goes.

mod key_display;
mod tables;

pub use key_display::{key_status, render_key_details, render_key_table};
pub use tables::{format_optional, separator, truncate_string};
