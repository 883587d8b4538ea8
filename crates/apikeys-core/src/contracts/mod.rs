//! Transport contract constants.
//!
//! This module contains string constants for API routes shared across
//! adapters. Keep these string-only with no framework-specific types to
//! avoid dependency creep.

pub mod http;
