//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI: the tracing subscriber and the reqwest-backed client.
//! Command handlers receive the client and stay generic over the call
//! contracts.

use anyhow::{Context, Result};
use apikeys_http::{ApiKeyClientConfig, DefaultApiKeyClient};
use tracing_subscriber::EnvFilter;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Server the API key routes live under.
    pub base_url: String,
    /// Force debug-level logging.
    pub verbose: bool,
}

impl CliConfig {
    /// Take configuration from parsed arguments (flags and environment).
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            base_url: cli.base_url.clone(),
            verbose: cli.verbose,
        }
    }

    /// Log filter: `debug` when verbose, else `RUST_LOG`, else `warn`.
    fn env_filter(&self) -> EnvFilter {
        if self.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    }
}

/// Install the global tracing subscriber. Logs go to stderr so command
/// output on stdout stays clean.
pub fn init_tracing(config: &CliConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Build the reqwest-backed client.
pub fn build_client(config: &CliConfig) -> Result<DefaultApiKeyClient> {
    let client_config = ApiKeyClientConfig::new().with_base_url(&config.base_url);
    DefaultApiKeyClient::new(&client_config)
        .with_context(|| format!("Invalid server URL: {}", config.base_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::parse_from(["apikeys", "-v", "--base-url", "http://example.test", "list"]);
        let config = CliConfig::from_cli(&cli);
        assert!(config.verbose);
        assert_eq!(config.base_url, "http://example.test");
    }

    #[test]
    fn test_verbose_filter_is_debug() {
        let config = CliConfig {
            base_url: String::new(),
            verbose: true,
        };
        assert_eq!(config.env_filter().to_string(), "debug");
    }

    #[test]
    fn test_build_client() {
        let config = CliConfig {
            base_url: "http://example.test:9000".to_string(),
            verbose: false,
        };
        let client = build_client(&config).unwrap();
        assert_eq!(client.base_url().as_str(), "http://example.test:9000/");
    }

    #[test]
    fn test_build_client_rejects_bad_url() {
        let config = CliConfig {
            base_url: "not a url".to_string(),
            verbose: false,
        };
        let err = build_client(&config).err().unwrap();
        assert!(err.to_string().contains("not a url"));
    }
}
