//! Available subcommands.

use chrono::DateTime;
use clap::Subcommand;

/// Operations on the server's API keys.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all API keys
    List,

    /// Show a single API key
    Show {
        /// Key ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Create a new API key
    Create {
        /// Human-readable description of the key
        #[arg(short, long)]
        description: String,
        /// Expiration timestamp (RFC 3339, e.g. 2030-01-01T00:00:00Z); never expires if omitted
        #[arg(short, long, value_parser = parse_expires_at)]
        expires_at: Option<String>,
    },

    /// Delete an API key
    Remove {
        /// Key ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

/// Validate an RFC 3339 timestamp, keeping the text as typed.
fn parse_expires_at(value: &str) -> Result<String, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|_| value.to_string())
        .map_err(|e| format!("expected an RFC 3339 timestamp ({e})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    #[test]
    fn test_create_without_expiry() {
        let cli = Cli::parse_from(["apikeys", "create", "--description", "ci runner"]);
        match cli.command {
            Commands::Create {
                description,
                expires_at,
            } => {
                assert_eq!(description, "ci runner");
                assert!(expires_at.is_none());
            }
            other => panic!("Expected Create, got {other:?}"),
        }
    }

    #[test]
    fn test_create_keeps_expiry_text() {
        let cli = Cli::parse_from([
            "apikeys",
            "create",
            "-d",
            "temp",
            "-e",
            "2030-01-01T00:00:00+02:00",
        ]);
        match cli.command {
            Commands::Create { expires_at, .. } => {
                assert_eq!(expires_at.as_deref(), Some("2030-01-01T00:00:00+02:00"));
            }
            other => panic!("Expected Create, got {other:?}"),
        }
    }

    #[test]
    fn test_create_rejects_bad_expiry() {
        let result = Cli::try_parse_from([
            "apikeys",
            "create",
            "--description",
            "x",
            "--expires-at",
            "tomorrow",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_show_requires_numeric_id() {
        assert!(Cli::try_parse_from(["apikeys", "show", "abc"]).is_err());
        let cli = Cli::parse_from(["apikeys", "show", "12"]);
        assert!(matches!(cli.command, Commands::Show { id: 12 }));
    }

    #[test]
    fn test_remove_accepts_negative_id() {
        let cli = Cli::parse_from(["apikeys", "remove", "-1"]);
        assert!(matches!(cli.command, Commands::Remove { id: -1 }));
    }
}
