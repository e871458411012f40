//! Command-line argument parsing
//!
//! Supports:
//! - Extracting chat messages from a saved document
//! - Normalizing a document through decode/encode
//! - Checking a document for malformed attributes
//! - Importing plain text as a single-turn document

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rich-text chat documents with embedded role markers
#[derive(Parser, Debug)]
#[command(name = "magic", version, about = "Rich-text chat document tool")]
pub struct CliArgs {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the chat messages a document represents, as JSON
    Messages {
        /// Flat document (JSON)
        file: PathBuf,
    },
    /// Decode and re-encode a document, dropping unusable attributes
    Normalize {
        /// Flat document (JSON)
        file: PathBuf,
    },
    /// Report malformed attributes; exits non-zero if any are found
    Check {
        /// Flat document (JSON)
        file: PathBuf,
    },
    /// Wrap a plain text file in a single role turn
    Import {
        /// Plain text file
        file: PathBuf,
        /// Role of the turn (must be one of the configured roles)
        #[arg(long, default_value = "user")]
        role: String,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub command: CliCommand,
    pub config_path: PathBuf,
}

impl CliArgs {
    /// Resolve the config location and validate arguments
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let config_path = match self.config {
            Some(path) => path,
            None => crate::config_paths::config_file()
                .ok_or_else(|| "Could not determine config directory".to_string())?,
        };

        if let CliCommand::Import { role, .. } = &self.command {
            if role.trim().is_empty() {
                return Err("--role must not be empty".to_string());
            }
        }

        Ok(StartupConfig {
            command: self.command,
            config_path,
        })
    }
}
