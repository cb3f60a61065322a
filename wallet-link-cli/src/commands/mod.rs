//! CLI command implementations

pub mod config;
pub mod keygen;
pub mod parse;
pub mod token;
pub mod url;

use anyhow::{Context, Result};
use std::path::Path;
use wallet_link::WalletLinkConfig;

/// Load configuration from `path`, or the built-in defaults when unset.
pub fn load_config(path: Option<&Path>) -> Result<WalletLinkConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            WalletLinkConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))
        }
        None => Ok(WalletLinkConfig::default()),
    }
}
