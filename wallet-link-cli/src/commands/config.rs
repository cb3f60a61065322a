//! Config command - print the effective configuration

use anyhow::Result;
use std::path::Path;
use wallet_link::WalletLinkConfig;

use crate::ui;

pub fn show(config: &WalletLinkConfig, source: Option<&Path>) -> Result<()> {
    match source {
        Some(path) => ui::info(&format!("Loaded from {}", path.display())),
        None => ui::info("Using built-in defaults"),
    }
    ui::separator();
    print!("{}", config.to_toml_string()?);
    Ok(())
}
