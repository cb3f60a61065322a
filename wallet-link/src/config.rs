//! Configuration for wallet-link consumers.
//!
//! ```toml
//! [token]
//! max_age_seconds = 86400
//!
//! [apps.wallet]
//! universal_link = "https://wallet.example.com/"
//! name = "Example Wallet"
//! android_package = "com.example.wallet"
//! ios_bundle_id = "com.example.wallet"
//! app_store_id = "id000000000"
//!
//! [apps.hotspot]
//! # ...
//! ```
//!
//! Every section is optional and falls back to the built-in defaults.

use crate::registry::DelegateAppRegistry;
use crate::token::{VerifyOptions, WALLET_LINK_TOKEN_EXPIRATION_SECONDS};
use crate::{Result, WalletLinkError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Token verification policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenPolicy {
    /// Max token age in seconds; `0` means the built-in default.
    #[serde(default = "default_max_age_seconds")]
    pub max_age_seconds: i64,
}

fn default_max_age_seconds() -> i64 {
    WALLET_LINK_TOKEN_EXPIRATION_SECONDS
}

impl Default for TokenPolicy {
    fn default() -> Self {
        Self {
            max_age_seconds: default_max_age_seconds(),
        }
    }
}

impl TokenPolicy {
    /// Verification options enforcing this policy.
    pub fn verify_options(&self) -> VerifyOptions {
        let max_age = if self.max_age_seconds == 0 {
            default_max_age_seconds()
        } else {
            self.max_age_seconds
        };
        VerifyOptions::max_age(max_age)
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalletLinkConfig {
    /// Delegate app registry.
    #[serde(default)]
    pub apps: DelegateAppRegistry,
    /// Token verification policy.
    #[serde(default)]
    pub token: TokenPolicy,
}

impl WalletLinkConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| WalletLinkError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Render as TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| WalletLinkError::Config(e.to_string()))
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.token.max_age_seconds < 0 {
            return Err(WalletLinkError::Config(
                "token.max_age_seconds must not be negative".to_string(),
            ));
        }
        for (role, app) in [("wallet", &self.apps.wallet), ("hotspot", &self.apps.hotspot)] {
            if !(app.universal_link.starts_with("https://")
                || app.universal_link.starts_with("http://"))
            {
                return Err(WalletLinkError::Config(format!(
                    "apps.{}.universal_link must be an http(s) URL",
                    role
                )));
            }
        }
        Ok(())
    }
}
