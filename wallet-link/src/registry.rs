//! Registry of delegate apps.
//!
//! The registry maps each logical role to the peer app that fills it. It is
//! built once (from defaults or from [configuration](crate::config)) and then
//! only read, so it can be shared freely behind an `Arc`.

use serde::{Deserialize, Serialize};

/// Logical role a delegate app fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelegateRole {
    /// The wallet app holding the account keys.
    Wallet,
    /// The hotspot companion app.
    Hotspot,
}

/// A registered peer application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DelegateApp {
    /// Universal-link root, e.g. `https://wallet.helium.com/`.
    pub universal_link: String,
    /// Display name.
    pub name: String,
    /// Android application id.
    pub android_package: String,
    /// iOS bundle identifier.
    pub ios_bundle_id: String,
    /// App Store identifier.
    pub app_store_id: String,
}

impl DelegateApp {
    /// The universal-link root, always ending in `/`.
    pub fn link_root(&self) -> String {
        if self.universal_link.ends_with('/') {
            self.universal_link.clone()
        } else {
            format!("{}/", self.universal_link)
        }
    }

    /// Whether `app_id` is this app's Android package or iOS bundle id.
    pub fn matches_app_id(&self, app_id: &str) -> bool {
        self.android_package == app_id || self.ios_bundle_id == app_id
    }

    /// The built-in wallet entry.
    pub fn helium_wallet() -> Self {
        Self {
            universal_link: "https://wallet.helium.com/".to_string(),
            name: "Helium Wallet".to_string(),
            android_package: "com.helium.wallet.app".to_string(),
            ios_bundle_id: "com.helium.mobile.wallet".to_string(),
            app_store_id: "id1604659462".to_string(),
        }
    }

    /// The built-in hotspot entry.
    pub fn helium_hotspot() -> Self {
        Self {
            universal_link: "https://hotspot.helium.com/".to_string(),
            name: "Helium Hotspot".to_string(),
            android_package: "com.helium.wallet".to_string(),
            ios_bundle_id: "com.helium.wallet".to_string(),
            app_store_id: "id1450463671".to_string(),
        }
    }
}

/// Immutable role → app table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DelegateAppRegistry {
    /// App filling the wallet role.
    #[serde(default = "DelegateApp::helium_wallet")]
    pub wallet: DelegateApp,
    /// App filling the hotspot role.
    #[serde(default = "DelegateApp::helium_hotspot")]
    pub hotspot: DelegateApp,
}

impl Default for DelegateAppRegistry {
    fn default() -> Self {
        Self {
            wallet: DelegateApp::helium_wallet(),
            hotspot: DelegateApp::helium_hotspot(),
        }
    }
}

impl DelegateAppRegistry {
    /// Look up the app filling `role`.
    pub fn get(&self, role: DelegateRole) -> &DelegateApp {
        match role {
            DelegateRole::Wallet => &self.wallet,
            DelegateRole::Hotspot => &self.hotspot,
        }
    }

    /// The wallet app.
    pub fn wallet(&self) -> &DelegateApp {
        &self.wallet
    }

    /// The hotspot app.
    pub fn hotspot(&self) -> &DelegateApp {
        &self.hotspot
    }

    /// Find which role an Android package or iOS bundle id belongs to.
    pub fn role_of(&self, app_id: &str) -> Option<DelegateRole> {
        [DelegateRole::Wallet, DelegateRole::Hotspot]
            .into_iter()
            .find(|role| self.get(*role).matches_app_id(app_id))
    }
}
