use super::params::{
    LinkWalletRequest, LinkWalletResponse, QueryParams, SignHotspotRequest, SignHotspotResponse,
};
use super::{query, LINK_WALLET_PATH, SIGN_HOTSPOT_PATH};
use crate::registry::DelegateAppRegistry;
use std::sync::Arc;

/// Builds the four protocol URLs.
///
/// Request URLs are rooted at the wallet's universal link; callback URLs are
/// rooted at the requester's protocol scheme. Building never fails.
#[derive(Clone, Debug, Default)]
pub struct DeepLinkBuilder {
    apps: Arc<DelegateAppRegistry>,
}

impl DeepLinkBuilder {
    /// Create a builder over a shared registry.
    pub fn new(apps: Arc<DelegateAppRegistry>) -> Self {
        Self { apps }
    }

    /// The registry URLs are built against.
    pub fn apps(&self) -> &DelegateAppRegistry {
        &self.apps
    }

    /// URL asking the wallet to link an account.
    ///
    /// `path` replaces the default `link_wallet` path under the wallet root.
    ///
    /// Format: `{wallet_root}{path}?appName=…&callbackUrl=…&requestAppId=…`
    pub fn link_request_url(&self, params: &LinkWalletRequest, path: Option<&str>) -> String {
        let path = path.unwrap_or(LINK_WALLET_PATH);
        with_query(format!("{}{}", self.apps.wallet.link_root(), path), params)
    }

    /// URL the wallet returns to after a link request.
    ///
    /// Format: `{scheme}link_wallet/{address}?status=…[&token=…]`
    pub fn link_callback_url(
        &self,
        protocol_scheme: &str,
        address: &str,
        params: &LinkWalletResponse,
    ) -> String {
        with_query(
            format!("{}{}/{}", protocol_scheme, LINK_WALLET_PATH, address),
            params,
        )
    }

    /// URL asking the wallet to sign a hotspot transaction.
    ///
    /// Format: `{wallet_root}sign_hotspot?platform=…&token=…[&…Txn=…]`
    pub fn sign_request_url(&self, params: &SignHotspotRequest) -> String {
        with_query(
            format!("{}{}", self.apps.wallet.link_root(), SIGN_HOTSPOT_PATH),
            params,
        )
    }

    /// URL the wallet returns to after a sign request.
    ///
    /// Format: `{scheme}sign_hotspot?status=…[&…]`
    pub fn sign_callback_url(&self, protocol_scheme: &str, params: &SignHotspotResponse) -> String {
        with_query(format!("{}{}", protocol_scheme, SIGN_HOTSPOT_PATH), params)
    }
}

fn with_query<P: QueryParams>(base: String, params: &P) -> String {
    let query = query::stringify(params);
    if query.is_empty() {
        base
    } else {
        format!("{}?{}", base, query)
    }
}
