//! Deep-link receipt parsing.
//!
//! The receiving app's platform dispatcher hands over the full URL it was
//! opened with. This module maps such a URL back onto one of the four
//! protocol flows:
//!
//! 1. **Link request**: `{wallet_root}{path}?appName=…&callbackUrl=…&requestAppId=…`
//! 2. **Link callback**: `{scheme}link_wallet/{address}?status=…[&token=…]`
//! 3. **Sign request**: `{wallet_root}sign_hotspot?platform=…&token=…[&…Txn=…]`
//! 4. **Sign callback**: `{scheme}sign_hotspot?status=…[&…]`
//!
//! # Examples
//!
//! ```rust
//! use wallet_link::deep_link::{parse_deep_link, DeepLink};
//! use wallet_link::DelegateAppRegistry;
//!
//! let url = "myscheme://link_wallet/addr?status=user_cancelled";
//! let link = parse_deep_link(url, &DelegateAppRegistry::default(), Some("myscheme://"))?;
//! assert!(matches!(link, DeepLink::LinkCallback { .. }));
//! # Ok::<(), wallet_link::WalletLinkError>(())
//! ```

use super::params::{
    LinkWalletRequest, LinkWalletResponse, SignHotspotRequest, SignHotspotResponse,
};
use super::{query, LINK_WALLET_PATH, SIGN_HOTSPOT_PATH};
use crate::registry::DelegateAppRegistry;
use crate::{Result, WalletLinkError};
use std::collections::BTreeMap;

/// A parsed protocol URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeepLink {
    /// A requester asking the wallet to link an account.
    LinkRequest {
        /// Path under the wallet root the request arrived on.
        path: String,
        /// The request parameters.
        request: LinkWalletRequest,
    },
    /// The wallet answering a link request.
    LinkCallback {
        /// Address of the linked account.
        address: String,
        /// The response parameters.
        response: LinkWalletResponse,
    },
    /// A requester asking the wallet to sign a transaction.
    SignRequest(SignHotspotRequest),
    /// The wallet answering a sign request.
    SignCallback(SignHotspotResponse),
}

/// Parse a URL received through a deep link.
///
/// URLs under the registry's wallet root are read as requests; URLs under
/// `callback_scheme` are read as callbacks.
///
/// # Errors
///
/// [`WalletLinkError::InvalidDeepLink`] if the URL matches neither root, the
/// path is not a protocol path, or a required parameter is missing or has an
/// unknown value.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(url, apps)))]
pub fn parse_deep_link(
    url: &str,
    apps: &DelegateAppRegistry,
    callback_scheme: Option<&str>,
) -> Result<DeepLink> {
    let url = url.trim();
    // Remove fragment if present
    let url = url.split('#').next().unwrap_or(url);
    let (base, query) = url.split_once('?').unwrap_or((url, ""));
    let mut params = Params(query::parse(query)?);

    let wallet_root = apps.wallet.link_root();
    if let Some(path) = base.strip_prefix(&wallet_root) {
        return parse_request(path.trim_end_matches('/'), &mut params);
    }

    if let Some(path) = callback_scheme.and_then(|scheme| base.strip_prefix(scheme)) {
        return parse_callback(path.trim_end_matches('/'), &mut params);
    }

    Err(WalletLinkError::InvalidDeepLink(format!(
        "unrecognized deep link: {}",
        base
    )))
}

fn parse_request(path: &str, params: &mut Params) -> Result<DeepLink> {
    if path == SIGN_HOTSPOT_PATH {
        let mut request = SignHotspotRequest::new(
            params.required("token")?,
            params.required("platform")?.parse()?,
        );
        request.add_gateway_txn = params.optional("addGatewayTxn");
        request.assert_location_txn = params.optional("assertLocationTxn");
        request.transfer_hotspot_txn = params.optional("transferHotspotTxn");
        return Ok(DeepLink::SignRequest(request));
    }

    if path.is_empty() || path.contains('/') {
        return Err(WalletLinkError::InvalidDeepLink(format!(
            "unrecognized request path '{}'",
            path
        )));
    }

    Ok(DeepLink::LinkRequest {
        path: path.to_string(),
        request: LinkWalletRequest::new(
            params.required("requestAppId")?,
            params.required("callbackUrl")?,
            params.required("appName")?,
        ),
    })
}

fn parse_callback(path: &str, params: &mut Params) -> Result<DeepLink> {
    if path == SIGN_HOTSPOT_PATH {
        return Ok(DeepLink::SignCallback(SignHotspotResponse {
            status: params.required("status")?.parse()?,
            assert_txn: params.optional("assertTxn"),
            gateway_txn: params.optional("gatewayTxn"),
            transfer_txn: params.optional("transferTxn"),
            gateway_address: params.optional("gatewayAddress"),
        }));
    }

    let address = path
        .strip_prefix(LINK_WALLET_PATH)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|address| !address.is_empty() && !address.contains('/'))
        .ok_or_else(|| {
            WalletLinkError::InvalidDeepLink(format!("unrecognized callback path '{}'", path))
        })?;

    Ok(DeepLink::LinkCallback {
        address: address.to_string(),
        response: LinkWalletResponse {
            status: params.required("status")?.parse()?,
            token: params.optional("token"),
        },
    })
}

struct Params(BTreeMap<String, String>);

impl Params {
    fn required(&mut self, key: &str) -> Result<String> {
        self.0.remove(key).ok_or_else(|| {
            WalletLinkError::InvalidDeepLink(format!("missing '{}' parameter", key))
        })
    }

    fn optional(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }
}
