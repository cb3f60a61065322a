//! URL commands - build deep links for each protocol flow

use anyhow::Result;
use std::sync::Arc;
use wallet_link::{
    DeepLinkBuilder, LinkWalletRequest, LinkWalletResponse, Platform, SignHotspotRequest,
    SignHotspotResponse, WalletLinkConfig,
};

use crate::ui;

fn builder(config: &WalletLinkConfig) -> DeepLinkBuilder {
    DeepLinkBuilder::new(Arc::new(config.apps.clone()))
}

pub fn link_request(
    config: &WalletLinkConfig,
    request_app_id: String,
    callback_url: String,
    app_name: String,
    path: Option<&str>,
) -> String {
    let request = LinkWalletRequest::new(request_app_id, callback_url, app_name);
    builder(config).link_request_url(&request, path)
}

/// A missing token means the user declined.
pub fn link_callback(
    config: &WalletLinkConfig,
    scheme: &str,
    address: &str,
    token: Option<String>,
) -> String {
    let response = match token {
        Some(token) => LinkWalletResponse::success(token),
        None => LinkWalletResponse::user_cancelled(),
    };
    builder(config).link_callback_url(scheme, address, &response)
}

pub fn sign_request(
    config: &WalletLinkConfig,
    token: String,
    platform: &str,
    add_gateway_txn: Option<String>,
    assert_location_txn: Option<String>,
    transfer_hotspot_txn: Option<String>,
) -> Result<String> {
    let platform: Platform = platform.parse()?;
    let mut request = SignHotspotRequest::new(token, platform);
    request.add_gateway_txn = add_gateway_txn;
    request.assert_location_txn = assert_location_txn;
    request.transfer_hotspot_txn = transfer_hotspot_txn;

    if request.transaction_count() == 0 {
        ui::warning("No transactions attached; the wallet will have nothing to sign");
    }
    Ok(builder(config).sign_request_url(&request))
}

pub fn sign_callback(
    config: &WalletLinkConfig,
    scheme: &str,
    response: &SignHotspotResponse,
) -> String {
    builder(config).sign_callback_url(scheme, response)
}

/// Print a built URL, optionally as a QR code too.
pub fn show(url: &str, qr: bool) -> Result<()> {
    println!("{}", url);
    if qr {
        ui::qr_code(url)?;
    }
    Ok(())
}
