//! Parameter records carried in deep-link query strings.

use crate::{Result, WalletLinkError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A record that flattens into query-string pairs.
///
/// Absent optional fields are left out of the returned list entirely.
pub trait QueryParams {
    /// The record's wire-named fields and their values.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Sent by a requesting app to ask the wallet to link an account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkWalletRequest {
    /// Reverse-domain identifier of the requesting app.
    pub request_app_id: String,
    /// URI scheme the requester receives the callback on.
    pub callback_url: String,
    /// Human-readable requester name, shown to the user.
    pub app_name: String,
}

impl LinkWalletRequest {
    /// Create a new link request.
    pub fn new(
        request_app_id: impl Into<String>,
        callback_url: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            request_app_id: request_app_id.into(),
            callback_url: callback_url.into(),
            app_name: app_name.into(),
        }
    }
}

impl QueryParams for LinkWalletRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("requestAppId", self.request_app_id.clone()),
            ("callbackUrl", self.callback_url.clone()),
            ("appName", self.app_name.clone()),
        ]
    }
}

/// Outcome of a link request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkWalletStatus {
    /// The user approved the link.
    Success,
    /// The user declined.
    UserCancelled,
}

impl LinkWalletStatus {
    /// Wire value of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::UserCancelled => "user_cancelled",
        }
    }
}

impl FromStr for LinkWalletStatus {
    type Err = WalletLinkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "success" => Ok(Self::Success),
            "user_cancelled" => Ok(Self::UserCancelled),
            other => Err(WalletLinkError::InvalidDeepLink(format!(
                "unknown link status '{}'",
                other
            ))),
        }
    }
}

/// Sent back by the wallet in the link callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkWalletResponse {
    /// Whether the link was approved.
    pub status: LinkWalletStatus,
    /// Transport text of the signed token, present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl LinkWalletResponse {
    /// A successful response carrying a token.
    pub fn success(token: impl Into<String>) -> Self {
        Self {
            status: LinkWalletStatus::Success,
            token: Some(token.into()),
        }
    }

    /// The user declined to link.
    pub fn user_cancelled() -> Self {
        Self {
            status: LinkWalletStatus::UserCancelled,
            token: None,
        }
    }
}

impl QueryParams for LinkWalletResponse {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("status", self.status.as_str().to_string())];
        if let Some(token) = &self.token {
            pairs.push(("token", token.clone()));
        }
        pairs
    }
}

/// Platform the requesting app runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple iOS.
    Ios,
    /// Google Android.
    Android,
}

impl Platform {
    /// Wire value of the platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }
}

impl FromStr for Platform {
    type Err = WalletLinkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            other => Err(WalletLinkError::InvalidDeepLink(format!(
                "unknown platform '{}'",
                other
            ))),
        }
    }
}

/// Sent by a requesting app to have the wallet sign a hotspot transaction.
///
/// At most one of the transaction fields is expected per call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignHotspotRequest {
    /// Transport text of the token obtained from the link flow.
    pub token: String,
    /// Serialized add-gateway transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_gateway_txn: Option<String>,
    /// Serialized assert-location transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assert_location_txn: Option<String>,
    /// Serialized transfer-hotspot transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_hotspot_txn: Option<String>,
    /// Platform of the requesting app.
    pub platform: Platform,
}

impl SignHotspotRequest {
    /// A request with no transaction attached yet.
    pub fn new(token: impl Into<String>, platform: Platform) -> Self {
        Self {
            token: token.into(),
            add_gateway_txn: None,
            assert_location_txn: None,
            transfer_hotspot_txn: None,
            platform,
        }
    }

    /// Attach an add-gateway transaction.
    pub fn with_add_gateway_txn(mut self, txn: impl Into<String>) -> Self {
        self.add_gateway_txn = Some(txn.into());
        self
    }

    /// Attach an assert-location transaction.
    pub fn with_assert_location_txn(mut self, txn: impl Into<String>) -> Self {
        self.assert_location_txn = Some(txn.into());
        self
    }

    /// Attach a transfer-hotspot transaction.
    pub fn with_transfer_hotspot_txn(mut self, txn: impl Into<String>) -> Self {
        self.transfer_hotspot_txn = Some(txn.into());
        self
    }

    /// Number of transaction fields populated.
    pub fn transaction_count(&self) -> usize {
        [
            &self.add_gateway_txn,
            &self.assert_location_txn,
            &self.transfer_hotspot_txn,
        ]
        .iter()
        .filter(|txn| txn.is_some())
        .count()
    }
}

impl QueryParams for SignHotspotRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("token", self.token.clone())];
        if let Some(txn) = &self.add_gateway_txn {
            pairs.push(("addGatewayTxn", txn.clone()));
        }
        if let Some(txn) = &self.assert_location_txn {
            pairs.push(("assertLocationTxn", txn.clone()));
        }
        if let Some(txn) = &self.transfer_hotspot_txn {
            pairs.push(("transferHotspotTxn", txn.clone()));
        }
        pairs.push(("platform", self.platform.as_str().to_string()));
        pairs
    }
}

/// Outcome of a sign-hotspot request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignHotspotStatus {
    /// Transactions were signed.
    Success,
    /// The wallet has no record of the presented token.
    TokenNotFound,
    /// The user declined.
    UserCancelled,
    /// The referenced gateway is unknown.
    GatewayNotFound,
    /// The request URL was not usable.
    InvalidLink,
}

impl SignHotspotStatus {
    /// Wire value of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::TokenNotFound => "token_not_found",
            Self::UserCancelled => "user_cancelled",
            Self::GatewayNotFound => "gateway_not_found",
            Self::InvalidLink => "invalid_link",
        }
    }
}

impl FromStr for SignHotspotStatus {
    type Err = WalletLinkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "success" => Ok(Self::Success),
            "token_not_found" => Ok(Self::TokenNotFound),
            "user_cancelled" => Ok(Self::UserCancelled),
            "gateway_not_found" => Ok(Self::GatewayNotFound),
            "invalid_link" => Ok(Self::InvalidLink),
            other => Err(WalletLinkError::InvalidDeepLink(format!(
                "unknown sign status '{}'",
                other
            ))),
        }
    }
}

/// Sent back by the wallet in the sign callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignHotspotResponse {
    /// Outcome of the request.
    pub status: SignHotspotStatus,
    /// Signed assert-location transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assert_txn: Option<String>,
    /// Signed add-gateway transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_txn: Option<String>,
    /// Signed transfer transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_txn: Option<String>,
    /// Address of the gateway the transactions concern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_address: Option<String>,
}

impl SignHotspotResponse {
    /// A response carrying only a status.
    pub fn with_status(status: SignHotspotStatus) -> Self {
        Self {
            status,
            assert_txn: None,
            gateway_txn: None,
            transfer_txn: None,
            gateway_address: None,
        }
    }
}

impl QueryParams for SignHotspotResponse {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("status", self.status.as_str().to_string())];
        let optional = [
            ("assertTxn", &self.assert_txn),
            ("gatewayTxn", &self.gateway_txn),
            ("transferTxn", &self.transfer_txn),
            ("gatewayAddress", &self.gateway_address),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                pairs.push((key, value.clone()));
            }
        }
        pairs
    }
}
