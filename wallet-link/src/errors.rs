//! Error types for wallet-link operations.
//!
//! Every failure in this crate is surfaced directly to the immediate caller.
//! Nothing here is retried or silently recovered: each error reflects either
//! an expired or forged credential, or a transport corruption that the caller
//! has to handle (re-request the link, show an error).
//!
//! A signature that does not match is *not* an error. Verification returns
//! `Ok(false)` for that case so callers can tell "rejected" from "broken".

/// Error codes for FFI and mobile integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum WalletLinkErrorCode {
    /// Token time claim precedes the max-age cutoff
    Expired = 1000,
    /// Signature did not verify (reported by callers, never raised here)
    InvalidSignature = 1001,
    /// Address string could not be decoded into a public key
    MalformedAddress = 2000,
    /// Transport token could not be decoded
    MalformedToken = 2001,
    /// Token claims are missing a required value
    InvalidClaims = 2002,
    /// Deep-link URL not recognised
    InvalidDeepLink = 2003,
    /// Key material could not be parsed
    InvalidKey = 2004,
    /// Signing capability failed
    Signing = 3000,
    /// Configuration could not be loaded
    Config = 4000,
}

/// Error type for wallet-link operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletLinkError {
    /// The token was issued before the caller's max-age cutoff.
    #[error("token issued at {time} is older than the cutoff {threshold}")]
    Expired {
        /// The token's `time` claim (unix seconds)
        time: i64,
        /// The computed expiration threshold (unix seconds)
        threshold: i64,
    },

    /// The address codec rejected the address string.
    #[error("malformed address: {0}")]
    MalformedAddress(String),

    /// Transport decoding failed: bad base64, missing field or wrong type.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// A claim required at signing time is empty.
    #[error("invalid claims: `{field}` must not be empty")]
    InvalidClaims {
        /// Wire name of the offending field
        field: &'static str,
    },

    /// A URL handed to the deep-link parser is not one of the protocol flows.
    #[error("invalid deep link: {0}")]
    InvalidDeepLink(String),

    /// Key material handed to the crate could not be parsed.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The signing capability raised an error.
    #[error("signing failed: {0}")]
    Signing(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl WalletLinkError {
    /// Get the error code for FFI/mobile integration.
    pub fn code(&self) -> WalletLinkErrorCode {
        match self {
            Self::Expired { .. } => WalletLinkErrorCode::Expired,
            Self::MalformedAddress(_) => WalletLinkErrorCode::MalformedAddress,
            Self::MalformedToken(_) => WalletLinkErrorCode::MalformedToken,
            Self::InvalidClaims { .. } => WalletLinkErrorCode::InvalidClaims,
            Self::InvalidDeepLink(_) => WalletLinkErrorCode::InvalidDeepLink,
            Self::InvalidKey(_) => WalletLinkErrorCode::InvalidKey,
            Self::Signing(_) => WalletLinkErrorCode::Signing,
            Self::Config(_) => WalletLinkErrorCode::Config,
        }
    }

    /// Get the error message as an owned String (useful for FFI).
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Create a malformed token error from any error type.
    pub fn malformed_token<E: std::fmt::Display>(err: E) -> Self {
        Self::MalformedToken(err.to_string())
    }

    /// Create a signing error from any error type.
    pub fn signing<E: std::fmt::Display>(err: E) -> Self {
        Self::Signing(err.to_string())
    }
}

impl From<serde_json::Error> for WalletLinkError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedToken(err.to_string())
    }
}

impl From<base64::DecodeError> for WalletLinkError {
    fn from(err: base64::DecodeError) -> Self {
        Self::MalformedToken(format!("invalid base64: {}", err))
    }
}

impl From<toml::de::Error> for WalletLinkError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
