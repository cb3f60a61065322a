//! Delegation tokens.
//!
//! A [`Token`] is the set of claims a wallet signs when it agrees to act for a
//! requesting app. A [`TokenWithSig`] is that same set of claims plus the
//! wallet's signature over their [canonical encoding](canonical::encode).
//!
//! Both are value objects: they are copied across app boundaries and never
//! mutated after creation.
//!
//! # Lifecycle
//!
//! ```text
//! Token ──sign──▶ TokenWithSig ──serialize──▶ transport text (in a deep link)
//!                      ▲                              │
//!                      └──────── deserialize ─────────┘
//!                      │
//!                      └──verify──▶ bool | Expired | MalformedAddress
//! ```

pub mod canonical;
mod signer;
pub mod transport;
mod verifier;

pub use signer::{make_app_link_auth_token, sign_token, MessageSigner};
pub use transport::{deserialize, parse_wallet_link_token, serialize};
pub use verifier::{
    verify_token, verify_wallet_link_token, Ed25519Verifier, SignatureVerifier, TokenVerifier,
    VerifyOptions, WALLET_LINK_TOKEN_EXPIRATION_SECONDS,
};

use crate::{Result, WalletLinkError};
use serde::{Deserialize, Serialize};

/// Unsigned token claims.
///
/// All six fields must be present and non-empty at signing time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Issuance time, unix seconds.
    pub time: i64,
    /// Address of the delegating account.
    pub address: String,
    /// Reverse-domain identifier of the requesting app.
    pub request_app_id: String,
    /// Identifier of the signing (wallet) app.
    pub signing_app_id: String,
    /// URI scheme the requester receives responses on.
    pub callback_url: String,
    /// Human-readable requester name.
    pub app_name: String,
}

impl Token {
    /// Create a new set of claims.
    pub fn new(
        time: i64,
        address: impl Into<String>,
        request_app_id: impl Into<String>,
        signing_app_id: impl Into<String>,
        callback_url: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            time,
            address: address.into(),
            request_app_id: request_app_id.into(),
            signing_app_id: signing_app_id.into(),
            callback_url: callback_url.into(),
            app_name: app_name.into(),
        }
    }

    /// Create claims stamped with the current time.
    pub fn issued_now(
        address: impl Into<String>,
        request_app_id: impl Into<String>,
        signing_app_id: impl Into<String>,
        callback_url: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Self {
        Self::new(
            chrono::Utc::now().timestamp(),
            address,
            request_app_id,
            signing_app_id,
            callback_url,
            app_name,
        )
    }

    /// Check that every string claim is non-empty.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("address", &self.address),
            ("requestAppId", &self.request_app_id),
            ("signingAppId", &self.signing_app_id),
            ("callbackUrl", &self.callback_url),
            ("appName", &self.app_name),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                return Err(WalletLinkError::InvalidClaims { field });
            }
        }
        Ok(())
    }
}

/// Token claims together with the wallet's signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenWithSig {
    /// The signed claims.
    #[serde(flatten)]
    pub claims: Token,
    /// Raw signature bytes; base64 text in transport form.
    #[serde(with = "transport::base64_bytes")]
    pub signature: Vec<u8>,
}

impl TokenWithSig {
    /// Attach a signature to a set of claims.
    pub fn new(claims: Token, signature: Vec<u8>) -> Self {
        Self { claims, signature }
    }

    /// Project out the claims, leaving the signature behind.
    pub fn claims(&self) -> &Token {
        &self.claims
    }

    /// Split into claims and signature.
    pub fn into_parts(self) -> (Token, Vec<u8>) {
        (self.claims, self.signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> Token {
        Token::new(
            1_610_000_000,
            "14ab6w719xfTgeZeaLkg4nUUuTDJBDJp4xUVzqkkYB3c5amgUz6",
            "com.tacos",
            "com.burrito",
            "myscheme://",
            "tacos",
        )
    }

    #[test]
    fn test_validate_accepts_complete_claims() {
        assert!(claims().validate().is_ok());
    }

    #[test]
    fn test_validate_names_empty_field() {
        let mut token = claims();
        token.callback_url.clear();
        assert_eq!(
            token.validate(),
            Err(WalletLinkError::InvalidClaims {
                field: "callbackUrl"
            })
        );
    }

    #[test]
    fn test_issued_now_uses_current_time() {
        let before = chrono::Utc::now().timestamp();
        let token = Token::issued_now("addr", "a", "b", "c://", "d");
        assert!(token.time >= before);
    }

    #[test]
    fn test_projection_drops_signature() {
        let signed = TokenWithSig::new(claims(), vec![1, 2, 3]);
        assert_eq!(signed.claims(), &claims());
        let (token, signature) = signed.into_parts();
        assert_eq!(token, claims());
        assert_eq!(signature, vec![1, 2, 3]);
    }
}
