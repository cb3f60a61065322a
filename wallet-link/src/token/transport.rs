//! Transport encoding for signed tokens.
//!
//! A signed token travels between apps as base64 text wrapping a JSON
//! document of all seven fields, with the signature itself base64 encoded
//! inside the document. Unlike the [canonical message](super::canonical),
//! this document is never signed, so its field order carries no meaning.

use super::TokenWithSig;
use crate::{Result, WalletLinkError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Serialize a signed token into transport text.
///
/// # Errors
///
/// [`WalletLinkError::MalformedToken`] if the JSON encoder refuses the token.
pub fn serialize(token: &TokenWithSig) -> Result<String> {
    let document = serde_json::to_vec(token).map_err(WalletLinkError::malformed_token)?;
    Ok(STANDARD.encode(document))
}

/// Decode transport text back into a signed token.
///
/// # Errors
///
/// [`WalletLinkError::MalformedToken`](crate::WalletLinkError::MalformedToken)
/// if the text is not base64, the payload is not a JSON document, or a
/// required field is missing or has the wrong type.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(text), fields(len = text.len())))]
pub fn deserialize(text: &str) -> Result<TokenWithSig> {
    let document = STANDARD.decode(text.trim())?;
    let token: TokenWithSig = serde_json::from_slice(&document)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(address = %token.claims.address, "parsed wallet link token");

    Ok(token)
}

/// Decode transport text received in a link callback.
pub fn parse_wallet_link_token(text: &str) -> Result<TokenWithSig> {
    deserialize(text)
}

/// Serde helper for base64 encoding/decoding of byte vectors.
pub(crate) mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}
