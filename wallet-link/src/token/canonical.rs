//! Canonical message encoding.
//!
//! The canonical message is the exact byte string a wallet signs and a
//! verifier re-derives. Its field order is fixed by the protocol rather than
//! by any serializer's iteration order:
//!
//! ```text
//! {"time":<int>,"address":"<str>","requestAppId":"<str>","signingAppId":"<str>","callbackUrl":"<str>","appName":"<str>"}
//! ```
//!
//! No whitespace is emitted and string values are written verbatim.
//!
//! # Known limitation
//!
//! Values are not escaped. A claim containing `"` or `\` can make two
//! different claim sets encode to the same bytes. Existing signers and
//! verifiers produce this exact form, so escaping here would break every
//! token already in circulation. Callers that accept untrusted claim text
//! should reject those characters before signing.

use super::Token;

/// Encode token claims into the canonical message bytes.
pub fn encode(token: &Token) -> Vec<u8> {
    canonical_message(token).into_bytes()
}

/// Encode token claims into the canonical message text.
pub fn canonical_message(token: &Token) -> String {
    format!(
        r#"{{"time":{},"address":"{}","requestAppId":"{}","signingAppId":"{}","callbackUrl":"{}","appName":"{}"}}"#,
        token.time,
        token.address,
        token.request_app_id,
        token.signing_app_id,
        token.callback_url,
        token.app_name
    )
}
