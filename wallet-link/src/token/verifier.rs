use super::{canonical, transport, TokenWithSig};
use crate::address::{AddressCodec, HeliumAddressCodec};
use crate::{Result, WalletLinkError};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

/// Default max age for wallet link tokens: 30 days.
pub const WALLET_LINK_TOKEN_EXPIRATION_SECONDS: i64 = 60 * 60 * 24 * 30;

/// Caller-supplied verification policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Reject tokens issued more than this many seconds ago.
    pub max_age_in_seconds: Option<i64>,
}

impl VerifyOptions {
    /// Options enforcing a max age.
    pub fn max_age(seconds: i64) -> Self {
        Self {
            max_age_in_seconds: Some(seconds),
        }
    }
}

/// Checks a detached signature against a message and public key.
pub trait SignatureVerifier: Send + Sync {
    /// Returns `true` only if `signature` is valid for `message` under
    /// `public_key`.
    fn verify(&self, signature: &[u8], message: &[u8], public_key: &[u8]) -> bool;
}

/// Ed25519 signature verification.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(&self, signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
        let Ok(key_bytes) = <[u8; 32]>::try_from(public_key) else {
            return false;
        };
        let Ok(verifying_key) = VerifyingKey::from_bytes(&key_bytes) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(signature) else {
            return false;
        };
        verifying_key.verify(message, &signature).is_ok()
    }
}

/// Verifies signed tokens.
///
/// Holds the two external capabilities verification depends on: resolving
/// an address to a public key, and checking a signature. Both default to the
/// Ed25519 implementations.
#[derive(Clone, Debug, Default)]
pub struct TokenVerifier<A = HeliumAddressCodec, V = Ed25519Verifier> {
    addresses: A,
    signatures: V,
}

impl TokenVerifier {
    /// Verifier using the default address codec and Ed25519.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: AddressCodec, V: SignatureVerifier> TokenVerifier<A, V> {
    /// Verifier with custom capabilities.
    pub fn with_capabilities(addresses: A, signatures: V) -> Self {
        Self {
            addresses,
            signatures,
        }
    }

    /// Verify a token against the current wall-clock time.
    pub fn verify(&self, token: &TokenWithSig, options: &VerifyOptions) -> Result<bool> {
        self.verify_at(token, options, chrono::Utc::now().timestamp())
    }

    /// Verify a token as of `now` (unix seconds).
    ///
    /// Expiration is checked before any cryptographic work.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the signature matches the claims and the address
    /// `Ok(false)` if it does not
    ///
    /// # Errors
    ///
    /// - [`WalletLinkError::Expired`] if `time` is older than `now - max_age`
    /// - [`WalletLinkError::MalformedAddress`] if the address cannot be decoded
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, token), fields(address = %token.claims.address, time = token.claims.time))
    )]
    pub fn verify_at(&self, token: &TokenWithSig, options: &VerifyOptions, now: i64) -> Result<bool> {
        if let Some(max_age) = options.max_age_in_seconds {
            let threshold = now.saturating_sub(max_age);
            if token.claims.time < threshold {
                #[cfg(feature = "tracing")]
                tracing::debug!(threshold, "rejecting expired token");
                return Err(WalletLinkError::Expired {
                    time: token.claims.time,
                    threshold,
                });
            }
        }

        let claims = token.claims();
        let message = canonical::encode(claims);
        let public_key = self.addresses.decode(&claims.address)?;
        let valid = self
            .signatures
            .verify(&token.signature, &message, &public_key);

        #[cfg(feature = "tracing")]
        tracing::debug!(valid, "verified wallet link token");

        Ok(valid)
    }
}

/// Verify a signed token with the default capabilities.
pub fn verify_token(token: &TokenWithSig, options: &VerifyOptions) -> Result<bool> {
    TokenVerifier::new().verify(token, options)
}

/// Decode transport text and verify the token it carries.
///
/// Returns the decoded token alongside the verification result so callers
/// can act on the claims once the signature is known to be good.
pub fn verify_wallet_link_token(
    text: &str,
    options: &VerifyOptions,
) -> Result<(TokenWithSig, bool)> {
    let token = transport::deserialize(text)?;
    let valid = verify_token(&token, options)?;
    Ok((token, valid))
}
