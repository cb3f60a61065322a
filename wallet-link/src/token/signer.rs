use super::{canonical, transport, Token, TokenWithSig};
use crate::Result;
use async_trait::async_trait;

/// A capability that can sign arbitrary bytes with the delegating account's
/// private key.
///
/// Implementations may suspend, for example when the key lives in a secure
/// enclave or behind a hardware prompt. Errors are surfaced as
/// [`WalletLinkError::Signing`](crate::WalletLinkError::Signing).
#[async_trait]
pub trait MessageSigner: Send + Sync {
    /// Produce raw signature bytes over `message`.
    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;
}

/// Sign token claims.
///
/// Computes the canonical message for `claims`, awaits the signing
/// capability, and returns the claims with the signature attached. The
/// capability's error is propagated as-is; nothing is retried.
///
/// # Errors
///
/// - [`WalletLinkError::InvalidClaims`](crate::WalletLinkError::InvalidClaims)
///   if a string claim is empty
/// - whatever the signing capability raises
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(claims, signer), fields(request_app_id = %claims.request_app_id))
)]
pub async fn sign_token<S>(claims: Token, signer: &S) -> Result<TokenWithSig>
where
    S: MessageSigner + ?Sized,
{
    claims.validate()?;

    let message = canonical::encode(&claims);
    let signature = signer.sign(&message).await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(signature_len = signature.len(), "signed wallet link token");

    Ok(TokenWithSig::new(claims, signature))
}

/// Sign token claims and serialize the result into transport text.
///
/// This is the string a wallet embeds in a link callback URL.
pub async fn make_app_link_auth_token<S>(claims: Token, signer: &S) -> Result<String>
where
    S: MessageSigner + ?Sized,
{
    let signed = sign_token(claims, signer).await?;
    transport::serialize(&signed)
}
