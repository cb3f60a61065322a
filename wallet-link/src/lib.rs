//! Wallet link library.
//!
//! Lets a wallet app grant a third-party app limited, auditable access to
//! wallet-signing operations without exposing key material. Short-lived
//! signed tokens move between the two apps inside platform deep links; no
//! network channel is involved.
//!
//! This crate stays stateless. The signing key, the address codec and the
//! signature check are reached through traits so callers can plug in secure
//! storage or hardware signers.
//!
//! # Features
//!
//! - **Tokens**: canonical encoding, signing, verification with a max-age
//!   policy, and the base64 transport form
//! - **Deep links**: builders and a parser for the link and sign flows
//! - **Registry**: the delegate apps the URLs are rooted at
//!
//! # Example
//!
//! ```ignore
//! use wallet_link::{
//!     make_app_link_auth_token, verify_wallet_link_token, DeepLinkBuilder, Keypair,
//!     LinkWalletResponse, Token, VerifyOptions,
//! };
//!
//! let keypair = Keypair::random();
//! let claims = Token::issued_now(
//!     keypair.address().to_b58(),
//!     "com.tacos",
//!     "com.helium.wallet",
//!     "tacos://",
//!     "Tacos",
//! );
//!
//! // Wallet side: sign and hand the token back to the requester.
//! let token = make_app_link_auth_token(claims, &keypair).await?;
//! let url = DeepLinkBuilder::default().link_callback_url(
//!     "tacos://",
//!     &keypair.address().to_b58(),
//!     &LinkWalletResponse::success(token.clone()),
//! );
//!
//! // Later, when the requester presents the token again:
//! let (token, valid) = verify_wallet_link_token(&token, &VerifyOptions::max_age(3600))?;
//! assert!(valid);
//! ```

pub mod address;
pub mod config;
pub mod deep_link;
pub mod errors;
pub mod keypair;
pub mod registry;
pub mod token;

/// Test utilities for wallet-link.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use address::{Address, AddressCodec, HeliumAddressCodec, NetType};
pub use config::{TokenPolicy, WalletLinkConfig};
pub use deep_link::{
    parse_deep_link, DeepLink, DeepLinkBuilder, LinkWalletRequest, LinkWalletResponse,
    LinkWalletStatus, Platform, SignHotspotRequest, SignHotspotResponse, SignHotspotStatus,
};
pub use errors::{WalletLinkError, WalletLinkErrorCode};
pub use keypair::Keypair;
pub use registry::{DelegateApp, DelegateAppRegistry, DelegateRole};
pub use token::{
    make_app_link_auth_token, parse_wallet_link_token, sign_token, verify_token,
    verify_wallet_link_token, Ed25519Verifier, MessageSigner, SignatureVerifier, Token,
    TokenVerifier, TokenWithSig, VerifyOptions, WALLET_LINK_TOKEN_EXPIRATION_SECONDS,
};

/// Common result alias for wallet-link operations.
pub type Result<T> = std::result::Result<T, WalletLinkError>;
