//! Ed25519 keypair used as the default signing capability.
//!
//! Wallet apps normally keep the secret in platform-secure storage and hand
//! the crate a [`MessageSigner`] that reaches into it. This type is the
//! in-process equivalent, used by the demo CLI and by tests.

use crate::address::{Address, NetType};
use crate::token::MessageSigner;
use crate::{Result, WalletLinkError};
use async_trait::async_trait;
use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;

/// An Ed25519 signing keypair.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
    net_type: NetType,
}

impl Keypair {
    /// Generate a new random keypair on mainnet.
    pub fn random() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
            net_type: NetType::Mainnet,
        }
    }

    /// Build a keypair from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
            net_type: NetType::Mainnet,
        }
    }

    /// Build a keypair from a hex-encoded 32-byte seed.
    pub fn from_seed_hex(seed_hex: &str) -> Result<Self> {
        let bytes = hex::decode(seed_hex.trim())
            .map_err(|e| WalletLinkError::InvalidKey(format!("invalid seed hex: {}", e)))?;
        let seed: [u8; 32] = bytes.try_into().map_err(|bytes: Vec<u8>| {
            WalletLinkError::InvalidKey(format!("seed must be 32 bytes, got {}", bytes.len()))
        })?;
        Ok(Self::from_seed(&seed))
    }

    /// Use this keypair's address on another network.
    pub fn with_net_type(mut self, net_type: NetType) -> Self {
        self.net_type = net_type;
        self
    }

    /// The 32-byte secret seed, hex encoded.
    ///
    /// SENSITIVE: only for export into secure storage.
    pub fn seed_hex(&self) -> String {
        hex::encode(self.signing_key.to_bytes())
    }

    /// The raw Ed25519 public key.
    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// The account address derived from the public key.
    pub fn address(&self) -> Address {
        Address::from_public_key(self.public_key(), self.net_type)
    }

    /// Sign a message synchronously.
    pub fn sign_bytes(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("address", &self.address().to_b58())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MessageSigner for Keypair {
    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        Ok(self.sign_bytes(message).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RFC8032_SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

    #[test]
    fn test_seed_hex_round_trip() {
        let keypair = Keypair::from_seed_hex(RFC8032_SEED).unwrap();
        assert_eq!(keypair.seed_hex(), RFC8032_SEED);
        assert_eq!(
            hex::encode(keypair.public_key()),
            "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
        );
    }

    #[test]
    fn test_address_follows_net_type() {
        let keypair = Keypair::from_seed_hex(RFC8032_SEED).unwrap();
        assert_eq!(
            keypair.address().to_b58(),
            "14ab6w719xfTgeZeaLkg4nUUuTDJBDJp4xUVzqkkYB3c5amgUz6"
        );
        let testnet = keypair.with_net_type(NetType::Testnet);
        assert_eq!(testnet.address().net_type(), NetType::Testnet);
    }

    #[test]
    fn test_rejects_short_seed() {
        let err = Keypair::from_seed_hex("abcd").unwrap_err();
        assert!(matches!(err, WalletLinkError::InvalidKey(_)));
        assert!(err.to_string().contains("32 bytes"));
    }

    #[test]
    fn test_rejects_non_hex_seed() {
        let err = Keypair::from_seed_hex("not-hex").unwrap_err();
        assert_eq!(err.code(), crate::WalletLinkErrorCode::InvalidKey);
    }

    #[test]
    fn test_debug_hides_secret() {
        let keypair = Keypair::from_seed_hex(RFC8032_SEED).unwrap();
        let debug = format!("{:?}", keypair);
        assert!(!debug.contains(RFC8032_SEED));
        assert!(debug.contains("14ab6w"));
    }

    #[tokio::test]
    async fn test_async_sign_matches_sync_sign() {
        let keypair = Keypair::random();
        let message = b"hello";
        let signature = MessageSigner::sign(&keypair, message).await.unwrap();
        assert_eq!(signature, keypair.sign_bytes(message).to_vec());
    }
}
