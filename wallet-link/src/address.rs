//! Account address codec.
//!
//! Addresses are the human-readable identifiers a token's `address` claim
//! carries. The verifier only needs one thing from them: the raw public key
//! the signature must verify against.
//!
//! # Format
//!
//! `base58check([version][net_type | key_type][public_key])`
//!
//! | Byte(s) | Meaning                                       |
//! |---------|-----------------------------------------------|
//! | 0       | version, always `0x00`                        |
//! | 1       | high nibble net type, low nibble key type     |
//! | 2..34   | 32-byte Ed25519 public key                    |
//!
//! The checksum is the first four bytes of `sha256(sha256(payload))`.

use crate::{Result, WalletLinkError};
use serde::{Deserialize, Serialize};

/// Address version byte.
pub const ADDRESS_VERSION: u8 = 0x00;

/// Key type nibble for Ed25519 keys.
pub const ED25519_KEY_TYPE: u8 = 0x01;

/// Length of an Ed25519 public key in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Network an address belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetType {
    /// Production network.
    #[default]
    Mainnet,
    /// Test network.
    Testnet,
}

impl NetType {
    /// High-nibble value stored in the address type byte.
    pub fn as_byte(&self) -> u8 {
        match self {
            Self::Mainnet => 0x00,
            Self::Testnet => 0x10,
        }
    }

    fn from_byte(byte: u8) -> Result<Self> {
        match byte {
            0x00 => Ok(Self::Mainnet),
            0x10 => Ok(Self::Testnet),
            other => Err(WalletLinkError::MalformedAddress(format!(
                "unknown net type 0x{:02x}",
                other
            ))),
        }
    }
}

/// Resolves the public key behind an address string.
pub trait AddressCodec: Send + Sync {
    /// Decode an address into raw public key bytes.
    ///
    /// Fails with [`WalletLinkError::MalformedAddress`] on malformed input.
    fn decode(&self, address: &str) -> Result<Vec<u8>>;
}

/// A decoded Ed25519 account address.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    net_type: NetType,
    public_key: [u8; PUBLIC_KEY_LENGTH],
}

impl Address {
    /// Build an address from an Ed25519 public key.
    pub fn from_public_key(public_key: [u8; PUBLIC_KEY_LENGTH], net_type: NetType) -> Self {
        Self {
            net_type,
            public_key,
        }
    }

    /// Parse a base58check address string.
    pub fn from_b58(address: &str) -> Result<Self> {
        let bytes = bs58::decode(address)
            .with_check(None)
            .into_vec()
            .map_err(|e| WalletLinkError::MalformedAddress(e.to_string()))?;

        if bytes.len() != PUBLIC_KEY_LENGTH + 2 {
            return Err(WalletLinkError::MalformedAddress(format!(
                "expected {} payload bytes, got {}",
                PUBLIC_KEY_LENGTH + 2,
                bytes.len()
            )));
        }
        if bytes[0] != ADDRESS_VERSION {
            return Err(WalletLinkError::MalformedAddress(format!(
                "unsupported version 0x{:02x}",
                bytes[0]
            )));
        }

        let key_type = bytes[1] & 0x0f;
        if key_type != ED25519_KEY_TYPE {
            return Err(WalletLinkError::MalformedAddress(format!(
                "unsupported key type 0x{:02x}",
                key_type
            )));
        }
        let net_type = NetType::from_byte(bytes[1] & 0xf0)?;

        let mut public_key = [0u8; PUBLIC_KEY_LENGTH];
        public_key.copy_from_slice(&bytes[2..]);
        ed25519_dalek::VerifyingKey::from_bytes(&public_key)
            .map_err(|_| WalletLinkError::MalformedAddress("not an Ed25519 point".to_string()))?;

        Ok(Self {
            net_type,
            public_key,
        })
    }

    /// Encode as a base58check address string.
    pub fn to_b58(&self) -> String {
        let mut payload = Vec::with_capacity(PUBLIC_KEY_LENGTH + 2);
        payload.push(ADDRESS_VERSION);
        payload.push(self.net_type.as_byte() | ED25519_KEY_TYPE);
        payload.extend_from_slice(&self.public_key);
        bs58::encode(payload).with_check().into_string()
    }

    /// The network this address belongs to.
    pub fn net_type(&self) -> NetType {
        self.net_type
    }

    /// The raw Ed25519 public key.
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.public_key
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_b58())
    }
}

impl std::str::FromStr for Address {
    type Err = WalletLinkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_b58(s)
    }
}

/// Default codec for base58check Ed25519 addresses on either network.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeliumAddressCodec;

impl AddressCodec for HeliumAddressCodec {
    fn decode(&self, address: &str) -> Result<Vec<u8>> {
        Ok(Address::from_b58(address)?.public_key.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RFC8032_PUBLIC_KEY: &str =
        "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const MAINNET_ADDRESS: &str = "14ab6w719xfTgeZeaLkg4nUUuTDJBDJp4xUVzqkkYB3c5amgUz6";
    const TESTNET_ADDRESS: &str = "1bgVveHWnmV5qmrw5cgfKv4sZH4naUnpfBcDuEm6Sf9oyZE26J8";
    // Same key, key type nibble 0x00 (ECC compact)
    const ECC_COMPACT_ADDRESS: &str = "112dqvheyJXzEYpywfm8g7TshzLbaXWTwHKQPkh4rYX3DazCWNWG";
    // y = 2 has no matching x on the curve
    const OFF_CURVE_ADDRESS: &str = "12xdGJBNoe716cifxi8jYjm7JHBd5vPyd2ZgpnutwwATJ9Y2nBQ";

    fn rfc_key() -> [u8; 32] {
        hex::decode(RFC8032_PUBLIC_KEY).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_encode_known_mainnet_address() {
        let address = Address::from_public_key(rfc_key(), NetType::Mainnet);
        assert_eq!(address.to_b58(), MAINNET_ADDRESS);
    }

    #[test]
    fn test_encode_known_testnet_address() {
        let address = Address::from_public_key(rfc_key(), NetType::Testnet);
        assert_eq!(address.to_string(), TESTNET_ADDRESS);
    }

    #[test]
    fn test_decode_recovers_public_key() {
        let address: Address = MAINNET_ADDRESS.parse().unwrap();
        assert_eq!(address.public_key(), &rfc_key());
        assert_eq!(address.net_type(), NetType::Mainnet);

        let testnet = Address::from_b58(TESTNET_ADDRESS).unwrap();
        assert_eq!(testnet.net_type(), NetType::Testnet);
        assert_eq!(testnet.public_key(), &rfc_key());
    }

    #[test]
    fn test_codec_returns_raw_key() {
        let key = HeliumAddressCodec.decode(MAINNET_ADDRESS).unwrap();
        assert_eq!(key, rfc_key().to_vec());
    }

    #[test]
    fn test_rejects_bad_checksum() {
        let mut corrupted = MAINNET_ADDRESS.to_string();
        corrupted.pop();
        corrupted.push('7');
        let err = Address::from_b58(&corrupted).unwrap_err();
        assert!(matches!(err, WalletLinkError::MalformedAddress(_)));
    }

    #[test]
    fn test_rejects_non_base58() {
        let err = HeliumAddressCodec.decode("0OIl-not-base58").unwrap_err();
        assert!(matches!(err, WalletLinkError::MalformedAddress(_)));
    }

    #[test]
    fn test_rejects_unsupported_key_type() {
        let err = Address::from_b58(ECC_COMPACT_ADDRESS).unwrap_err();
        assert!(err.to_string().contains("key type"));
    }

    #[test]
    fn test_rejects_off_curve_key() {
        let err = HeliumAddressCodec.decode(OFF_CURVE_ADDRESS).unwrap_err();
        assert!(matches!(err, WalletLinkError::MalformedAddress(_)));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(HeliumAddressCodec.decode("").is_err());
    }
}
