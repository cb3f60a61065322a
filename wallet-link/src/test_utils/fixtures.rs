//! Test fixtures and known-answer vectors.

use crate::keypair::Keypair;
use crate::token::Token;

/// Collection of commonly used test fixtures.
pub struct TestFixtures;

impl TestFixtures {
    /// RFC 8032 section 7.1 test 1 secret key.
    pub const SEED_HEX: &'static str =
        "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

    /// Mainnet address of [`Self::SEED_HEX`].
    pub const ADDRESS: &'static str = "14ab6w719xfTgeZeaLkg4nUUuTDJBDJp4xUVzqkkYB3c5amgUz6";

    /// Issuance time of the sample claims.
    pub const TIME: i64 = 1_610_000_000;

    /// Signature of the sample claims under [`Self::SEED_HEX`], base64.
    pub const SIGNATURE_B64: &'static str =
        "UOm6QmPEfDulqJhdwF/m6nkyb9rAwByeGpSx9pDLCvka6I7d6MjJeMS8ysvEJlAIB+0BGgS4KtCTdWS4PSZUDg==";

    /// Transport text of the signed sample claims.
    pub const TRANSPORT_TOKEN: &'static str = "eyJ0aW1lIjoxNjEwMDAwMDAwLCJhZGRyZXNzIjoiMTRhYjZ3NzE5eGZUZ2VaZWFMa2c0blVVdVRESkJESnA0eFVWenFra1lCM2M1YW1nVXo2IiwicmVxdWVzdEFwcElkIjoiY29tLnRhY29zIiwic2lnbmluZ0FwcElkIjoiY29tLmJ1cnJpdG8iLCJjYWxsYmFja1VybCI6Im15c2NoZW1lOi8vIiwiYXBwTmFtZSI6InRhY29zIiwic2lnbmF0dXJlIjoiVU9tNlFtUEVmRHVscUpoZHdGL202bmt5YjlyQXdCeWVHcFN4OXBETEN2a2E2STdkNk1qSmVNUzh5c3ZFSmxBSUIrMEJHZ1M0S3RDVGRXUzRQU1pVRGc9PSJ9";

    /// Sample claims issued by `keypair`.
    pub fn claims(keypair: &Keypair) -> Token {
        Token::new(
            Self::TIME,
            keypair.address().to_b58(),
            "com.tacos",
            "com.burrito",
            "myscheme://",
            "tacos",
        )
    }
}

/// Sample claims issued by [`test_keypair`], the ones behind
/// [`TestFixtures::SIGNATURE_B64`].
pub fn sample_claims() -> Token {
    TestFixtures::claims(&test_keypair())
}

/// The deterministic keypair behind [`TestFixtures::ADDRESS`].
pub fn test_keypair() -> Keypair {
    Keypair::from_seed_hex(TestFixtures::SEED_HEX).expect("fixture seed is valid hex")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{canonical, verify_token, TokenWithSig, VerifyOptions};
    use base64::Engine;

    #[test]
    fn test_keypair_matches_address() {
        assert_eq!(test_keypair().address().to_b58(), TestFixtures::ADDRESS);
    }

    #[test]
    fn test_transport_token_matches_sample_claims() {
        let token = crate::token::deserialize(TestFixtures::TRANSPORT_TOKEN).unwrap();
        assert_eq!(token.claims, sample_claims());
        assert_eq!(
            base64::engine::general_purpose::STANDARD.encode(&token.signature),
            TestFixtures::SIGNATURE_B64
        );
    }

    #[test]
    fn test_known_signature() {
        let keypair = test_keypair();
        let claims = TestFixtures::claims(&keypair);
        let signature = keypair.sign_bytes(&canonical::encode(&claims));
        assert_eq!(
            base64::engine::general_purpose::STANDARD.encode(signature),
            TestFixtures::SIGNATURE_B64
        );

        let token = TokenWithSig::new(claims, signature.to_vec());
        assert!(verify_token(&token, &VerifyOptions::default()).unwrap());
    }
}
