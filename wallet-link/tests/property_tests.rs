//! Property-based tests for wallet-link
//!
//! These tests use proptest to verify invariants across a wide range of inputs.

use proptest::prelude::*;
use wallet_link::test_utils::TestFixtures;
use wallet_link::token::canonical;
use wallet_link::{
    deep_link::query, parse_wallet_link_token, Keypair, LinkWalletRequest, Token, TokenWithSig,
    VerifyOptions,
};

/// Claim text the canonical encoder handles unambiguously.
fn claim_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._:/ -]{1,40}"
}

fn token_strategy() -> impl Strategy<Value = Token> {
    (
        any::<i64>(),
        claim_text(),
        claim_text(),
        claim_text(),
        claim_text(),
        claim_text(),
    )
        .prop_map(|(time, address, request, signing, callback, name)| {
            Token::new(time, address, request, signing, callback, name)
        })
}

proptest! {
    /// Transport encoding round-trips every signed token.
    #[test]
    fn transport_round_trip(
        claims in token_strategy(),
        signature in proptest::collection::vec(any::<u8>(), 0..96)
    ) {
        let token = TokenWithSig::new(claims, signature);
        let text = wallet_link::token::serialize(&token).unwrap();
        prop_assert_eq!(parse_wallet_link_token(&text).unwrap(), token);
    }

    /// Structurally equal claims encode identically, however they were built.
    #[test]
    fn canonical_encoding_ignores_construction_order(claims in token_strategy()) {
        let json = serde_json::json!({
            "appName": claims.app_name,
            "callbackUrl": claims.callback_url,
            "signingAppId": claims.signing_app_id,
            "requestAppId": claims.request_app_id,
            "address": claims.address,
            "time": claims.time,
        });
        let rebuilt: Token = serde_json::from_value(json).unwrap();
        prop_assert_eq!(canonical::encode(&claims), canonical::encode(&rebuilt));
    }

    /// Canonical encoding is deterministic.
    #[test]
    fn canonical_encoding_is_pure(claims in token_strategy()) {
        prop_assert_eq!(canonical::encode(&claims), canonical::encode(&claims.clone()));
    }

    /// Query encoding survives arbitrary text.
    #[test]
    fn query_values_round_trip(app_id in ".{1,30}", callback in ".{1,30}", name in ".{1,30}") {
        let request = LinkWalletRequest::new(app_id.clone(), callback.clone(), name.clone());
        let values = query::parse(&query::stringify(&request)).unwrap();
        prop_assert_eq!(&values["requestAppId"], &app_id);
        prop_assert_eq!(&values["callbackUrl"], &callback);
        prop_assert_eq!(&values["appName"], &name);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Signing then verifying with the signer's own address always succeeds.
    #[test]
    fn sign_then_verify(
        seed in any::<[u8; 32]>(),
        time in 0i64..4_000_000_000,
        request in claim_text(),
        signing in claim_text(),
        callback in claim_text(),
        name in claim_text()
    ) {
        let keypair = Keypair::from_seed(&seed);
        let claims = Token::new(time, keypair.address().to_b58(), request, signing, callback, name);

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let signed = runtime
            .block_on(wallet_link::sign_token(claims, &keypair))
            .unwrap();

        prop_assert!(wallet_link::verify_token(&signed, &VerifyOptions::default()).unwrap());
    }

    /// Flipping any signature bit makes verification fail.
    #[test]
    fn flipped_signature_bit_fails(index in 0usize..64, bit in 0u8..8) {
        let mut token = parse_wallet_link_token(TestFixtures::TRANSPORT_TOKEN).unwrap();
        token.signature[index] ^= 1 << bit;
        prop_assert!(!wallet_link::verify_token(&token, &VerifyOptions::default()).unwrap());
    }
}
