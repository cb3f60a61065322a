//! End-to-end tests of the link and sign flows.
//!
//! These walk a token from the wallet's signing step, through the deep-link
//! callback, back into the requester and finally into the wallet's verifier.

use base64::Engine;
use std::sync::Arc;
use wallet_link::test_utils::{sample_claims, test_keypair, TestFixtures};
use wallet_link::{
    make_app_link_auth_token, parse_deep_link, parse_wallet_link_token, sign_token,
    verify_token, verify_wallet_link_token, DeepLink, DeepLinkBuilder, DelegateAppRegistry,
    LinkWalletRequest, LinkWalletResponse, LinkWalletStatus, Platform, SignHotspotRequest,
    SignHotspotResponse, SignHotspotStatus, Token, TokenVerifier, VerifyOptions,
    WalletLinkError,
};

const SCHEME: &str = "myscheme://";

#[tokio::test]
async fn test_known_signature_and_transport_text() {
    let keypair = test_keypair();
    assert_eq!(keypair.address().to_b58(), TestFixtures::ADDRESS);

    let signed = sign_token(sample_claims(), &keypair).await.unwrap();
    assert_eq!(
        base64::engine::general_purpose::STANDARD.encode(&signed.signature),
        TestFixtures::SIGNATURE_B64
    );

    let text = make_app_link_auth_token(sample_claims(), &keypair).await.unwrap();
    assert_eq!(text, TestFixtures::TRANSPORT_TOKEN);
}

#[tokio::test]
async fn test_parse_returns_every_field_unchanged() {
    let keypair = test_keypair();
    let text = make_app_link_auth_token(sample_claims(), &keypair).await.unwrap();

    let parsed = parse_wallet_link_token(&text).unwrap();
    let original = sample_claims();
    assert_eq!(parsed.claims.time, original.time);
    assert_eq!(parsed.claims.address, original.address);
    assert_eq!(parsed.claims.request_app_id, original.request_app_id);
    assert_eq!(parsed.claims.signing_app_id, original.signing_app_id);
    assert_eq!(parsed.claims.callback_url, original.callback_url);
    assert_eq!(parsed.claims.app_name, original.app_name);
}

#[test]
fn test_fixed_token_verifies_without_max_age() {
    let token = parse_wallet_link_token(TestFixtures::TRANSPORT_TOKEN).unwrap();
    assert!(verify_token(&token, &VerifyOptions::default()).unwrap());
}

#[test]
fn test_fixed_token_is_expired_under_max_age() {
    let err = verify_wallet_link_token(TestFixtures::TRANSPORT_TOKEN, &VerifyOptions::max_age(3600))
        .unwrap_err();
    assert!(matches!(err, WalletLinkError::Expired { time: 1_610_000_000, .. }));
}

#[test]
fn test_expired_wins_over_bad_signature() {
    let mut token = parse_wallet_link_token(TestFixtures::TRANSPORT_TOKEN).unwrap();
    token.signature = vec![0xff; 64];
    let now = token.claims.time + 100;

    let err = TokenVerifier::new()
        .verify_at(&token, &VerifyOptions::max_age(99), now)
        .unwrap_err();
    assert!(matches!(err, WalletLinkError::Expired { .. }));

    // Inside the window the same token is simply rejected.
    let valid = TokenVerifier::new()
        .verify_at(&token, &VerifyOptions::max_age(100), now)
        .unwrap();
    assert!(!valid);
}

#[test]
fn test_tampering_with_any_field_fails_verification() {
    let original = parse_wallet_link_token(TestFixtures::TRANSPORT_TOKEN).unwrap();
    let other_address = wallet_link::Keypair::random().address().to_b58();

    let mutations: Vec<(&str, Box<dyn Fn(&mut Token)>)> = vec![
        ("time", Box::new(|t: &mut Token| t.time += 1)),
        ("address", Box::new(move |t: &mut Token| t.address = other_address.clone())),
        ("requestAppId", Box::new(|t: &mut Token| t.request_app_id.push('x'))),
        ("signingAppId", Box::new(|t: &mut Token| t.signing_app_id = "com.evil".into())),
        ("callbackUrl", Box::new(|t: &mut Token| t.callback_url = "evil://".into())),
        ("appName", Box::new(|t: &mut Token| t.app_name = "Tacos".into())),
    ];

    for (field, mutate) in mutations {
        let mut token = original.clone();
        mutate(&mut token.claims);
        assert!(
            !verify_token(&token, &VerifyOptions::default()).unwrap(),
            "tampered {} should not verify",
            field
        );
    }
}

#[tokio::test]
async fn test_full_link_then_sign_flow() {
    let apps = Arc::new(DelegateAppRegistry::default());
    let links = DeepLinkBuilder::new(Arc::clone(&apps));
    let wallet_key = wallet_link::Keypair::random();
    let address = wallet_key.address().to_b58();

    // Requester opens the wallet.
    let request_url = links.link_request_url(
        &LinkWalletRequest::new("com.tacos", SCHEME, "tacos"),
        None,
    );
    let DeepLink::LinkRequest { request, .. } = parse_deep_link(&request_url, &apps, None).unwrap()
    else {
        panic!("Expected LinkRequest");
    };

    // Wallet approves and calls back.
    let claims = Token::issued_now(
        &address,
        &request.request_app_id,
        &apps.wallet.ios_bundle_id,
        &request.callback_url,
        &request.app_name,
    );
    let token = make_app_link_auth_token(claims, &wallet_key).await.unwrap();
    let callback_url = links.link_callback_url(
        &request.callback_url,
        &address,
        &LinkWalletResponse::success(&token),
    );

    // Requester receives the token.
    let DeepLink::LinkCallback {
        address: linked,
        response,
    } = parse_deep_link(&callback_url, &apps, Some(SCHEME)).unwrap()
    else {
        panic!("Expected LinkCallback");
    };
    assert_eq!(linked, address);
    assert_eq!(response.status, LinkWalletStatus::Success);
    let received = response.token.unwrap();
    assert_eq!(received, token);

    // Requester asks for a signature.
    let sign_url = links.sign_request_url(
        &SignHotspotRequest::new(&received, Platform::Ios).with_assert_location_txn("CAES"),
    );
    let DeepLink::SignRequest(sign_request) = parse_deep_link(&sign_url, &apps, None).unwrap()
    else {
        panic!("Expected SignRequest");
    };

    // Wallet verifies before doing the privileged work.
    let (presented, valid) =
        verify_wallet_link_token(&sign_request.token, &VerifyOptions::max_age(60)).unwrap();
    assert!(valid);
    assert_eq!(presented.claims.request_app_id, "com.tacos");

    let mut response = SignHotspotResponse::with_status(SignHotspotStatus::Success);
    response.assert_txn = Some("signed".into());
    let done_url = links.sign_callback_url(&presented.claims.callback_url, &response);
    assert_eq!(
        parse_deep_link(&done_url, &apps, Some(SCHEME)).unwrap(),
        DeepLink::SignCallback(response)
    );
}

#[test]
fn test_cancelled_link_carries_no_token() {
    let links = DeepLinkBuilder::default();
    let url = links.link_callback_url(
        SCHEME,
        TestFixtures::ADDRESS,
        &LinkWalletResponse::user_cancelled(),
    );
    assert!(!url.contains("token="));
}
