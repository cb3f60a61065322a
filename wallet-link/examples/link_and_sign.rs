//! Link and Sign Flow Example
//!
//! Walks through both deep-link flows between a requesting app ("Tacos")
//! and the wallet, with the wallet's key held behind a custom signer.
//!
//! Run with: `cargo run --example link_and_sign`

use async_trait::async_trait;
use wallet_link::{
    make_app_link_auth_token, parse_deep_link, verify_wallet_link_token, DeepLink,
    DeepLinkBuilder, Keypair, LinkWalletRequest, LinkWalletResponse, MessageSigner, Platform,
    Result, SignHotspotRequest, SignHotspotResponse, SignHotspotStatus, Token, VerifyOptions,
};

const TACOS_SCHEME: &str = "tacos://";

/// Stands in for a secure-enclave signer that only exposes `sign`.
struct EnclaveSigner {
    keypair: Keypair,
}

#[async_trait]
impl MessageSigner for EnclaveSigner {
    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        println!("  [enclave] signing {} byte message", message.len());
        Ok(self.keypair.sign_bytes(message).to_vec())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let links = DeepLinkBuilder::default();
    let enclave = EnclaveSigner {
        keypair: Keypair::random(),
    };
    let address = enclave.keypair.address().to_b58();

    println!("=== Link flow ===");
    let request = LinkWalletRequest::new("com.tacos", TACOS_SCHEME, "Tacos");
    let url = links.link_request_url(&request, None);
    println!("Tacos opens: {}", url);

    // Wallet side
    let DeepLink::LinkRequest { request, .. } = parse_deep_link(&url, links.apps(), None)? else {
        unreachable!("built as a link request");
    };
    let claims = Token::issued_now(
        address.clone(),
        request.request_app_id,
        links.apps().wallet.ios_bundle_id.clone(),
        request.callback_url.clone(),
        request.app_name,
    );
    let token = make_app_link_auth_token(claims, &enclave).await?;
    let callback = links.link_callback_url(
        &request.callback_url,
        &address,
        &LinkWalletResponse::success(token),
    );
    println!("Wallet opens: {}", callback);

    // Tacos side
    let DeepLink::LinkCallback { response, .. } =
        parse_deep_link(&callback, links.apps(), Some(TACOS_SCHEME))?
    else {
        unreachable!("built as a link callback");
    };
    let token = response.token.unwrap_or_default();
    println!("Tacos stores token for {}", address);

    println!("\n=== Sign flow ===");
    let request = SignHotspotRequest::new(token, Platform::Ios).with_add_gateway_txn("CrkBCiEB");
    let url = links.sign_request_url(&request);
    println!("Tacos opens: {}", url);

    // Wallet side: the token must still be fresh and signed by this wallet
    let DeepLink::SignRequest(request) = parse_deep_link(&url, links.apps(), None)? else {
        unreachable!("built as a sign request");
    };
    let (token, valid) = verify_wallet_link_token(&request.token, &VerifyOptions::max_age(3600))?;
    println!("Token valid: {} (issued by {})", valid, token.claims.address);

    let mut response = SignHotspotResponse::with_status(SignHotspotStatus::Success);
    response.gateway_txn = request.add_gateway_txn;
    println!(
        "Wallet opens: {}",
        links.sign_callback_url(&token.claims.callback_url, &response)
    );

    Ok(())
}
