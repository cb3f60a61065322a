//! Token commands - issue, inspect and verify delegation tokens

use anyhow::{Context, Result};
use wallet_link::token::canonical;
use wallet_link::{
    make_app_link_auth_token, verify_wallet_link_token, Keypair, NetType, Token,
    VerifyOptions, WalletLinkConfig, WalletLinkError,
};

use crate::ui;

/// Inputs for [`make`].
pub struct MakeArgs {
    pub seed: String,
    pub request_app_id: String,
    pub signing_app_id: String,
    pub callback_url: String,
    pub app_name: String,
    pub time: Option<i64>,
    pub testnet: bool,
}

/// Sign a token and print its transport text.
pub async fn make(args: MakeArgs, verbose: bool) -> Result<()> {
    let mut keypair = Keypair::from_seed_hex(&args.seed).context("Invalid seed")?;
    if args.testnet {
        keypair = keypair.with_net_type(NetType::Testnet);
    }
    let address = keypair.address().to_b58();

    let claims = match args.time {
        Some(time) => Token::new(
            time,
            address,
            args.request_app_id,
            args.signing_app_id,
            args.callback_url,
            args.app_name,
        ),
        None => Token::issued_now(
            address,
            args.request_app_id,
            args.signing_app_id,
            args.callback_url,
            args.app_name,
        ),
    };

    if verbose {
        ui::header("Claims");
        ui::key_value("Canonical", &canonical::canonical_message(&claims));
    }

    let token = make_app_link_auth_token(claims, &keypair).await?;
    tracing::info!(len = token.len(), "token issued");

    // Bare on stdout so it can be piped
    println!("{}", token);
    Ok(())
}

/// Print a token's claims without checking it.
pub async fn inspect(text: &str, verbose: bool) -> Result<()> {
    let token = wallet_link::parse_wallet_link_token(text)?;

    ui::header("Token");
    ui::json(&serde_json::to_value(token.claims())?);
    ui::key_value("Issued", &format_time(token.claims.time));
    ui::key_value("Signature", &hex::encode(&token.signature));
    if verbose {
        ui::key_value("Canonical", &canonical::canonical_message(token.claims()));
    }
    Ok(())
}

/// Check a token, failing unless it is valid.
pub async fn verify(
    config: &WalletLinkConfig,
    text: &str,
    max_age: Option<i64>,
    no_expiry: bool,
    verbose: bool,
) -> Result<()> {
    let options = if no_expiry {
        VerifyOptions::default()
    } else if let Some(seconds) = max_age {
        VerifyOptions::max_age(seconds)
    } else {
        config.token.verify_options()
    };

    match verify_wallet_link_token(text, &options) {
        Ok((token, true)) => {
            ui::success("Token is valid");
            ui::key_value("Address", &token.claims.address);
            ui::key_value(
                "Requester",
                &format!("{} ({})", token.claims.app_name, token.claims.request_app_id),
            );
            ui::key_value("Issued", &format_time(token.claims.time));
            if verbose {
                ui::key_value("Canonical", &canonical::canonical_message(token.claims()));
            }
            Ok(())
        }
        Ok((_, false)) => {
            ui::error("Signature does not match the token's address");
            anyhow::bail!("invalid signature")
        }
        Err(err @ WalletLinkError::Expired { .. }) => {
            ui::error("Token has expired");
            Err(err.into())
        }
        Err(err) => {
            ui::error(&format!("Token rejected: {}", err));
            Err(err.into())
        }
    }
}

fn format_time(time: i64) -> String {
    chrono::DateTime::from_timestamp(time, 0)
        .map(|t| format!("{} ({})", t.to_rfc3339(), time))
        .unwrap_or_else(|| time.to_string())
}
