//! Parse command - read a received deep link

use anyhow::Result;
use wallet_link::{parse_deep_link, DeepLink, WalletLinkConfig};

use crate::ui;

pub async fn run(
    config: &WalletLinkConfig,
    url: &str,
    scheme: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let link = parse_deep_link(url, &config.apps, scheme)?;

    match &link {
        DeepLink::LinkRequest { path, request } => {
            ui::header("Link Request");
            ui::key_value("Path", path);
            ui::json(&serde_json::to_value(request)?);
        }
        DeepLink::LinkCallback { address, response } => {
            ui::header("Link Callback");
            ui::key_value("Address", address);
            ui::key_value("Status", response.status.as_str());
            if let Some(token) = &response.token {
                describe_token(token, verbose);
            }
        }
        DeepLink::SignRequest(request) => {
            ui::header("Sign Request");
            ui::key_value("Platform", request.platform.as_str());
            ui::key_value("Transactions", &request.transaction_count().to_string());
            describe_token(&request.token, verbose);
        }
        DeepLink::SignCallback(response) => {
            ui::header("Sign Callback");
            ui::json(&serde_json::to_value(response)?);
        }
    }

    Ok(())
}

fn describe_token(text: &str, verbose: bool) {
    match wallet_link::parse_wallet_link_token(text) {
        Ok(token) => {
            ui::key_value("Token Address", &token.claims.address);
            ui::key_value("Token Requester", &token.claims.request_app_id);
            if verbose {
                ui::key_value("Token", text);
            }
        }
        Err(err) => ui::warning(&format!("Token does not decode: {}", err)),
    }
}
