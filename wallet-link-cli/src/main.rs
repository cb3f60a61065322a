//! Wallet Link CLI
//!
//! Command-line interface for issuing, inspecting and verifying wallet link
//! tokens and for building and reading the deep links that carry them.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "wallet-link")]
#[command(about = "Wallet Link CLI - Issue and check delegation tokens and deep links", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML configuration file (can also be set via WALLET_LINK_CONFIG env var)
    #[arg(long, global = true, env = "WALLET_LINK_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new wallet keypair
    Keygen {
        /// Derive a testnet address
        #[arg(long)]
        testnet: bool,

        /// Show the address as a QR code
        #[arg(long)]
        qr: bool,
    },

    /// Issue, inspect and verify tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Build deep-link URLs
    Url {
        #[command(subcommand)]
        action: UrlAction,

        /// Show the URL as a QR code
        #[arg(long, global = true)]
        qr: bool,
    },

    /// Parse a received deep-link URL
    Parse {
        /// The full URL
        url: String,

        /// Callback scheme of the receiving app (e.g., myapp://)
        #[arg(short, long)]
        scheme: Option<String>,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Subcommand)]
enum TokenAction {
    /// Sign a token for a requesting app
    Make {
        /// Wallet seed, hex (can also be set via WALLET_LINK_SEED env var)
        #[arg(long, env = "WALLET_LINK_SEED", hide_env_values = true)]
        seed: String,

        /// Identifier of the requesting app
        #[arg(long)]
        request_app_id: String,

        /// Identifier of the signing (wallet) app
        #[arg(long)]
        signing_app_id: String,

        /// Callback scheme of the requesting app
        #[arg(long)]
        callback_url: String,

        /// Display name of the requesting app
        #[arg(long)]
        app_name: String,

        /// Issuance time, unix seconds (defaults to now)
        #[arg(long)]
        time: Option<i64>,

        /// Sign for the testnet address of the seed
        #[arg(long)]
        testnet: bool,
    },

    /// Decode a token without checking it
    Inspect {
        /// Transport token text
        token: String,
    },

    /// Check a token's age and signature
    Verify {
        /// Transport token text
        token: String,

        /// Max age in seconds (defaults to the configured policy)
        #[arg(long)]
        max_age: Option<i64>,

        /// Skip the age check
        #[arg(long, conflicts_with = "max_age")]
        no_expiry: bool,
    },
}

#[derive(Subcommand)]
enum UrlAction {
    /// Requester asks the wallet to link an account
    LinkRequest {
        /// Identifier of the requesting app
        #[arg(long)]
        request_app_id: String,

        /// Callback scheme of the requesting app
        #[arg(long)]
        callback_url: String,

        /// Display name of the requesting app
        #[arg(long)]
        app_name: String,

        /// Path under the wallet root (defaults to link_wallet)
        #[arg(long)]
        path: Option<String>,
    },

    /// Wallet answers a link request
    LinkCallback {
        /// Callback scheme of the requesting app
        #[arg(long)]
        scheme: String,

        /// Address of the linked account
        #[arg(long)]
        address: String,

        /// Transport token; omit to answer user_cancelled
        #[arg(long)]
        token: Option<String>,
    },

    /// Requester asks the wallet to sign hotspot transactions
    SignRequest {
        /// Transport token from the link flow
        #[arg(long)]
        token: String,

        /// Requesting platform (ios or android)
        #[arg(long)]
        platform: String,

        /// Unsigned add-gateway transaction
        #[arg(long)]
        add_gateway_txn: Option<String>,

        /// Unsigned assert-location transaction
        #[arg(long)]
        assert_location_txn: Option<String>,

        /// Unsigned transfer transaction
        #[arg(long)]
        transfer_hotspot_txn: Option<String>,
    },

    /// Wallet answers a sign request
    SignCallback {
        /// Callback scheme of the requesting app
        #[arg(long)]
        scheme: String,

        /// Outcome (success, token_not_found, user_cancelled, gateway_not_found, invalid_link)
        #[arg(long)]
        status: String,

        /// Signed assert-location transaction
        #[arg(long)]
        assert_txn: Option<String>,

        /// Signed add-gateway transaction
        #[arg(long)]
        gateway_txn: Option<String>,

        /// Signed transfer transaction
        #[arg(long)]
        transfer_txn: Option<String>,

        /// Gateway address
        #[arg(long)]
        gateway_address: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("wallet_link_cli=debug,wallet_link=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("wallet_link_cli=info,wallet_link=warn")
            .with_writer(std::io::stderr)
            .init();
    }

    let config = commands::load_config(cli.config.as_deref())?;

    // Dispatch commands
    match cli.command {
        Commands::Keygen { testnet, qr } => {
            commands::keygen::run(testnet, qr, cli.verbose).await?;
        }
        Commands::Token { action } => match action {
            TokenAction::Make {
                seed,
                request_app_id,
                signing_app_id,
                callback_url,
                app_name,
                time,
                testnet,
            } => {
                let args = commands::token::MakeArgs {
                    seed,
                    request_app_id,
                    signing_app_id,
                    callback_url,
                    app_name,
                    time,
                    testnet,
                };
                commands::token::make(args, cli.verbose).await?;
            }
            TokenAction::Inspect { token } => {
                commands::token::inspect(&token, cli.verbose).await?;
            }
            TokenAction::Verify {
                token,
                max_age,
                no_expiry,
            } => {
                commands::token::verify(&config, &token, max_age, no_expiry, cli.verbose).await?;
            }
        },
        Commands::Url { action, qr } => {
            let url = match action {
                UrlAction::LinkRequest {
                    request_app_id,
                    callback_url,
                    app_name,
                    path,
                } => commands::url::link_request(
                    &config,
                    request_app_id,
                    callback_url,
                    app_name,
                    path.as_deref(),
                ),
                UrlAction::LinkCallback {
                    scheme,
                    address,
                    token,
                } => commands::url::link_callback(&config, &scheme, &address, token),
                UrlAction::SignRequest {
                    token,
                    platform,
                    add_gateway_txn,
                    assert_location_txn,
                    transfer_hotspot_txn,
                } => commands::url::sign_request(
                    &config,
                    token,
                    &platform,
                    add_gateway_txn,
                    assert_location_txn,
                    transfer_hotspot_txn,
                )?,
                UrlAction::SignCallback {
                    scheme,
                    status,
                    assert_txn,
                    gateway_txn,
                    transfer_txn,
                    gateway_address,
                } => {
                    let mut response =
                        wallet_link::SignHotspotResponse::with_status(status.parse()?);
                    response.assert_txn = assert_txn;
                    response.gateway_txn = gateway_txn;
                    response.transfer_txn = transfer_txn;
                    response.gateway_address = gateway_address;
                    commands::url::sign_callback(&config, &scheme, &response)
                }
            };
            commands::url::show(&url, qr)?;
        }
        Commands::Parse { url, scheme } => {
            commands::parse::run(&config, &url, scheme.as_deref(), cli.verbose).await?;
        }
        Commands::Config => {
            commands::config::show(&config, cli.config.as_deref())?;
        }
    }

    Ok(())
}
