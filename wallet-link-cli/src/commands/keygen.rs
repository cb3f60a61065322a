//! Keygen command - create a wallet keypair

use anyhow::Result;
use wallet_link::{Keypair, NetType};

use crate::ui;

pub async fn run(testnet: bool, qr: bool, verbose: bool) -> Result<()> {
    let net_type = if testnet {
        NetType::Testnet
    } else {
        NetType::Mainnet
    };
    let keypair = Keypair::random().with_net_type(net_type);
    let address = keypair.address().to_b58();

    ui::header("New Keypair");
    ui::key_value("Address", &address);
    ui::key_value("Network", &format!("{:?}", net_type));
    if verbose {
        ui::key_value("Public Key", &hex::encode(keypair.public_key()));
    }
    ui::key_value("Seed", &keypair.seed_hex());

    if qr {
        ui::qr_code(&address)?;
    }

    ui::separator();
    ui::warning("The seed controls this account. Store it somewhere safe.");

    Ok(())
}
