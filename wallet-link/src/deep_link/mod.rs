//! Deep-link URLs between a requesting app and the wallet.
//!
//! # Flows
//!
//! | Flow           | Direction          | Base                                  |
//! |----------------|--------------------|---------------------------------------|
//! | Link request   | requester → wallet | `{wallet_root}link_wallet` (or path)  |
//! | Link callback  | wallet → requester | `{scheme}link_wallet/{address}`       |
//! | Sign request   | requester → wallet | `{wallet_root}sign_hotspot`           |
//! | Sign callback  | wallet → requester | `{scheme}sign_hotspot`                |
//!
//! Parameters travel in the query string. Absent optional fields are left
//! out entirely.

mod builder;
pub mod params;
mod parse;
pub mod query;

pub use builder::DeepLinkBuilder;
pub use params::{
    LinkWalletRequest, LinkWalletResponse, LinkWalletStatus, Platform, QueryParams,
    SignHotspotRequest, SignHotspotResponse, SignHotspotStatus,
};
pub use parse::{parse_deep_link, DeepLink};

/// Default path of the link flow.
pub const LINK_WALLET_PATH: &str = "link_wallet";

/// Path of the sign flow.
pub const SIGN_HOTSPOT_PATH: &str = "sign_hotspot";
