//! Query-string encoding.
//!
//! Keys are emitted in ascending order so the same record always produces
//! the same URL. Values are percent-encoded with everything outside
//! `A-Z a-z 0-9 - _ . ~` escaped.

use super::params::QueryParams;
use crate::{Result, WalletLinkError};
use std::collections::BTreeMap;

/// Encode a record as a query string (without the leading `?`).
pub fn stringify<P: QueryParams + ?Sized>(params: &P) -> String {
    let mut pairs = params.query_pairs();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a query string into a key/value map.
///
/// Later duplicates win. Pairs without `=` are read as a key with an empty
/// value.
pub fn parse(query: &str) -> Result<BTreeMap<String, String>> {
    let mut values = BTreeMap::new();
    for param in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = param.split_once('=').unwrap_or((param, ""));
        values.insert(decode_component(key)?, decode_component(value)?);
    }
    Ok(values)
}

fn decode_component(encoded: &str) -> Result<String> {
    let spaced = encoded.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| WalletLinkError::InvalidDeepLink(format!("bad percent encoding: {}", e)))
}
