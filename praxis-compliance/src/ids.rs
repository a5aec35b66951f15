use chrono::{DateTime, Utc};

use praxis_core::constants::DERIVED_ID_HEX_LEN;

/// Deterministic record identifier: first 16 hex characters of a hash
/// over the identifying fields joined with `|`, plus the timestamp.
pub(crate) fn derive_id(parts: &[&str], timestamp: &DateTime<Utc>) -> String {
    let input = format!("{}|{}", parts.join("|"), timestamp.to_rfc3339());
    let hex = blake3::hash(input.as_bytes()).to_hex();
    hex.as_str()[..DERIVED_ID_HEX_LEN].to_string()
}
