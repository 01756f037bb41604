//! JSON blobs stored as binary registry values.
//!
//! The game writes UTF-8 JSON followed by a single NUL byte, C-string style,
//! even though the value itself is typed as raw bytes.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub const TERMINATOR: u8 = 0;

/// Serialize `value` to JSON and append the terminator.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut bytes = serde_json::to_vec(value)?;
    bytes.push(TERMINATOR);
    Ok(bytes)
}

/// Strip one trailing terminator, if present, and parse the rest as JSON.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    let json = bytes.strip_suffix(&[TERMINATOR]).unwrap_or(bytes);
    serde_json::from_slice(json)
}
