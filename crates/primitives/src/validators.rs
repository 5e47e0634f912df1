//! Parsing of validator address lists supplied as JSON.

use alloy_primitives::{Address, AddressError};

/// Errors when parsing a JSON validator address list.
#[derive(Debug, thiserror::Error)]
pub enum AddressListError {
    /// The input is not a JSON array of strings.
    #[error("invalid validator address list: {0}")]
    Json(#[from] serde_json::Error),
    /// An element of the array is not a valid 20-byte hex address.
    #[error("invalid validator address at index {index}: {source}")]
    InvalidAddress {
        /// Position of the offending element in the input array.
        index: usize,
        /// The underlying address parse failure.
        source: AddressError,
    },
}

/// Parses a JSON array of hex address strings into addresses, preserving the
/// order of appearance.
///
/// Elements are accepted with or without a `0x` prefix, case-insensitively,
/// and must decode to exactly 20 bytes. Malformed input is an error, never an
/// empty result.
pub fn parse_validator_list(json: &[u8]) -> Result<Vec<Address>, AddressListError> {
    let raw: Vec<String> = serde_json::from_slice(json)?;
    raw.iter()
        .enumerate()
        .map(|(index, s)| {
            s.parse::<Address>()
                .map_err(|source| AddressListError::InvalidAddress {
                    index,
                    source: AddressError::Hex(source),
                })
        })
        .collect()
}
