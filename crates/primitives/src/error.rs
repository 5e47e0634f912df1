//! Error types for extra-data extraction and construction.

use alloy_primitives::hex;

/// Errors when extracting or building Istanbul extra-data.
#[derive(Debug, thiserror::Error)]
pub enum IstanbulExtraError {
    /// The extra-data region is shorter than the mandatory 32-byte vanity
    /// prefix.
    #[error("invalid istanbul header extra-data")]
    InvalidHeaderExtra,
    /// The payload after the vanity prefix is not a valid RLP encoding of the
    /// extra-data tuple.
    #[error(transparent)]
    Decode(#[from] alloy_rlp::Error),
    /// The supplied vanity string is not valid hex.
    #[error("invalid vanity hex: {0}")]
    Vanity(#[from] hex::FromHexError),
}
