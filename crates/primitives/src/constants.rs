//! Protocol constants for Istanbul BFT extra-data handling.

use alloy_primitives::{b256, B256};

/// Fixed number of extra-data bytes reserved for validator vanity.
pub const EXTRA_VANITY: usize = 32;

/// Fixed number of extra-data bytes reserved for the proposer seal.
pub const EXTRA_SEAL: usize = 65;

/// Digest of "Istanbul practical byzantine fault tolerance", carried in the
/// header mix-digest to identify blocks produced by an Istanbul engine.
pub const ISTANBUL_DIGEST: B256 =
    b256!("63746963616c2062797a616e74696e65206661756c7420746f6c6572616e6365");
