//! The Istanbul extra-data tuple and its wire codec.

use crate::{IstanbulExtraError, EXTRA_SEAL, EXTRA_VANITY};
use alloy_primitives::{hex, Address, Bytes};
use alloy_rlp::{Decodable, Encodable, RlpDecodable, RlpEncodable};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Consensus metadata carried in the extra-data region of an Istanbul header,
/// after the 32-byte vanity prefix.
///
/// On the wire this is the RLP list `[validators, seal, committed_seals]`.
/// The format is positional: field declaration order below is the sole field
/// identity and is part of the wire contract.
#[derive(Clone, Debug, Default, PartialEq, Eq, RlpEncodable, RlpDecodable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IstanbulExtra {
    /// Validator addresses, in the order that defines validator indexing.
    pub validators: Vec<Address>,
    /// Proposer seal over the header. [`EXTRA_SEAL`] zero bytes when freshly
    /// constructed; any length is accepted and preserved on decode.
    pub seal: Bytes,
    /// Committed-validator seals, collected after proposal. Entries may vary
    /// in length; order is preserved exactly.
    pub committed_seals: Vec<Bytes>,
}

impl IstanbulExtra {
    /// Creates extra-data for a new header: the given validators, a zeroed
    /// seal of [`EXTRA_SEAL`] bytes and no committed seals.
    pub fn new(validators: Vec<Address>) -> Self {
        Self {
            validators,
            seal: Bytes::from(vec![0u8; EXTRA_SEAL]),
            committed_seals: Vec::new(),
        }
    }

    /// Extracts the tuple from a header's full extra-data region.
    ///
    /// The region must be at least [`EXTRA_VANITY`] bytes long; the vanity
    /// prefix is sliced off, never interpreted. The remainder must be exactly
    /// the RLP tuple: trailing bytes are rejected.
    pub fn extract(extra_data: &[u8]) -> Result<Self, IstanbulExtraError> {
        if extra_data.len() < EXTRA_VANITY {
            return Err(IstanbulExtraError::InvalidHeaderExtra);
        }

        let mut payload = &extra_data[EXTRA_VANITY..];
        let extra = Self::decode(&mut payload)?;
        if !payload.is_empty() {
            return Err(alloy_rlp::Error::UnexpectedLength.into());
        }
        Ok(extra)
    }

    /// RLP payload of the tuple, without the vanity prefix.
    pub fn payload(&self) -> Bytes {
        let mut out = Vec::with_capacity(self.length());
        self.encode(&mut out);
        out.into()
    }
}

/// Parses a hex vanity string into exactly [`EXTRA_VANITY`] bytes.
///
/// Accepts input with or without a `0x` prefix. Shorter input is right-padded
/// with zeros and longer input truncated; only invalid hex fails.
pub fn parse_vanity(vanity: &str) -> Result<[u8; EXTRA_VANITY], IstanbulExtraError> {
    let decoded = hex::decode(vanity)?;
    let mut out = [0u8; EXTRA_VANITY];
    let len = decoded.len().min(EXTRA_VANITY);
    out[..len].copy_from_slice(&decoded[..len]);
    Ok(out)
}

/// Builds the full extra-data region for a new header and returns it as a
/// `0x`-prefixed hex string.
///
/// The result is the normalized vanity followed by the payload of
/// [`IstanbulExtra::new`] over `validators`.
pub fn encode_extra_data(
    vanity: &str,
    validators: Vec<Address>,
) -> Result<String, IstanbulExtraError> {
    let vanity = parse_vanity(vanity)?;
    let payload = IstanbulExtra::new(validators).payload();

    let mut extra_data = Vec::with_capacity(EXTRA_VANITY + payload.len());
    extra_data.extend_from_slice(&vanity);
    extra_data.extend_from_slice(&payload);
    Ok(hex::encode_prefixed(extra_data))
}
