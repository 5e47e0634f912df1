//! Istanbul BFT extra-data primitives.
//!
//! Types and codecs for the consensus metadata that Istanbul-family engines
//! embed in the `extra_data` region of a block header: a 32-byte vanity
//! prefix followed by the RLP encoding of the validator set, the proposer
//! seal and the committed seals.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod constants;
mod error;
mod extra;
mod validators;

pub use constants::{EXTRA_SEAL, EXTRA_VANITY, ISTANBUL_DIGEST};
pub use error::IstanbulExtraError;
pub use extra::{encode_extra_data, parse_vanity, IstanbulExtra};
pub use validators::{parse_validator_list, AddressListError};
