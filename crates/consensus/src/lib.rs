//! Istanbul BFT consensus-side header handling.
//!
//! Derives the canonical seal-stripped form of a block header that
//! Istanbul-family engines use as the pre-signature hash input.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod filter;

pub use filter::{filtered_header, is_istanbul_header};
