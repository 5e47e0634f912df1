//! Seal-stripped header derivation.

use alloy_consensus::Header;
use alloy_primitives::Bytes;
use ibft_primitives::{IstanbulExtra, EXTRA_VANITY, ISTANBUL_DIGEST};
use tracing::debug;

/// Returns `true` if the header's mix-digest marks it as produced by an
/// Istanbul consensus engine.
pub fn is_istanbul_header(header: &Header) -> bool {
    header.mix_hash == ISTANBUL_DIGEST
}

/// Returns a copy of the header with seal fields cleared so that it can serve
/// as the pre-signature hash input.
///
/// Committed seals are always stripped: they are collected only after
/// consensus finality and must never participate in the signed digest. The
/// proposer seal is retained when `keep_seal` is set, for the post-seal hash
/// variant.
///
/// Returns `None` when the header's extra-data cannot be extracted; such a
/// header is not a valid Istanbul header and has no canonical form.
pub fn filtered_header(header: &Header, keep_seal: bool) -> Option<Header> {
    let mut filtered = header.clone();

    let mut extra = match IstanbulExtra::extract(&filtered.extra_data) {
        Ok(extra) => extra,
        Err(err) => {
            debug!(%err, number = header.number, "cannot extract istanbul extra-data");
            return None;
        }
    };

    if !keep_seal {
        extra.seal = Bytes::new();
    }
    extra.committed_seals = Vec::new();

    let payload = extra.payload();
    let mut extra_data = Vec::with_capacity(EXTRA_VANITY + payload.len());
    extra_data.extend_from_slice(&filtered.extra_data[..EXTRA_VANITY]);
    extra_data.extend_from_slice(&payload);
    filtered.extra_data = extra_data.into();

    Some(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;
    use ibft_primitives::EXTRA_SEAL;

    fn sample_extra() -> IstanbulExtra {
        IstanbulExtra {
            validators: vec![Address::with_last_byte(1), Address::with_last_byte(2)],
            seal: Bytes::from(vec![0xaa; EXTRA_SEAL]),
            committed_seals: vec![
                Bytes::from(vec![0xbb; EXTRA_SEAL]),
                Bytes::from(vec![0xcc; EXTRA_SEAL]),
            ],
        }
    }

    fn istanbul_header(extra: &IstanbulExtra) -> Header {
        let mut extra_data = vec![0xef; EXTRA_VANITY];
        extra_data.extend_from_slice(&extra.payload());
        Header { number: 7, extra_data: extra_data.into(), ..Default::default() }
    }

    #[test]
    fn committed_seals_are_always_stripped() {
        let header = istanbul_header(&sample_extra());
        for keep_seal in [false, true] {
            let filtered = filtered_header(&header, keep_seal).unwrap();
            let extra = IstanbulExtra::extract(&filtered.extra_data).unwrap();
            assert!(extra.committed_seals.is_empty());
        }
    }

    #[test]
    fn keep_seal_retains_the_proposer_seal() {
        let header = istanbul_header(&sample_extra());

        let kept = filtered_header(&header, true).unwrap();
        let extra = IstanbulExtra::extract(&kept.extra_data).unwrap();
        assert_eq!(extra.seal, Bytes::from(vec![0xaa; EXTRA_SEAL]));

        let stripped = filtered_header(&header, false).unwrap();
        let extra = IstanbulExtra::extract(&stripped.extra_data).unwrap();
        assert!(extra.seal.is_empty());
    }

    #[test]
    fn stripping_is_idempotent() {
        let header = istanbul_header(&sample_extra());
        let once = filtered_header(&header, false).unwrap();
        let twice = filtered_header(&once, false).unwrap();
        assert_eq!(once.extra_data, twice.extra_data);
    }

    #[test]
    fn vanity_prefix_survives_filtering() {
        let header = istanbul_header(&sample_extra());
        let filtered = filtered_header(&header, false).unwrap();
        assert_eq!(filtered.extra_data[..EXTRA_VANITY], header.extra_data[..EXTRA_VANITY]);
    }

    #[test]
    fn validators_survive_filtering() {
        let extra = sample_extra();
        let filtered = filtered_header(&istanbul_header(&extra), false).unwrap();
        let decoded = IstanbulExtra::extract(&filtered.extra_data).unwrap();
        assert_eq!(decoded.validators, extra.validators);
    }

    #[test]
    fn original_header_is_left_untouched() {
        let header = istanbul_header(&sample_extra());
        let before = header.extra_data.clone();
        let _ = filtered_header(&header, false).unwrap();
        assert_eq!(header.extra_data, before);
    }

    #[test]
    fn undecodable_extra_data_yields_none() {
        let short = Header { extra_data: Bytes::from(vec![0u8; 16]), ..Default::default() };
        assert!(filtered_header(&short, false).is_none());

        let garbage_payload = {
            let mut extra_data = vec![0u8; EXTRA_VANITY];
            extra_data.extend_from_slice(&[0xff, 0xff]);
            Header { extra_data: extra_data.into(), ..Default::default() }
        };
        assert!(filtered_header(&garbage_payload, false).is_none());
    }

    #[test]
    fn istanbul_digest_identifies_istanbul_headers() {
        let mut header = Header::default();
        assert!(!is_istanbul_header(&header));
        header.mix_hash = ISTANBUL_DIGEST;
        assert!(is_istanbul_header(&header));
    }
}
