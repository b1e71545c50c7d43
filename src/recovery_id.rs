//! The legacy recovery-byte convention.
//!
//! The curve library yields a base recovery id in 0..=3 (point parity and
//! index). On the wire that id is offset by 4 when the signing key is
//! serialized compressed, and by a further 27 inherited from the legacy
//! compact-signature encoding, giving a single byte in 27..=34. The signer
//! emits the offset form; the verifier consumes the base form, so decoding
//! happens on the caller side before recovery.

use secp256k1::ecdsa::RecoveryId;

/// Offset marking a signature made with a compressed public key.
pub const COMPRESSED_FLAG: u8 = 4;
/// Base offset of the legacy compact-signature encoding.
pub const COMPACT_OFFSET: u8 = 27;

/// Packs a base recovery id into the wire byte. This signer always
/// serializes compressed keys, so the result is in 31..=34.
pub fn encode_recovery_id(recovery_id: RecoveryId) -> u8 {
    recovery_id as u8 + COMPRESSED_FLAG + COMPACT_OFFSET
}

/// Undoes [`encode_recovery_id`]: subtracts the compact offset, then the
/// compression flag when present. Returns `None` for bytes that do not
/// carry a valid recovery id. Uncompressed-form bytes (27..=30) are
/// accepted for compatibility with legacy signers.
pub fn decode_recovery_id(encoded: u8) -> Option<RecoveryId> {
    let base = encoded.checked_sub(COMPACT_OFFSET)?;
    let base = if base >= COMPRESSED_FLAG {
        base - COMPRESSED_FLAG
    } else {
        base
    };
    RecoveryId::try_from(i32::from(base)).ok()
}

/// Strict wire-format decode: only the compressed range 31..=34 is
/// accepted. Wire signatures always carry the compressed flag, so
/// [`crate::verify_any`] rejects bytes without it.
pub fn decode_compressed_recovery_id(encoded: u8) -> Option<RecoveryId> {
    let base = encoded.checked_sub(COMPACT_OFFSET + COMPRESSED_FLAG)?;
    RecoveryId::try_from(i32::from(base)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_covers_compressed_range() {
        let encoded: Vec<u8> = [
            RecoveryId::Zero,
            RecoveryId::One,
            RecoveryId::Two,
            RecoveryId::Three,
        ]
        .into_iter()
        .map(encode_recovery_id)
        .collect();
        assert_eq!(encoded, vec![31, 32, 33, 34]);
    }

    #[test]
    fn decode_round_trips_encode() {
        for id in [
            RecoveryId::Zero,
            RecoveryId::One,
            RecoveryId::Two,
            RecoveryId::Three,
        ] {
            assert_eq!(decode_recovery_id(encode_recovery_id(id)), Some(id));
        }
    }

    #[test]
    fn decode_accepts_uncompressed_range() {
        assert_eq!(decode_recovery_id(27), Some(RecoveryId::Zero));
        assert_eq!(decode_recovery_id(30), Some(RecoveryId::Three));
    }

    #[test]
    fn strict_decode_requires_the_compressed_flag() {
        assert_eq!(decode_compressed_recovery_id(31), Some(RecoveryId::Zero));
        assert_eq!(decode_compressed_recovery_id(34), Some(RecoveryId::Three));
        for encoded in (0..=30).chain(35..=255u8) {
            assert_eq!(decode_compressed_recovery_id(encoded), None, "byte {encoded}");
        }
    }

    #[test]
    fn decode_rejects_out_of_range_bytes() {
        for encoded in (0..27).chain(35..=255u8) {
            assert_eq!(decode_recovery_id(encoded), None, "byte {encoded}");
        }
    }
}
