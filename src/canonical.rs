//! Canonical-form predicate over compact signature bytes.
//!
//! Steem-style consensus only accepts signatures whose R and S components
//! read as positive big-endian integers with no redundant leading zero
//! byte. This predicate is the compatibility contract with every other
//! signer and verifier on the network and must not be changed.

/// Returns true when the 64-byte compact signature (R‖S, big-endian) is
/// in canonical form: the leading byte of each component is below 0x80,
/// and a zero leading byte is only allowed when the next byte has its
/// high bit set.
pub fn is_canonical(signature: &[u8; 64]) -> bool {
    signature[0] & 0x80 == 0
        && !(signature[0] == 0 && signature[1] & 0x80 == 0)
        && signature[32] & 0x80 == 0
        && !(signature[32] == 0 && signature[33] & 0x80 == 0)
}
