//! Canonical signer.

use secp256k1::{Message, Secp256k1, SecretKey, Signing};

use crate::canonical::is_canonical;
use crate::error::SignError;
use crate::recovery_id::encode_recovery_id;

/// Retry ceiling for the canonical-form search. Each nonce tweak yields a
/// canonical signature with probability ~0.5, so the ceiling is
/// unreachable for a working curve backend.
const MAX_NONCE_TWEAKS: u64 = 1000;

/// Signs `digest` with `privkey`, resampling the nonce until the compact
/// signature is canonical. Returns the 64 compact bytes and the offset
/// recovery byte (31..=34, see [`crate::encode_recovery_id`]).
///
/// Raw ECDSA does not guarantee the canonical form consensus requires, so
/// the signer feeds an incrementing counter as auxiliary nonce data and
/// keeps the first canonical candidate. The counter starts at 1; each
/// value produces an independent deterministic candidate, which makes
/// repeated calls with the same inputs return the same signature.
pub fn sign_transaction<C: Signing>(
    context: &Secp256k1<C>,
    digest: &[u8; 32],
    privkey: &[u8; 32],
) -> Result<([u8; 64], u8), SignError> {
    let seckey = SecretKey::from_byte_array(privkey).map_err(SignError::InvalidPrivateKey)?;
    let message = Message::from_digest(*digest);

    let mut noncedata = [0u8; 32];
    for tweak in 1..=MAX_NONCE_TWEAKS {
        noncedata[..8].copy_from_slice(&tweak.to_le_bytes());
        let (recovery_id, signature) = context
            .sign_ecdsa_recoverable_with_noncedata(&message, &seckey, &noncedata)
            .serialize_compact();
        if is_canonical(&signature) {
            return Ok((signature, encode_recovery_id(recovery_id)));
        }
    }

    Err(SignError::ExhaustedNonceTweaks {
        attempts: MAX_NONCE_TWEAKS,
    })
}
