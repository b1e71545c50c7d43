//! Recoverable verifier and signer-set matching.

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, Secp256k1, Verification};

use crate::error::VerifyError;
use crate::recovery_id::decode_compressed_recovery_id;

/// Hex length of a wire signature: one recovery byte plus 64 compact bytes.
const SIGNATURE_HEX_LEN: usize = 130;

/// Recovers and checks the public key behind a compact signature.
///
/// `recovery_id` is the *base* id in 0..=3; wire bytes must be decoded
/// with [`crate::decode_recovery_id`] first. Runs four independent gates,
/// short-circuiting on the first failure: parse the compact bytes, recover
/// the candidate key, convert to a standard signature, verify it against
/// the recovered key. Recovery always yields *some* point, so the final
/// verification gate is what rejects corrupted signatures that still
/// recover cleanly. On success returns the key in compressed form.
pub fn verify_recoverable_signature<C: Verification>(
    context: &Secp256k1<C>,
    digest: &[u8; 32],
    signature: &[u8; 64],
    recovery_id: u8,
) -> Result<[u8; 33], VerifyError> {
    let recovery_id =
        RecoveryId::try_from(i32::from(recovery_id)).map_err(VerifyError::Parse)?;
    let signature =
        RecoverableSignature::from_compact(signature, recovery_id).map_err(VerifyError::Parse)?;

    let message = Message::from_digest(*digest);
    let pubkey = context
        .recover_ecdsa(&message, &signature)
        .map_err(VerifyError::Recovery)?;

    context
        .verify_ecdsa(&message, &signature.to_standard(), &pubkey)
        .map_err(VerifyError::Verification)?;

    Ok(pubkey.serialize())
}

/// Checks whether the hex wire signature over `digest` was made by any of
/// the given compressed public keys.
///
/// The wire format is the offset recovery byte followed by the 64 compact
/// bytes, hex encoded. Inputs of the wrong length, with a recovery byte
/// outside the compressed range 31..=34, or failing any verification gate
/// all answer `false`; only undecodable hex is reported as an error.
pub fn verify_any<C: Verification>(
    context: &Secp256k1<C>,
    pub_keys: &[&[u8]],
    signature: &str,
    digest: &[u8; 32],
) -> Result<bool, VerifyError> {
    if signature.len() != SIGNATURE_HEX_LEN {
        return Ok(false);
    }

    let mut raw = [0u8; 65];
    faster_hex::hex_decode(signature.as_bytes(), &mut raw)
        .map_err(|_| VerifyError::InvalidHex)?;

    let recovery_id = match decode_compressed_recovery_id(raw[0]) {
        Some(id) => id,
        None => return Ok(false),
    };
    let mut compact = [0u8; 64];
    compact.copy_from_slice(&raw[1..]);

    match verify_recoverable_signature(context, digest, &compact, recovery_id as u8) {
        Ok(recovered) => Ok(pub_keys.iter().any(|key| *key == &recovered[..])),
        Err(_) => Ok(false),
    }
}
