use secp256k1::Error as SecpError;
use thiserror::Error;

/// Failures of the canonical signer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignError {
    /// The private key is not a valid scalar for the curve.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(SecpError),
    /// No nonce tweak produced a canonical signature within the retry
    /// ceiling. Each attempt succeeds with probability ~0.5, so hitting
    /// this means the curve backend is broken.
    #[error("no canonical signature found after {attempts} attempts")]
    ExhaustedNonceTweaks {
        /// How many nonce tweaks were tried.
        attempts: u64,
    },
}

/// Failures of the recoverable verifier, one variant per gate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    /// The wire signature is not decodable as hex.
    #[error("invalid signature hex")]
    InvalidHex,
    /// The recovery id is outside 0..=3 or the compact bytes do not
    /// encode a valid (r, s) pair.
    #[error("malformed compact signature: {0}")]
    Parse(SecpError),
    /// Public key recovery did not yield a valid curve point.
    #[error("public key recovery failed: {0}")]
    Recovery(SecpError),
    /// Recovery produced a point, but the signature does not validate
    /// against it.
    #[error("recovered key does not validate the signature: {0}")]
    Verification(SecpError),
}
