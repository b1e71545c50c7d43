//! Canonical recoverable secp256k1 signatures for Steem-style chains.
//!
//! Consensus rules on Graphene-derived chains only accept signatures in
//! canonical form and carry the recovery information in a single offset
//! byte next to the 64 compact signature bytes. The curve math lives in
//! [`secp256k1`]; this crate layers the two protocol conventions on top:
//!
//! - [`sign_transaction`] resamples the signing nonce until the compact
//!   signature passes [`is_canonical`], then packs the recovery id with
//!   the legacy `+4`/`+27` offsets ([`encode_recovery_id`]).
//! - [`verify_recoverable_signature`] recovers the public key behind a
//!   compact signature and checks it actually validates the signature;
//!   [`verify_any`] wraps it for the hex wire format and matches the
//!   recovered key against a set of authorized keys.
//!
//! All operations are stateless and take a caller-owned
//! [`secp256k1::Secp256k1`] context by reference; construct it once and
//! share it across threads.

mod canonical;
mod error;
mod recovery_id;
mod sign;
mod verify;

pub use self::canonical::is_canonical;
pub use self::error::{SignError, VerifyError};
pub use self::recovery_id::{
    decode_compressed_recovery_id, decode_recovery_id, encode_recovery_id, COMPACT_OFFSET,
    COMPRESSED_FLAG,
};
pub use self::sign::sign_transaction;
pub use self::verify::{verify_any, verify_recoverable_signature};

pub use secp256k1;
