//! ECDSA public-key recovery.

use cinder_types::{Address, Hash256};
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, PublicKey, Secp256k1};
use thiserror::Error;

/// A recoverable ECDSA signature in `(v, r, s)` form.
///
/// `v` accepts both raw recovery ids (0/1) and the conventional 27/28
/// encoding used by wallet tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcdsaSig {
    pub v: u8,
    pub r: [u8; 32],
    pub s: [u8; 32],
}

#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("invalid recovery id {0}")]
    InvalidRecoveryId(u8),

    #[error("malformed signature: {0}")]
    Malformed(#[from] secp256k1::Error),
}

/// Recover the signer's address from a signature over `message_hash`.
///
/// Fails fast on malformed input rather than falling through to a garbage
/// address; the settlement path surfaces this as a distinct error class.
pub fn recover_address(message_hash: &Hash256, sig: &EcdsaSig) -> Result<Address, RecoveryError> {
    let rec = match sig.v {
        0 | 1 => sig.v,
        27 | 28 => sig.v - 27,
        other => return Err(RecoveryError::InvalidRecoveryId(other)),
    };
    let recid = RecoveryId::from_i32(rec as i32)?;

    let mut compact = [0u8; 64];
    compact[..32].copy_from_slice(&sig.r);
    compact[32..].copy_from_slice(&sig.s);
    let recoverable = RecoverableSignature::from_compact(&compact, recid)?;

    let secp = Secp256k1::new();
    let message = Message::from_digest(*message_hash.as_bytes());
    let public = secp.recover_ecdsa(&message, &recoverable)?;
    Ok(address_of(&public))
}

/// Derive an address from a public key: trailing 20 bytes of the Keccak-256
/// hash of the uncompressed key (without the 0x04 tag byte).
pub fn address_of(public: &PublicKey) -> Address {
    let uncompressed = public.serialize_uncompressed();
    let hash = crate::keccak::keccak256(&uncompressed[1..]);
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash[12..]);
    Address::new(bytes)
}
