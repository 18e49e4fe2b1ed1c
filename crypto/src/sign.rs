//! Recoverable signing, used by miners and tests to produce claim signatures.

use crate::recover::{address_of, EcdsaSig};
use cinder_types::{Address, Hash256};
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};

/// Sign a 32-byte digest, returning a `(v, r, s)` signature with `v` in the
/// conventional 27/28 encoding.
pub fn sign_recoverable(message_hash: &Hash256, secret: &SecretKey) -> EcdsaSig {
    let secp = Secp256k1::new();
    let message = Message::from_digest(*message_hash.as_bytes());
    let signature = secp.sign_ecdsa_recoverable(&message, secret);
    let (recid, compact) = signature.serialize_compact();

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&compact[..32]);
    s.copy_from_slice(&compact[32..]);
    EcdsaSig {
        v: recid.to_i32() as u8 + 27,
        r,
        s,
    }
}

/// The claim address belonging to a secret key.
pub fn address_from_secret(secret: &SecretKey) -> Address {
    let secp = Secp256k1::new();
    address_of(&PublicKey::from_secret_key(&secp, secret))
}
