//! Cryptographic primitives for the Cinder reward engine.
//!
//! - **Keccak-256** for challenges, signed-message digests, and solution
//!   digests
//! - **secp256k1 ECDSA** with public-key recovery for binding solutions to a
//!   signing identity
//! - Address derivation from a recovered public key (trailing 20 bytes of the
//!   Keccak-256 hash of the uncompressed key)

pub mod keccak;
pub mod message;
pub mod recover;
pub mod sign;

pub use keccak::{keccak256, keccak256_multi};
pub use message::{signed_message_hash, solution_digest, SIGNED_MESSAGE_PREFIX};
pub use recover::{recover_address, EcdsaSig, RecoveryError};
pub use sign::{address_from_secret, sign_recoverable};

// Re-exported so callers can build deterministic keys in tests and miners
// without depending on secp256k1 directly.
pub use secp256k1::SecretKey;
