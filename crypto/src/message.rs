//! Digest construction for the claim protocol.
//!
//! A claimant signs the personal-sign digest of `claimant || challenge`, and
//! the puzzle is judged on a second digest binding the recovered signer, the
//! claimant, and the challenge together. Binding the claimant into both
//! digests prevents a third party from replaying an observed solution under
//! its own identity.

use crate::keccak::keccak256_multi;
use cinder_types::{Address, Hash256};

/// Personal-sign prefix. The trailing `52` is the byte length of the signed
/// payload: a 20-byte address followed by a 32-byte challenge.
pub const SIGNED_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n52";

/// The digest a claimant is expected to have signed for the given challenge.
pub fn signed_message_hash(claimant: &Address, challenge: &Hash256) -> Hash256 {
    Hash256::new(keccak256_multi(&[
        SIGNED_MESSAGE_PREFIX.as_bytes(),
        claimant.as_bytes(),
        challenge.as_bytes(),
    ]))
}

/// The proof-of-work digest compared against the target:
/// `keccak256(recovered || claimant || challenge)`.
pub fn solution_digest(recovered: &Address, claimant: &Address, challenge: &Hash256) -> Hash256 {
    Hash256::new(keccak256_multi(&[
        recovered.as_bytes(),
        claimant.as_bytes(),
        challenge.as_bytes(),
    ]))
}
