//! Proof-of-work solution verification.
//!
//! Ordered as a sequence of cheap-to-expensive gates: message-hash equality
//! first, then signature recovery, then the digest/target comparison.

use crate::error::EngineError;
use cinder_crypto::{recover_address, signed_message_hash, solution_digest, EcdsaSig};
use cinder_types::{Address, Hash256, U256};

/// Strict verification used in the settlement path.
///
/// The claimant here is always the calling identity, never a parameter a
/// third party could substitute after observing a valid digest.
pub(crate) fn verify_or_fail(
    challenge: &Hash256,
    target: U256,
    supplied_hash: &Hash256,
    sig: &EcdsaSig,
    claimant: &Address,
) -> Result<(), EngineError> {
    let expected = signed_message_hash(claimant, challenge);
    if expected != *supplied_hash {
        return Err(EngineError::IncorrectMessage);
    }

    let recovered = recover_address(supplied_hash, sig)?;

    let digest = solution_digest(&recovered, claimant, challenge);
    if U256::from_big_endian(digest.as_bytes()) > target {
        return Err(EngineError::HighHash);
    }
    Ok(())
}

/// Pure, side-effect-free verification against caller-supplied parameters.
///
/// Miners use this to self-check a solution before submission; it returns a
/// plain boolean so probing never raises failure semantics.
pub fn verify_solution(
    challenge: &Hash256,
    test_target: U256,
    supplied_hash: &Hash256,
    sig: &EcdsaSig,
    claimant: &Address,
) -> bool {
    verify_or_fail(challenge, test_target, supplied_hash, sig, claimant).is_ok()
}
