//! Authorization gate for administrative setters.

use cinder_types::Address;

/// The external authorization capability.
///
/// The engine consults this for every administrative call; it never stores
/// or manages identities itself.
pub trait Authorizer {
    fn is_authorized(&self, who: &Address) -> bool;
}

/// Single designated administrative identity.
#[derive(Clone, Debug)]
pub struct SingleOwner {
    owner: Address,
}

impl SingleOwner {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> &Address {
        &self.owner
    }
}

impl Authorizer for SingleOwner {
    fn is_authorized(&self, who: &Address) -> bool {
        *who == self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_owner_is_authorized() {
        let owner = Address::new([1u8; 20]);
        let auth = SingleOwner::new(owner);
        assert!(auth.is_authorized(&owner));
        assert!(!auth.is_authorized(&Address::new([2u8; 20])));
        assert!(!auth.is_authorized(&Address::ZERO));
    }
}
