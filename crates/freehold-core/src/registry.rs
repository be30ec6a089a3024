//! Read-side claim registry interface
//!
//! The authorization layer consults claim state through this trait.
//! `claim_at` is the primitive: one call returns the full claim (or its
//! absence) as a single consistent snapshot, so callers never observe a claim
//! appear or its allowed set change between an "is claimed" test and an
//! "allowed actors" fetch. `is_claimed` and `allowed_actors` are derived from
//! it and kept for callers that only need one half of the answer.

use crate::claim::Claim;
use crate::errors::FreeholdResult;
use crate::geometry::RegionKey;
use crate::identifiers::ActorId;
use std::collections::HashSet;

/// Read access to current claim state
///
/// Implementations own claim storage and mutation; everything here is a pure
/// read of current state. A registry that cannot answer must return
/// `FreeholdError::RegistryUnavailable` rather than a default — callers fail
/// closed on error.
pub trait ClaimRegistry: Send + Sync {
    /// The claim covering `region`, if any
    fn claim_at(&self, region: RegionKey) -> FreeholdResult<Option<Claim>>;

    /// Whether any claim covers `region`
    fn is_claimed(&self, region: RegionKey) -> FreeholdResult<bool> {
        Ok(self.claim_at(region)?.is_some())
    }

    /// Actors allowed on `region`; empty when unclaimed
    fn allowed_actors(&self, region: RegionKey) -> FreeholdResult<HashSet<ActorId>> {
        Ok(self
            .claim_at(region)?
            .map(|claim| claim.allowed_actors())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FreeholdError;

    struct SingleClaim(Claim);

    impl ClaimRegistry for SingleClaim {
        fn claim_at(&self, region: RegionKey) -> FreeholdResult<Option<Claim>> {
            Ok(Some(self.0.clone()).filter(|claim| claim.region == region))
        }
    }

    struct Unavailable;

    impl ClaimRegistry for Unavailable {
        fn claim_at(&self, _region: RegionKey) -> FreeholdResult<Option<Claim>> {
            Err(FreeholdError::registry_unavailable("not initialized"))
        }
    }

    fn actor(n: u8) -> ActorId {
        ActorId::from_bytes([n; 16])
    }

    #[test]
    fn derived_queries_follow_claim_at() {
        let region = RegionKey::new(1, 1);
        let mut claim = Claim::new(region, actor(1));
        claim.allow(actor(2));
        let registry = SingleClaim(claim);

        assert!(registry.is_claimed(region).unwrap());
        assert!(!registry.is_claimed(RegionKey::new(9, 9)).unwrap());

        let allowed = registry.allowed_actors(region).unwrap();
        assert!(allowed.contains(&actor(2)));
        assert!(registry
            .allowed_actors(RegionKey::new(9, 9))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn derived_queries_propagate_failure() {
        let registry = Unavailable;
        assert!(registry.is_claimed(RegionKey::new(0, 0)).is_err());
        assert!(registry.allowed_actors(RegionKey::new(0, 0)).is_err());
    }
}
