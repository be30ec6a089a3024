//! In-memory claim registry
//!
//! The registry enforces the structural invariants the rest of the system
//! assumes: at most one claim per region, management restricted to the claim
//! owner, and an owner that always appears in its own allowed set. Reads
//! return cloned snapshots, so a caller holding a `Claim` never sees later
//! mutations through it.

use crate::config::ClaimsConfig;
use freehold_core::{
    ActorId, Claim, ClaimRegistry, FreeholdError, FreeholdResult, RegionKey,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Claim registry backed by an in-process map
pub struct MemoryClaimRegistry {
    config: ClaimsConfig,
    claims: RwLock<HashMap<RegionKey, Claim>>,
}

impl MemoryClaimRegistry {
    /// Create an empty registry with default configuration
    pub fn new() -> Self {
        Self::with_config(ClaimsConfig::default())
    }

    /// Create an empty registry with the given configuration
    pub fn with_config(config: ClaimsConfig) -> Self {
        Self {
            config,
            claims: RwLock::new(HashMap::new()),
        }
    }

    /// Stake a new claim over `region` for `owner`
    ///
    /// The owner is seeded into the claim's allowed set, so claim ownership
    /// implies authorization for every consumer of `ClaimRegistry`. Fails if
    /// the region is already claimed or the owner is at its claim limit.
    pub fn stake(&self, region: RegionKey, owner: ActorId) -> FreeholdResult<()> {
        let mut claims = self.claims.write();
        if claims.contains_key(&region) {
            warn!(%region, %owner, "stake rejected, region already claimed");
            return Err(FreeholdError::claim_conflict(format!(
                "{region} is already claimed"
            )));
        }
        if let Some(limit) = self.config.max_claims_per_actor {
            let held = claims.values().filter(|claim| claim.owner == owner).count();
            if held >= limit {
                warn!(%owner, held, limit, "stake rejected, claim limit reached");
                return Err(FreeholdError::claim_limit(format!(
                    "{owner} already holds {held} of {limit} claims"
                )));
            }
        }
        let mut claim = Claim::new(region, owner);
        claim.allow(owner);
        claims.insert(region, claim);
        debug!(%region, %owner, "claim staked");
        Ok(())
    }

    /// Release the claim over `region`
    ///
    /// Only the claim owner may release it.
    pub fn release(&self, region: RegionKey, actor: ActorId) -> FreeholdResult<()> {
        let mut claims = self.claims.write();
        let claim = claims
            .get(&region)
            .ok_or_else(|| FreeholdError::not_found(format!("no claim at {region}")))?;
        if claim.owner != actor {
            warn!(%region, %actor, owner = %claim.owner, "release rejected, not the owner");
            return Err(FreeholdError::not_claim_owner(format!(
                "{actor} does not own the claim at {region}"
            )));
        }
        claims.remove(&region);
        debug!(%region, %actor, "claim released");
        Ok(())
    }

    /// Transfer the claim over `region` from `from` to `to`
    ///
    /// The new owner replaces the old one in the allowed set; other entries
    /// survive the handoff.
    pub fn transfer(&self, region: RegionKey, from: ActorId, to: ActorId) -> FreeholdResult<()> {
        let mut claims = self.claims.write();
        let claim = claims
            .get_mut(&region)
            .ok_or_else(|| FreeholdError::not_found(format!("no claim at {region}")))?;
        if claim.owner != from {
            warn!(%region, %from, owner = %claim.owner, "transfer rejected, not the owner");
            return Err(FreeholdError::not_claim_owner(format!(
                "{from} does not own the claim at {region}"
            )));
        }
        claim.owner = to;
        claim.allow(to);
        claim.disallow(from);
        debug!(%region, %from, %to, "claim transferred");
        Ok(())
    }

    /// Add `actor` to the allowed set of the claim over `region`
    ///
    /// Only the claim owner may edit the set. Returns `true` if the actor was
    /// newly added.
    pub fn allow(&self, region: RegionKey, owner: ActorId, actor: ActorId) -> FreeholdResult<bool> {
        let mut claims = self.claims.write();
        let claim = claims
            .get_mut(&region)
            .ok_or_else(|| FreeholdError::not_found(format!("no claim at {region}")))?;
        if claim.owner != owner {
            return Err(FreeholdError::not_claim_owner(format!(
                "{owner} does not own the claim at {region}"
            )));
        }
        let added = claim.allow(actor);
        if added {
            debug!(%region, %actor, "actor allowed");
        }
        Ok(added)
    }

    /// Remove `actor` from the allowed set of the claim over `region`
    ///
    /// Only the claim owner may edit the set, and the owner's own entry
    /// cannot be removed — release or transfer the claim instead. Returns
    /// `true` if the actor was present.
    pub fn disallow(
        &self,
        region: RegionKey,
        owner: ActorId,
        actor: ActorId,
    ) -> FreeholdResult<bool> {
        let mut claims = self.claims.write();
        let claim = claims
            .get_mut(&region)
            .ok_or_else(|| FreeholdError::not_found(format!("no claim at {region}")))?;
        if claim.owner != owner {
            return Err(FreeholdError::not_claim_owner(format!(
                "{owner} does not own the claim at {region}"
            )));
        }
        if actor == claim.owner {
            return Err(FreeholdError::invalid(
                "the owner cannot be removed from its own claim",
            ));
        }
        let removed = claim.disallow(actor);
        if removed {
            debug!(%region, %actor, "actor disallowed");
        }
        Ok(removed)
    }

    /// All claims currently held by `owner`
    pub fn claims_of(&self, owner: ActorId) -> Vec<Claim> {
        let claims = self.claims.read();
        let mut held: Vec<Claim> = claims
            .values()
            .filter(|claim| claim.owner == owner)
            .cloned()
            .collect();
        held.sort_by_key(|claim| claim.region);
        held
    }

    /// Number of claims in the registry
    pub fn len(&self) -> usize {
        self.claims.read().len()
    }

    /// Whether the registry holds no claims
    pub fn is_empty(&self) -> bool {
        self.claims.read().is_empty()
    }
}

impl Default for MemoryClaimRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRegistry for MemoryClaimRegistry {
    fn claim_at(&self, region: RegionKey) -> FreeholdResult<Option<Claim>> {
        Ok(self.claims.read().get(&region).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn actor(n: u8) -> ActorId {
        ActorId::from_bytes([n; 16])
    }

    #[test]
    fn stake_seeds_owner_into_allowed_set() {
        let registry = MemoryClaimRegistry::new();
        let region = RegionKey::new(0, 0);
        registry.stake(region, actor(1)).unwrap();

        let claim = registry.claim_at(region).unwrap().unwrap();
        assert_eq!(claim.owner, actor(1));
        assert!(claim.permits(actor(1)));
        assert!(registry.allowed_actors(region).unwrap().contains(&actor(1)));
    }

    #[test]
    fn regions_hold_at_most_one_claim() {
        let registry = MemoryClaimRegistry::new();
        let region = RegionKey::new(3, 3);
        registry.stake(region, actor(1)).unwrap();
        assert_matches!(
            registry.stake(region, actor(2)),
            Err(FreeholdError::ClaimConflict { .. })
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn claim_limit_is_enforced() {
        let registry = MemoryClaimRegistry::with_config(ClaimsConfig {
            max_claims_per_actor: Some(2),
        });
        registry.stake(RegionKey::new(0, 0), actor(1)).unwrap();
        registry.stake(RegionKey::new(0, 1), actor(1)).unwrap();
        assert_matches!(
            registry.stake(RegionKey::new(0, 2), actor(1)),
            Err(FreeholdError::ClaimLimit { .. })
        );
        // Other actors are unaffected by that actor's limit.
        registry.stake(RegionKey::new(0, 2), actor(2)).unwrap();
    }

    #[test]
    fn release_is_owner_only() {
        let registry = MemoryClaimRegistry::new();
        let region = RegionKey::new(-2, 5);
        registry.stake(region, actor(1)).unwrap();

        assert_matches!(
            registry.release(region, actor(2)),
            Err(FreeholdError::NotClaimOwner { .. })
        );
        registry.release(region, actor(1)).unwrap();
        assert!(registry.claim_at(region).unwrap().is_none());
        assert_matches!(
            registry.release(region, actor(1)),
            Err(FreeholdError::NotFound { .. })
        );
    }

    #[test]
    fn allow_and_disallow_are_owner_only() {
        let registry = MemoryClaimRegistry::new();
        let region = RegionKey::new(1, 1);
        registry.stake(region, actor(1)).unwrap();

        assert_matches!(
            registry.allow(region, actor(2), actor(3)),
            Err(FreeholdError::NotClaimOwner { .. })
        );
        assert!(registry.allow(region, actor(1), actor(3)).unwrap());
        assert!(!registry.allow(region, actor(1), actor(3)).unwrap());
        assert!(registry.claim_at(region).unwrap().unwrap().permits(actor(3)));

        assert!(registry.disallow(region, actor(1), actor(3)).unwrap());
        assert!(!registry.claim_at(region).unwrap().unwrap().permits(actor(3)));
    }

    #[test]
    fn owner_entry_cannot_be_disallowed() {
        let registry = MemoryClaimRegistry::new();
        let region = RegionKey::new(4, 4);
        registry.stake(region, actor(1)).unwrap();
        assert_matches!(
            registry.disallow(region, actor(1), actor(1)),
            Err(FreeholdError::Invalid { .. })
        );
        assert!(registry.claim_at(region).unwrap().unwrap().permits(actor(1)));
    }

    #[test]
    fn transfer_hands_the_claim_over() {
        let registry = MemoryClaimRegistry::new();
        let region = RegionKey::new(7, -7);
        registry.stake(region, actor(1)).unwrap();
        registry.allow(region, actor(1), actor(3)).unwrap();

        registry.transfer(region, actor(1), actor(2)).unwrap();
        let claim = registry.claim_at(region).unwrap().unwrap();
        assert_eq!(claim.owner, actor(2));
        assert!(claim.permits(actor(2)));
        assert!(!claim.permits(actor(1)));
        // Entries other than the old owner's survive the handoff.
        assert!(claim.permits(actor(3)));

        assert_matches!(
            registry.transfer(region, actor(1), actor(4)),
            Err(FreeholdError::NotClaimOwner { .. })
        );
    }

    #[test]
    fn claims_of_lists_only_that_owner() {
        let registry = MemoryClaimRegistry::new();
        registry.stake(RegionKey::new(0, 0), actor(1)).unwrap();
        registry.stake(RegionKey::new(0, 1), actor(2)).unwrap();
        registry.stake(RegionKey::new(1, 0), actor(1)).unwrap();

        let held = registry.claims_of(actor(1));
        assert_eq!(held.len(), 2);
        assert!(held.iter().all(|claim| claim.owner == actor(1)));
        assert!(registry.claims_of(actor(9)).is_empty());
    }

    #[test]
    fn claim_at_returns_a_snapshot() {
        let registry = MemoryClaimRegistry::new();
        let region = RegionKey::new(6, 6);
        registry.stake(region, actor(1)).unwrap();

        let mut snapshot = registry.claim_at(region).unwrap().unwrap();
        snapshot.allow(actor(9));

        // Mutating the snapshot does not touch registry state.
        assert!(!registry.claim_at(region).unwrap().unwrap().permits(actor(9)));
    }
}
