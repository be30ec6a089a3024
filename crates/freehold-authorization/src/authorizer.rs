//! Claim-based authorization decision
//!
//! Converts a raw "may modify" base decision plus a (position, actor) pair
//! into a final decision, applying claim restriction only when necessary.
//! The registry is injected at construction; the authorizer holds no state of
//! its own and never mutates or caches claim state.

use freehold_core::{ActorId, BlockPos, ClaimRegistry, FreeholdResult, RegionKey};
use std::sync::Arc;
use tracing::{debug, warn};

/// Decides whether an actor may modify a claimed region
pub struct ClaimAuthorizer {
    registry: Arc<dyn ClaimRegistry>,
}

impl ClaimAuthorizer {
    /// Create an authorizer consulting `registry`
    pub fn new(registry: Arc<dyn ClaimRegistry>) -> Self {
        Self { registry }
    }

    /// Apply claim restriction to the host's base decision
    ///
    /// A denied base decision passes through untouched — claims can only
    /// restrict, never grant. Otherwise the region containing `pos` is looked
    /// up once: unclaimed regions impose no restriction, and a claimed region
    /// permits exactly the actors in its allowed set.
    ///
    /// Errors (an unreachable registry, a position outside world limits) are
    /// propagated so the caller decides how to surface them; see
    /// [`authorize_or_deny`](Self::authorize_or_deny) for the fail-closed
    /// form.
    pub fn authorize(
        &self,
        base_decision: bool,
        pos: BlockPos,
        actor: ActorId,
    ) -> FreeholdResult<bool> {
        if !base_decision {
            return Ok(false);
        }
        let region = RegionKey::containing(pos)?;
        match self.registry.claim_at(region)? {
            None => Ok(base_decision),
            Some(claim) => {
                let permitted = claim.permits(actor);
                if permitted {
                    debug!(%region, %actor, "modification permitted in claimed region");
                } else {
                    debug!(
                        %region,
                        %actor,
                        owner = %claim.owner,
                        "modification denied, actor not in allowed set"
                    );
                }
                Ok(permitted)
            }
        }
    }

    /// Fail-closed form of [`authorize`](Self::authorize)
    ///
    /// Any failure denies the action: when claim status cannot be determined,
    /// silently allowing would bypass protection. The failure is surfaced on
    /// the diagnostics path instead of panicking the caller's thread.
    pub fn authorize_or_deny(&self, base_decision: bool, pos: BlockPos, actor: ActorId) -> bool {
        match self.authorize(base_decision, pos, actor) {
            Ok(allowed) => allowed,
            Err(err) => {
                warn!(%pos, %actor, error = %err, "claim check failed, denying modification");
                false
            }
        }
    }
}
