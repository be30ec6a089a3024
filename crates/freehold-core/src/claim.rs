//! Claim records and authorization entries
//!
//! A claim associates one region with an owner and the set of actors allowed
//! to modify blocks there. Claims are owned and mutated exclusively by the
//! registry; the authorization layer only reads them.

use crate::geometry::RegionKey;
use crate::identifiers::ActorId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One record in a claim's authorized-actor set
///
/// Equality and hashing delegate to the actor id, so the set holds at most
/// one entry per actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorizationEntry {
    /// The actor this entry authorizes
    pub actor: ActorId,
}

impl AuthorizationEntry {
    /// Create an entry authorizing `actor`
    pub fn new(actor: ActorId) -> Self {
        Self { actor }
    }
}

/// A registered ownership record over one region
///
/// At most one claim covers a region at any time; the registry enforces that
/// invariant. Whether the owner appears in its own allowed set is a registry
/// decision — membership tests here are literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// The region this claim covers
    pub region: RegionKey,
    /// The actor holding the claim
    pub owner: ActorId,
    allowed: HashSet<AuthorizationEntry>,
}

impl Claim {
    /// Create a claim over `region` held by `owner`, with an empty allowed set
    pub fn new(region: RegionKey, owner: ActorId) -> Self {
        Self {
            region,
            owner,
            allowed: HashSet::new(),
        }
    }

    /// Whether `actor` appears in the allowed set
    pub fn permits(&self, actor: ActorId) -> bool {
        self.allowed.contains(&AuthorizationEntry::new(actor))
    }

    /// Add `actor` to the allowed set
    ///
    /// Returns `true` if the actor was newly added.
    pub fn allow(&mut self, actor: ActorId) -> bool {
        self.allowed.insert(AuthorizationEntry::new(actor))
    }

    /// Remove `actor` from the allowed set
    ///
    /// Returns `true` if the actor was present.
    pub fn disallow(&mut self, actor: ActorId) -> bool {
        self.allowed.remove(&AuthorizationEntry::new(actor))
    }

    /// The allowed set as plain actor ids
    pub fn allowed_actors(&self) -> HashSet<ActorId> {
        self.allowed.iter().map(|entry| entry.actor).collect()
    }
}
