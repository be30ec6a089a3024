//! Actor identifier type
//!
//! Actors are the entities that request modifications and hold claims. The
//! host assigns each one a stable UUID; this crate treats it as an opaque
//! value compared by equality only.

use hex;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable, globally unique identifier for an acting entity
///
/// The host supplies one per actor (a player UUID in a game server). The
/// authorization layer never inspects its structure; claims store these ids
/// and membership tests compare them by equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Create from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create from 16 raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Get the inner UUID
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Convert to hex string
    ///
    /// Returns the UUID as a hexadecimal string (without hyphens).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.as_bytes())
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor-{}", self.0)
    }
}

impl From<Uuid> for ActorId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ActorId> for Uuid {
    fn from(actor_id: ActorId) -> Self {
        actor_id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_bytes_equal_ids() {
        let a = ActorId::from_bytes([7u8; 16]);
        let b = ActorId::from_bytes([7u8; 16]);
        assert_eq!(a, b);
        assert_ne!(a, ActorId::from_bytes([8u8; 16]));
    }

    #[test]
    fn display_is_prefixed() {
        let actor = ActorId::from_bytes([0u8; 16]);
        assert!(actor.to_string().starts_with("actor-"));
    }

    #[test]
    fn hex_is_32_chars() {
        let actor = ActorId::from_bytes([0xab; 16]);
        assert_eq!(actor.to_hex().len(), 32);
    }
}
