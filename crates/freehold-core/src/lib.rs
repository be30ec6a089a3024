//! Freehold Core - claim domain foundation
//!
//! This crate provides the foundational types for claim-based access control
//! over a partitioned world: actor identity, positions and region keys, the
//! claim record itself, and the read-side registry interface consumed by the
//! authorization layer.
//!
//! Everything here is pure and synchronous. Registry implementations live in
//! `freehold-store`; the modification decision lives in
//! `freehold-authorization`. This crate holds only types, the registry
//! interface, and the unified error type shared by both.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Unified error handling
pub mod errors;

/// Position and region key geometry
pub mod geometry;

/// Actor identifiers
pub mod identifiers;

/// Claim records and authorization entries
pub mod claim;

/// Read-side claim registry interface
pub mod registry;

pub use claim::{AuthorizationEntry, Claim};
pub use errors::{FreeholdError, FreeholdResult};
pub use geometry::{BlockPos, RegionKey, MAX_HORIZONTAL, MAX_Y, MIN_Y, REGION_SIZE};
pub use identifiers::ActorId;
pub use registry::ClaimRegistry;
