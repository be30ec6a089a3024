//! Freehold Store - claim registry implementation
//!
//! Owns claim state and its management surface: staking, releasing,
//! transferring, and editing the allowed-actor set of claims. The
//! authorization layer sees this crate only through the `ClaimRegistry`
//! interface from `freehold-core`.
//!
//! State lives behind a read-write lock and every read clones out a snapshot,
//! so concurrent queries and management operations never observe a claim
//! mid-mutation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Claims configuration
pub mod config;

/// In-memory claim registry
pub mod memory;

pub use config::ClaimsConfig;
pub use memory::MemoryClaimRegistry;
