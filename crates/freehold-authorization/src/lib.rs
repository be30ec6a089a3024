//! Freehold Authorization - the modification decision
//!
//! Answers one question: may this actor modify a block at this position? The
//! host computes a base decision from its own rules (world border, game mode,
//! build permission) and passes it in; the claim check may only downgrade an
//! allowed action to denied, never upgrade a denied one.
//!
//! Two integration styles are offered. `ClaimAuthorizer` is a plain
//! predicate the host calls directly; `PermissionPipeline` is a registered
//! chain of checks for hosts that compose their permission rules as a list.
//! Either way the decision is a stateless, synchronous read — no caching, no
//! background work, every call observes current registry state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Claim-based authorization decision
pub mod authorizer;

/// Host permission pipeline
pub mod pipeline;

pub use authorizer::ClaimAuthorizer;
pub use pipeline::{ModificationRequest, PermissionCheck, PermissionPipeline, PipelineVerdict};
