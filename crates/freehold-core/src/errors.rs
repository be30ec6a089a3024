//! Unified error type for Freehold operations
//!
//! A single error enum shared by every crate in the workspace. Authorization
//! reads can only fail two ways (an unreachable registry, or a position that
//! does not map to a valid region); the remaining variants cover registry
//! management operations.

use serde::{Deserialize, Serialize};

/// Unified error type for all Freehold operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum FreeholdError {
    /// A position could not be converted to a valid region key
    #[error("Malformed region: {message}")]
    MalformedRegion {
        /// Error message describing the invalid position
        message: String,
    },

    /// The claim registry cannot be queried
    #[error("Registry unavailable: {message}")]
    RegistryUnavailable {
        /// Error message describing the registry failure
        message: String,
    },

    /// A claim already covers the requested region
    #[error("Claim conflict: {message}")]
    ClaimConflict {
        /// Error message describing the conflicting claim
        message: String,
    },

    /// The actor has reached its configured claim limit
    #[error("Claim limit reached: {message}")]
    ClaimLimit {
        /// Error message describing the limit
        message: String,
    },

    /// The acting actor does not own the claim it tried to manage
    #[error("Not claim owner: {message}")]
    NotClaimOwner {
        /// Error message describing the ownership mismatch
        message: String,
    },

    /// No claim exists where one was expected
    #[error("Not found: {message}")]
    NotFound {
        /// Error message describing what was not found
        message: String,
    },

    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },
}

impl FreeholdError {
    /// Create a malformed region error
    pub fn malformed_region(message: impl Into<String>) -> Self {
        Self::MalformedRegion {
            message: message.into(),
        }
    }

    /// Create a registry unavailable error
    pub fn registry_unavailable(message: impl Into<String>) -> Self {
        Self::RegistryUnavailable {
            message: message.into(),
        }
    }

    /// Create a claim conflict error
    pub fn claim_conflict(message: impl Into<String>) -> Self {
        Self::ClaimConflict {
            message: message.into(),
        }
    }

    /// Create a claim limit error
    pub fn claim_limit(message: impl Into<String>) -> Self {
        Self::ClaimLimit {
            message: message.into(),
        }
    }

    /// Create a not-claim-owner error
    pub fn not_claim_owner(message: impl Into<String>) -> Self {
        Self::NotClaimOwner {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Result type for all Freehold operations
pub type FreeholdResult<T> = Result<T, FreeholdError>;
