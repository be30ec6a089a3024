//! Claims configuration
//!
//! Registry-side policy knobs, deserialized from TOML by the host's config
//! loader.

use freehold_core::{FreeholdError, FreeholdResult};
use serde::{Deserialize, Serialize};

/// Policy configuration for a claim registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimsConfig {
    /// Maximum number of claims a single actor may hold; `None` is unlimited
    pub max_claims_per_actor: Option<usize>,
}

impl ClaimsConfig {
    /// Parse a configuration from a TOML document
    pub fn from_toml_str(raw: &str) -> FreeholdResult<Self> {
        toml::from_str(raw)
            .map_err(|err| FreeholdError::invalid(format!("claims config: {err}")))
    }
}
