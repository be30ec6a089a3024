//! Host permission pipeline
//!
//! Hosts that compose their permission rules as a list register checks here
//! instead of calling the authorizer directly. Checks run in registration
//! order; each receives the decision so far and the pipeline ANDs its answer
//! into the running decision, so a check can narrow the decision but never
//! re-grant what an earlier check denied. The first denial ends evaluation
//! and is attributed to the check by name.

use crate::authorizer::ClaimAuthorizer;
use freehold_core::{ActorId, BlockPos, FreeholdResult};
use tracing::{debug, warn};

/// One attempted world modification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModificationRequest {
    /// Position the actor wants to modify
    pub pos: BlockPos,
    /// The actor requesting the modification
    pub actor: ActorId,
}

impl ModificationRequest {
    /// Create a request for `actor` at `pos`
    pub fn new(pos: BlockPos, actor: ActorId) -> Self {
        Self { pos, actor }
    }
}

/// One rule in the host's permission pipeline
pub trait PermissionCheck: Send + Sync {
    /// Name used to attribute denials
    fn name(&self) -> &str;

    /// Evaluate this rule given the decision reached so far
    ///
    /// `prior` is the conjunction of every earlier check. Implementations may
    /// only narrow it; the pipeline enforces this by ANDing the returned
    /// value into the running decision.
    fn check(&self, request: &ModificationRequest, prior: bool) -> FreeholdResult<bool>;
}

/// Outcome of a pipeline evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineVerdict {
    /// Final decision
    pub allowed: bool,
    /// Name of the check that denied, when one did
    pub denied_by: Option<String>,
}

impl PipelineVerdict {
    fn allowed() -> Self {
        Self {
            allowed: true,
            denied_by: None,
        }
    }

    fn denied_by(name: &str) -> Self {
        Self {
            allowed: false,
            denied_by: Some(name.to_string()),
        }
    }
}

/// Ordered chain of permission checks
#[derive(Default)]
pub struct PermissionPipeline {
    checks: Vec<Box<dyn PermissionCheck>>,
}

impl PermissionPipeline {
    /// Create an empty pipeline
    ///
    /// An empty pipeline allows everything; the host's base rules are
    /// expected to be registered ahead of the claim check.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Register a check at the end of the chain
    pub fn with_check(mut self, check: Box<dyn PermissionCheck>) -> Self {
        self.checks.push(check);
        self
    }

    /// Register a check at the end of the chain, in place
    pub fn push(&mut self, check: Box<dyn PermissionCheck>) {
        self.checks.push(check);
    }

    /// Evaluate the chain for one modification request
    pub fn evaluate(&self, request: &ModificationRequest) -> FreeholdResult<PipelineVerdict> {
        let mut decision = true;
        for check in &self.checks {
            decision = decision && check.check(request, decision)?;
            if !decision {
                debug!(
                    check = check.name(),
                    actor = %request.actor,
                    pos = %request.pos,
                    "modification denied by pipeline check"
                );
                return Ok(PipelineVerdict::denied_by(check.name()));
            }
        }
        Ok(PipelineVerdict::allowed())
    }

    /// Fail-closed form of [`evaluate`](Self::evaluate)
    ///
    /// A check that cannot answer denies the request rather than letting it
    /// through unexamined.
    pub fn evaluate_or_deny(&self, request: &ModificationRequest) -> PipelineVerdict {
        match self.evaluate(request) {
            Ok(verdict) => verdict,
            Err(err) => {
                warn!(
                    actor = %request.actor,
                    pos = %request.pos,
                    error = %err,
                    "pipeline check failed, denying modification"
                );
                PipelineVerdict {
                    allowed: false,
                    denied_by: None,
                }
            }
        }
    }
}

impl PermissionCheck for ClaimAuthorizer {
    fn name(&self) -> &str {
        "claims"
    }

    fn check(&self, request: &ModificationRequest, prior: bool) -> FreeholdResult<bool> {
        self.authorize(prior, request.pos, request.actor)
    }
}
