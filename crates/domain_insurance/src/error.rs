//! Insurance domain errors

use thiserror::Error;

/// Message reported for any id outside the plan catalog
///
/// The wording does not depend on the catalog contents, so every caller
/// reports an unknown id the same way.
pub const INVALID_PLAN_ID_MESSAGE: &str = "Invalid plan id: please enter a valid plan id";

/// Errors that can occur in the insurance domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InsuranceError {
    /// Plan id is not a key of the catalog
    #[error("{}", INVALID_PLAN_ID_MESSAGE)]
    InvalidPlanId(i32),

    /// Plan name does not match any catalog entry
    #[error("Unknown insurance plan: {0}")]
    InvalidPlanName(String),

    /// The plan is already attached to the client
    #[error("This client already has the {0}")]
    DuplicatePlan(String),

    /// The plan is not attached to the client
    #[error("This client does not have the {0}")]
    PlanNotFound(String),

    /// Claim reference or amount is malformed
    #[error("Invalid claim: {0}")]
    InvalidClaim(String),
}

impl InsuranceError {
    pub fn invalid_claim(message: impl Into<String>) -> Self {
        InsuranceError::InvalidClaim(message.into())
    }
}
