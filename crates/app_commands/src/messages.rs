//! User-facing command feedback

use domain_client::Client;
use domain_insurance::{Claim, InsurancePlan};

pub const MESSAGE_INVALID_CLIENT_DISPLAYED_INDEX: &str = "The client index provided is invalid";

/// Feedback after a plan is attached
pub fn add_insurance_plan_success(plan: &InsurancePlan, client: &Client) -> String {
    format!("Added Insurance Plan: {}\n{}", plan, client)
}

/// Feedback after a plan is detached
pub fn delete_insurance_plan_success(plan: &InsurancePlan, client: &Client) -> String {
    format!("Deleted Insurance Plan: {}\n{}", plan, client)
}

/// Feedback after a claim is filed
pub fn add_claim_success(claim: &Claim, plan: &InsurancePlan, client: &Client) -> String {
    format!("Added Claim {} to Insurance Plan: {}\n{}", claim, plan, client)
}
