//! Custom Test Assertions
//!
//! Coverage assertions that report the client's whole plan list on failure.

use core_kernel::{Currency, Money};
use domain_client::{AddressBook, Client};
use domain_insurance::{Claim, InsurancePlansManager};

/// Asserts that `client` holds the plan with catalog id `plan_id`
pub fn assert_has_plan(client: &Client, plan_id: i32) {
    assert!(
        client.insurance_plans_manager().insurance_plan(plan_id).is_some(),
        "Expected {} to hold plan {}, plans: {}",
        client.name(),
        plan_id,
        client.insurance_plans_manager()
    );
}

/// Asserts that `client` does not hold the plan with catalog id `plan_id`
pub fn assert_lacks_plan(client: &Client, plan_id: i32) {
    assert!(
        client.insurance_plans_manager().insurance_plan(plan_id).is_none(),
        "Expected {} not to hold plan {}, plans: {}",
        client.name(),
        plan_id,
        client.insurance_plans_manager()
    );
}

/// Asserts the claim references filed against `plan_id`, in filing order
pub fn assert_claim_references(client: &Client, plan_id: i32, expected: &[&str]) {
    let plan = client
        .insurance_plans_manager()
        .insurance_plan(plan_id)
        .unwrap_or_else(|| panic!("{} does not hold plan {}", client.name(), plan_id));
    let actual: Vec<&str> = plan.claims().iter().map(|c| c.reference()).collect();
    assert_eq!(actual, expected, "Claim references of {} on {}", client.name(), plan);
}

/// Asserts the rendering of a plans manager
pub fn assert_plans_rendering(manager: &InsurancePlansManager, expected: &str) {
    assert_eq!(manager.to_string(), expected, "Unexpected plans rendering");
}

/// Asserts the total claimed by `client` across all plans
pub fn assert_total_claimed(client: &Client, expected: Money) {
    let currency: Currency = expected.currency();
    let total = client
        .insurance_plans_manager()
        .total_claimed(currency)
        .unwrap_or_else(|e| panic!("Cannot total claims of {}: {}", client.name(), e));
    assert_eq!(total, expected, "Total claimed by {}", client.name());
}

/// Per-plan claims of every client, in book order
///
/// `Client` equality compares plans by catalog id only, so claims need their
/// own comparison.
pub fn claims_by_client(book: &AddressBook) -> Vec<Vec<(i32, Vec<Claim>)>> {
    book.clients()
        .iter()
        .map(|client| {
            client
                .insurance_plans_manager()
                .plans()
                .map(|plan| (plan.id(), plan.claims().to_vec()))
                .collect()
        })
        .collect()
}

/// Asserts that both books hold the same claims against the same plans
pub fn assert_same_claims(actual: &AddressBook, expected: &AddressBook) {
    assert_eq!(
        claims_by_client(actual),
        claims_by_client(expected),
        "Claim histories differ"
    );
}
