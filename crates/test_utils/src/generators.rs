//! Property-Based Test Generators
//!
//! Proptest strategies that produce valid catalog ids, claims and clients.

use core_kernel::{Currency, Money};
use domain_client::Client;
use domain_insurance::{Claim, InsurancePlanKind};
use proptest::prelude::*;

use crate::builders::TestClientBuilder;

/// Strategy for ids present in the plan catalog
pub fn plan_id_strategy() -> impl Strategy<Value = i32> {
    prop::sample::select(InsurancePlanKind::ALL.iter().map(|k| k.id()).collect::<Vec<_>>())
}

/// Strategy for ids absent from the plan catalog
pub fn invalid_plan_id_strategy() -> impl Strategy<Value = i32> {
    any::<i32>().prop_filter("must not be a catalog id", |id| {
        InsurancePlanKind::from_id(*id).is_none()
    })
}

/// Strategy for claim references
pub fn claim_reference_strategy() -> impl Strategy<Value = String> {
    "[A-Z][0-9]{1,6}"
}

/// Strategy for non-negative SGD claim amounts
pub fn claim_amount_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64).prop_map(|cents| Money::from_minor(cents, Currency::SGD))
}

/// Strategy for valid claims
pub fn claim_strategy() -> impl Strategy<Value = Claim> {
    (claim_reference_strategy(), claim_amount_strategy())
        .prop_map(|(reference, amount)| Claim::new(reference, amount).expect("generated claim is valid"))
}

/// Strategy for clients with a unique-looking name and no plans
pub fn client_strategy() -> impl Strategy<Value = Client> {
    ("[A-Z][a-z]{2,8} [A-Z][a-z]{2,8}", "[89][0-9]{7}").prop_map(|(name, phone)| {
        TestClientBuilder::new().with_name(name).with_phone(phone).build()
    })
}
