//! Tests for domain_insurance

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};

use domain_insurance::{
    Claim, InsuranceError, InsurancePlan, InsurancePlanFactory, InsurancePlanKind,
    InsurancePlansManager, INVALID_PLAN_ID_MESSAGE,
};

fn plan(id: i32) -> InsurancePlan {
    InsurancePlanFactory::create_insurance_plan(id).unwrap()
}

fn claim(reference: &str, amount: i64) -> Claim {
    Claim::new(reference, Money::new(amount.into(), Currency::SGD)).unwrap()
}

// ============================================================================
// Catalog / Factory Tests
// ============================================================================

mod factory_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_ids_create_equal_plans(position in 0usize..InsurancePlanKind::ALL.len()) {
            let id = InsurancePlanKind::ALL[position].id();
            let first = InsurancePlanFactory::create_insurance_plan(id).unwrap();
            let second = InsurancePlanFactory::create_insurance_plan(id).unwrap();

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.id(), id);
            prop_assert_eq!(first.name(), second.name());
            prop_assert!(first.claims().is_empty());
        }

        #[test]
        fn ids_outside_catalog_are_rejected(id in any::<i32>().prop_filter(
            "outside catalog",
            |id| InsurancePlanKind::from_id(*id).is_none(),
        )) {
            let err = InsurancePlanFactory::create_insurance_plan(id).unwrap_err();
            prop_assert_eq!(&err, &InsuranceError::InvalidPlanId(id));
            prop_assert_eq!(err.to_string(), INVALID_PLAN_ID_MESSAGE);
        }
    }

    #[test]
    fn test_boundary_ids() {
        assert!(InsurancePlanFactory::create_insurance_plan(-1).is_err());
        assert!(InsurancePlanFactory::create_insurance_plan(0).is_ok());
        assert!(InsurancePlanFactory::create_insurance_plan(3).is_ok());
        assert!(InsurancePlanFactory::create_insurance_plan(4).is_err());
    }

    #[test]
    fn test_invalid_id_message_does_not_mention_the_id() {
        let low = InsurancePlanFactory::create_insurance_plan(-1).unwrap_err();
        let high = InsurancePlanFactory::create_insurance_plan(999).unwrap_err();
        assert_eq!(low.to_string(), high.to_string());
    }
}

// ============================================================================
// Plan Tests
// ============================================================================

mod plan_tests {
    use super::*;

    #[test]
    fn test_equality_ignores_claims() {
        let mut manager = InsurancePlansManager::new();
        manager.add_plan(plan(0)).unwrap();
        manager.add_claim_to_insurance_plan(&plan(0), claim("B1234", 100)).unwrap();

        let attached = manager.insurance_plan(0).unwrap();
        assert_eq!(attached.claims().len(), 1);
        assert_eq!(attached, &plan(0));
    }

    #[test]
    fn test_plans_of_different_kinds_differ() {
        assert_ne!(plan(0), plan(1));
    }

    #[test]
    fn test_display_is_plan_name() {
        assert_eq!(plan(1).to_string(), "Travel Insurance Plan");
    }

    #[test]
    fn test_total_claimed_rejects_mixed_currencies() {
        let mut manager = InsurancePlansManager::new();
        manager.add_plan(plan(0)).unwrap();
        manager.add_claim_to_insurance_plan(&plan(0), claim("A1", 10)).unwrap();
        let usd = Claim::new("A2", Money::new(dec!(10), Currency::USD)).unwrap();
        manager.add_claim_to_insurance_plan(&plan(0), usd).unwrap();

        assert!(manager.insurance_plan(0).unwrap().total_claimed(Currency::SGD).is_err());
    }
}

// ============================================================================
// Manager Tests
// ============================================================================

mod manager_tests {
    use super::*;

    #[test]
    fn test_add_duplicate_plan_leaves_manager_unchanged() {
        let mut manager = InsurancePlansManager::new();
        manager.add_plan(plan(0)).unwrap();
        manager.add_claim_to_insurance_plan(&plan(0), claim("B1", 5)).unwrap();
        let before = manager.clone();

        let err = manager.add_plan(plan(0)).unwrap_err();

        assert_eq!(err, InsuranceError::DuplicatePlan("Basic Insurance Plan".to_string()));
        assert_eq!(manager, before);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.insurance_plan(0).unwrap().claims().len(), 1);
    }

    #[test]
    fn test_delete_missing_plan_leaves_manager_unchanged() {
        let mut manager = InsurancePlansManager::new();
        manager.add_plan(plan(1)).unwrap();
        let before = manager.clone();

        let err = manager.delete_plan(&plan(0)).unwrap_err();

        assert_eq!(err, InsuranceError::PlanNotFound("Basic Insurance Plan".to_string()));
        assert_eq!(manager, before);
    }

    #[test]
    fn test_delete_from_empty_manager_is_an_error() {
        let mut manager = InsurancePlansManager::new();
        assert!(matches!(
            manager.delete_plan(&plan(2)),
            Err(InsuranceError::PlanNotFound(_))
        ));
    }

    #[test]
    fn test_claims_append_in_order() {
        let mut manager = InsurancePlansManager::new();
        manager.add_plan(plan(0)).unwrap();
        manager.add_plan(plan(1)).unwrap();

        manager.add_claim_to_insurance_plan(&plan(0), claim("A1", 100)).unwrap();
        manager.add_claim_to_insurance_plan(&plan(0), claim("A2", 200)).unwrap();

        let references: Vec<&str> = manager
            .insurance_plan(0)
            .unwrap()
            .claims()
            .iter()
            .map(Claim::reference)
            .collect();
        assert_eq!(references, vec!["A1", "A2"]);
        assert!(manager.insurance_plan(1).unwrap().claims().is_empty());
    }

    #[test]
    fn test_claim_on_unattached_plan_adds_nothing() {
        let mut manager = InsurancePlansManager::new();
        manager.add_plan(plan(1)).unwrap();

        let err = manager
            .add_claim_to_insurance_plan(&plan(0), claim("B1234", 100))
            .unwrap_err();

        assert_eq!(err, InsuranceError::PlanNotFound("Basic Insurance Plan".to_string()));
        assert!(manager.plans().all(|p| p.claims().is_empty()));
    }

    /// Claim references are not deduplicated; both filings are kept.
    #[test]
    fn test_duplicate_claim_references_are_kept() {
        let mut manager = InsurancePlansManager::new();
        manager.add_plan(plan(0)).unwrap();

        manager.add_claim_to_insurance_plan(&plan(0), claim("B1234", 100)).unwrap();
        manager.add_claim_to_insurance_plan(&plan(0), claim("B1234", 100)).unwrap();

        assert_eq!(manager.insurance_plan(0).unwrap().claims().len(), 2);
    }
}

// ============================================================================
// Rendering Tests
// ============================================================================

mod rendering_tests {
    use super::*;

    #[test]
    fn test_rendering_parses_back() {
        let mut manager = InsurancePlansManager::new();
        manager.add_plan(plan(2)).unwrap();
        manager.add_plan(plan(0)).unwrap();

        let parsed: InsurancePlansManager = manager.to_string().parse().unwrap();

        assert_eq!(parsed, manager);
        assert_eq!(parsed.to_string(), "Health Insurance Plan, Basic Insurance Plan");
    }

    #[test]
    fn test_single_plan_rendering_parses() {
        let parsed: InsurancePlansManager = plan(0).to_string().parse().unwrap();
        assert!(parsed.contains(&plan(0)));
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_empty_rendering_parses() {
        let empty = InsurancePlansManager::new();
        let parsed: InsurancePlansManager = empty.to_string().parse().unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_repeated_plan_in_rendering_is_rejected() {
        let result = "Basic Insurance Plan, Basic Insurance Plan".parse::<InsurancePlansManager>();
        assert!(matches!(result, Err(InsuranceError::DuplicatePlan(_))));
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

mod serde_tests {
    use super::*;

    #[test]
    fn test_manager_with_repeated_plan_fails_to_deserialize() {
        let json = r#"[{"kind":"Basic","claims":[]},{"kind":"Basic","claims":[]}]"#;
        assert!(serde_json::from_str::<InsurancePlansManager>(json).is_err());
    }

    #[test]
    fn test_claim_with_negative_amount_fails_to_deserialize() {
        let json = r#"{"reference":"B1","amount":{"amount":"-5","currency":"SGD"}}"#;
        assert!(serde_json::from_str::<Claim>(json).is_err());
    }

    #[test]
    fn test_manager_keeps_claims_through_json() {
        let mut manager = InsurancePlansManager::new();
        manager.add_plan(plan(0)).unwrap();
        manager.add_claim_to_insurance_plan(&plan(0), claim("B1234", 100)).unwrap();

        let json = serde_json::to_string(&manager).unwrap();
        let restored: InsurancePlansManager = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.insurance_plan(0).unwrap().claims(), manager.insurance_plan(0).unwrap().claims());
    }
}
