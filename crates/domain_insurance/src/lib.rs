//! Insurance Coverage Domain
//!
//! This crate owns the per-client coverage model: a closed catalog of
//! insurance plan kinds, the plans a client holds, and the claims filed
//! against them.
//!
//! # Coverage Model
//!
//! ```text
//! catalog id --(InsurancePlanFactory)--> InsurancePlan
//! InsurancePlansManager: at most one InsurancePlan per catalog id
//! InsurancePlan: ordered list of Claim values
//! ```
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{Currency, Money};
//! use domain_insurance::{Claim, InsurancePlanFactory, InsurancePlansManager};
//! use rust_decimal::Decimal;
//!
//! let plan = InsurancePlanFactory::create_insurance_plan(0).unwrap();
//! let mut manager = InsurancePlansManager::new();
//! manager.add_plan(plan.clone()).unwrap();
//!
//! let claim = Claim::new("B1234", Money::new(Decimal::from(100), Currency::SGD)).unwrap();
//! manager.add_claim_to_insurance_plan(&plan, claim).unwrap();
//! assert_eq!(manager.to_string(), "Basic Insurance Plan");
//! ```

pub mod catalog;
pub mod claim;
pub mod plan;
pub mod manager;
pub mod error;

pub use catalog::{InsurancePlanFactory, InsurancePlanKind};
pub use claim::Claim;
pub use plan::InsurancePlan;
pub use manager::InsurancePlansManager;
pub use error::{InsuranceError, INVALID_PLAN_ID_MESSAGE};
