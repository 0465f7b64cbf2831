//! Per-client insurance plans manager
//!
//! Each client owns exactly one manager. The manager keeps plans in the
//! order they were attached and refuses a second plan with the same catalog
//! id. Callers that need all-or-nothing semantics mutate a clone and publish
//! it only once every step has succeeded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use core_kernel::{Currency, Money, MoneyError};
use crate::catalog::InsurancePlanFactory;
use crate::claim::Claim;
use crate::error::InsuranceError;
use crate::plan::InsurancePlan;

/// Rendering of a manager with no plans attached
pub const NO_PLANS_RENDERING: &str = "No added plans";

const PLAN_SEPARATOR: &str = ", ";

/// The set of insurance plans attached to one client
///
/// # Invariants
///
/// - At most one plan per catalog id
/// - Plans are kept in attachment order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<InsurancePlan>", into = "Vec<InsurancePlan>")]
pub struct InsurancePlansManager {
    plans: Vec<InsurancePlan>,
}

impl InsurancePlansManager {
    /// Creates an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a plan
    ///
    /// # Errors
    ///
    /// Returns `InsuranceError::DuplicatePlan` if a plan with the same catalog
    /// id is already attached
    pub fn add_plan(&mut self, plan: InsurancePlan) -> Result<(), InsuranceError> {
        if self.contains(&plan) {
            return Err(InsuranceError::DuplicatePlan(plan.name().to_string()));
        }
        debug!(plan_id = plan.id(), "Attaching insurance plan");
        self.plans.push(plan);
        Ok(())
    }

    /// Detaches a plan together with its claim history
    ///
    /// Returns the detached plan as it was stored, claims included.
    ///
    /// # Errors
    ///
    /// Returns `InsuranceError::PlanNotFound` if no plan with that catalog id
    /// is attached
    pub fn delete_plan(&mut self, plan: &InsurancePlan) -> Result<InsurancePlan, InsuranceError> {
        let position = self.position_of(plan)?;
        debug!(plan_id = plan.id(), "Detaching insurance plan");
        Ok(self.plans.remove(position))
    }

    /// Appends a claim to an attached plan
    ///
    /// # Errors
    ///
    /// Returns `InsuranceError::PlanNotFound` if the plan is not attached
    pub fn add_claim_to_insurance_plan(
        &mut self,
        plan: &InsurancePlan,
        claim: Claim,
    ) -> Result<(), InsuranceError> {
        let position = self.position_of(plan)?;
        debug!(plan_id = plan.id(), reference = claim.reference(), "Filing claim");
        self.plans[position].push_claim(claim);
        Ok(())
    }

    /// Returns the attached plan with the given catalog id
    pub fn insurance_plan(&self, id: i32) -> Option<&InsurancePlan> {
        self.plans.iter().find(|p| p.id() == id)
    }

    /// Returns true if a plan with the same catalog id is attached
    pub fn contains(&self, plan: &InsurancePlan) -> bool {
        self.plans.contains(plan)
    }

    /// Attached plans in attachment order
    pub fn plans(&self) -> impl Iterator<Item = &InsurancePlan> {
        self.plans.iter()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Sums every claim across all attached plans
    pub fn total_claimed(&self, currency: Currency) -> Result<Money, MoneyError> {
        let per_plan = self
            .plans
            .iter()
            .map(|plan| plan.total_claimed(currency))
            .collect::<Result<Vec<_>, _>>()?;
        Money::sum(currency, per_plan)
    }

    fn position_of(&self, plan: &InsurancePlan) -> Result<usize, InsuranceError> {
        self.plans
            .iter()
            .position(|p| p == plan)
            .ok_or_else(|| InsuranceError::PlanNotFound(plan.name().to_string()))
    }
}

impl fmt::Display for InsurancePlansManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plans.is_empty() {
            return write!(f, "{}", NO_PLANS_RENDERING);
        }
        let names: Vec<&str> = self.plans.iter().map(InsurancePlan::name).collect();
        write!(f, "{}", names.join(PLAN_SEPARATOR))
    }
}

/// Rebuilds a claim-free manager from its `Display` rendering
impl FromStr for InsurancePlansManager {
    type Err = InsuranceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut manager = InsurancePlansManager::new();
        if s.is_empty() || s == NO_PLANS_RENDERING {
            return Ok(manager);
        }
        for name in s.split(PLAN_SEPARATOR.trim()) {
            manager.add_plan(InsurancePlanFactory::create_insurance_plan_from_name(name)?)?;
        }
        Ok(manager)
    }
}

impl TryFrom<Vec<InsurancePlan>> for InsurancePlansManager {
    type Error = InsuranceError;

    fn try_from(plans: Vec<InsurancePlan>) -> Result<Self, Self::Error> {
        let mut manager = InsurancePlansManager::new();
        for plan in plans {
            manager.add_plan(plan)?;
        }
        Ok(manager)
    }
}

impl From<InsurancePlansManager> for Vec<InsurancePlan> {
    fn from(manager: InsurancePlansManager) -> Self {
        manager.plans
    }
}
