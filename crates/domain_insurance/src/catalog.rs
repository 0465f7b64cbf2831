//! Insurance plan catalog
//!
//! The set of plans a client can hold is fixed. Each kind has a small
//! integer catalog id and a display name; `InsurancePlanFactory` is the only
//! place that turns user-supplied ids or names into plans.

use serde::{Deserialize, Serialize};

use crate::error::InsuranceError;
use crate::plan::InsurancePlan;

/// Kinds of insurance plan offered by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InsurancePlanKind {
    /// Entry-level coverage (id 0)
    Basic,
    /// Travel coverage (id 1)
    Travel,
    /// Medical and hospitalisation coverage (id 2)
    Health,
    /// Life coverage (id 3)
    Life,
}

impl InsurancePlanKind {
    /// Every catalog entry, in catalog id order
    pub const ALL: [InsurancePlanKind; 4] = [
        InsurancePlanKind::Basic,
        InsurancePlanKind::Travel,
        InsurancePlanKind::Health,
        InsurancePlanKind::Life,
    ];

    /// Returns the catalog id
    pub fn id(&self) -> i32 {
        match self {
            InsurancePlanKind::Basic => 0,
            InsurancePlanKind::Travel => 1,
            InsurancePlanKind::Health => 2,
            InsurancePlanKind::Life => 3,
        }
    }

    /// Returns the display name
    pub fn name(&self) -> &'static str {
        match self {
            InsurancePlanKind::Basic => "Basic Insurance Plan",
            InsurancePlanKind::Travel => "Travel Insurance Plan",
            InsurancePlanKind::Health => "Health Insurance Plan",
            InsurancePlanKind::Life => "Life Insurance Plan",
        }
    }

    /// Looks up a kind by catalog id
    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Looks up a kind by display name, ignoring surrounding whitespace
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Creates insurance plans from catalog ids
///
/// Commands and the plans manager route every id through this factory, so
/// the catalog range is defined in exactly one place.
pub struct InsurancePlanFactory;

impl InsurancePlanFactory {
    /// Creates a fresh, claim-free plan for a catalog id
    ///
    /// # Errors
    ///
    /// Returns `InsuranceError::InvalidPlanId` if `id` is not in the catalog
    pub fn create_insurance_plan(id: i32) -> Result<InsurancePlan, InsuranceError> {
        InsurancePlanKind::from_id(id)
            .map(InsurancePlan::of)
            .ok_or(InsuranceError::InvalidPlanId(id))
    }

    /// Creates a fresh plan from its display name
    ///
    /// # Errors
    ///
    /// Returns `InsuranceError::InvalidPlanName` if no catalog entry has that name
    pub fn create_insurance_plan_from_name(name: &str) -> Result<InsurancePlan, InsuranceError> {
        InsurancePlanKind::from_name(name)
            .map(InsurancePlan::of)
            .ok_or_else(|| InsuranceError::InvalidPlanName(name.trim().to_string()))
    }

    /// Returns the whole catalog in id order
    pub fn catalog() -> &'static [InsurancePlanKind] {
        &InsurancePlanKind::ALL
    }
}
