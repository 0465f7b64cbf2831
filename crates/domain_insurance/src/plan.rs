//! Insurance plan value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use core_kernel::{Currency, Money, MoneyError};
use crate::catalog::InsurancePlanKind;
use crate::claim::Claim;

/// A coverage type attached to a client, with the claims filed against it
///
/// Equality and hashing consider only the catalog kind. A plan carrying
/// claims is still "the same plan" as a fresh one from the factory, which is
/// what membership checks in `InsurancePlansManager` rely on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsurancePlan {
    kind: InsurancePlanKind,
    #[serde(default)]
    claims: Vec<Claim>,
}

impl InsurancePlan {
    /// Creates a claim-free plan of the given kind
    pub fn of(kind: InsurancePlanKind) -> Self {
        Self {
            kind,
            claims: Vec::new(),
        }
    }

    pub fn kind(&self) -> InsurancePlanKind {
        self.kind
    }

    /// Returns the catalog id
    pub fn id(&self) -> i32 {
        self.kind.id()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Claims in filing order
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Sums the amounts of all claims filed against this plan
    pub fn total_claimed(&self, currency: Currency) -> Result<Money, MoneyError> {
        Money::sum(currency, self.claims.iter().map(Claim::amount))
    }

    pub(crate) fn push_claim(&mut self, claim: Claim) {
        self.claims.push(claim);
    }
}

impl PartialEq for InsurancePlan {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for InsurancePlan {}

impl Hash for InsurancePlan {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

impl fmt::Display for InsurancePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.name())
    }
}
