//! Claim value object

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Money;
use crate::error::InsuranceError;

/// A single reimbursement record filed against an attached plan
///
/// References are not required to be unique: two claims with the same
/// reference are both kept, in filing order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ClaimRecord")]
pub struct Claim {
    reference: String,
    amount: Money,
}

impl Claim {
    /// Creates a claim
    ///
    /// `amount` is taken as given. `Money::new` has already rounded to four
    /// decimal places, so build user-entered amounts with `Money::try_new`
    /// to reject finer values instead of recording them rounded.
    ///
    /// # Errors
    ///
    /// Returns `InsuranceError::InvalidClaim` if the reference is empty or
    /// not alphanumeric, or if the amount is negative
    pub fn new(reference: impl Into<String>, amount: Money) -> Result<Self, InsuranceError> {
        let reference = reference.into();
        if reference.is_empty() || !reference.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InsuranceError::invalid_claim(format!(
                "reference '{}' must be non-empty and alphanumeric",
                reference
            )));
        }
        let amount = amount
            .non_negative()
            .map_err(|e| InsuranceError::invalid_claim(e.to_string()))?;

        Ok(Self { reference, amount })
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.reference, self.amount)
    }
}

/// Unvalidated wire shape of a claim
#[derive(Deserialize)]
struct ClaimRecord {
    reference: String,
    amount: Money,
}

impl TryFrom<ClaimRecord> for Claim {
    type Error = InsuranceError;

    fn try_from(record: ClaimRecord) -> Result<Self, Self::Error> {
        Claim::new(record.reference, record.amount)
    }
}
