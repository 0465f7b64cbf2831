//! File a claim against an attached plan

use tracing::instrument;

use core_kernel::Index;
use domain_client::Model;
use domain_insurance::Claim;

use crate::command::{Command, CommandResult};
use crate::commands::update_coverage;
use crate::error::CommandError;
use crate::messages;

/// Appends `claim` to plan `plan_id` of the client at `index`
///
/// The plan must already be attached to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddClaimCommand {
    index: Index,
    plan_id: i32,
    claim: Claim,
}

impl AddClaimCommand {
    pub fn new(index: Index, plan_id: i32, claim: Claim) -> Self {
        Self { index, plan_id, claim }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn plan_id(&self) -> i32 {
        self.plan_id
    }

    pub fn claim(&self) -> &Claim {
        &self.claim
    }
}

impl Command for AddClaimCommand {
    #[instrument(
        name = "add_claim",
        skip_all,
        fields(index = %self.index, plan_id = self.plan_id, reference = self.claim.reference())
    )]
    fn execute(self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let claim = self.claim;
        let filed = claim.clone();
        let (client, plan) = update_coverage(model, self.index, self.plan_id, move |manager, plan| {
            manager.add_claim_to_insurance_plan(&plan, filed)?;
            Ok(plan)
        })?;
        Ok(CommandResult::new(messages::add_claim_success(&claim, &plan, &client)))
    }
}
