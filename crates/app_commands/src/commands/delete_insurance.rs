//! Detach an insurance plan from a client

use tracing::instrument;

use core_kernel::Index;
use domain_client::Model;

use crate::command::{Command, CommandResult};
use crate::commands::update_coverage;
use crate::error::CommandError;
use crate::messages;

/// Detaches the catalog plan `plan_id`, and its claims, from the client at `index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeleteInsuranceCommand {
    index: Index,
    plan_id: i32,
}

impl DeleteInsuranceCommand {
    pub fn new(index: Index, plan_id: i32) -> Self {
        Self { index, plan_id }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn plan_id(&self) -> i32 {
        self.plan_id
    }
}

impl Command for DeleteInsuranceCommand {
    #[instrument(name = "delete_insurance", skip_all, fields(index = %self.index, plan_id = self.plan_id))]
    fn execute(self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let (client, plan) = update_coverage(model, self.index, self.plan_id, |manager, plan| {
            manager.delete_plan(&plan)
        })?;
        Ok(CommandResult::new(messages::delete_insurance_plan_success(&plan, &client)))
    }
}
