//! Attach an insurance plan to a client

use tracing::instrument;

use core_kernel::Index;
use domain_client::Model;

use crate::command::{Command, CommandResult};
use crate::commands::update_coverage;
use crate::error::CommandError;
use crate::messages;

/// Attaches the catalog plan `plan_id` to the client at `index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddInsuranceCommand {
    index: Index,
    plan_id: i32,
}

impl AddInsuranceCommand {
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

impl Command for AddInsuranceCommand {
    #[instrument(name = "add_insurance", skip_all, fields(index = %self.index, plan_id = self.plan_id))]
    fn execute(self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let (client, plan) = update_coverage(model, self.index, self.plan_id, |manager, plan| {
            manager.add_plan(plan.clone())?;
            Ok(plan)
        })?;
        Ok(CommandResult::new(messages::add_insurance_plan_success(&plan, &client)))
    }
}
