//! Coverage commands
//!
//! All three commands share one protocol, implemented by [`update_coverage`]:
//!
//! 1. resolve the display index against the filtered client list
//! 2. resolve the plan id through the catalog factory
//! 3. apply the change to a copy of the client's plans manager
//! 4. build the updated client and swap it into the model
//!
//! Steps 1-3 can fail; step 4 only runs once they have all succeeded.

mod add_claim;
mod add_insurance;
mod delete_insurance;

pub use add_claim::AddClaimCommand;
pub use add_insurance::AddInsuranceCommand;
pub use delete_insurance::DeleteInsuranceCommand;

use tracing::{info, warn};

use core_kernel::Index;
use domain_client::{Client, Model};
use domain_insurance::{InsuranceError, InsurancePlan, InsurancePlanFactory, InsurancePlansManager};

use crate::error::CommandError;

/// Resolves a display index to a copy of the client shown there
pub(crate) fn resolve_client(model: &dyn Model, index: Index) -> Result<Client, CommandError> {
    let displayed = model.filtered_client_list();
    index
        .resolve(displayed.len())
        .map(|offset| displayed[offset].clone())
        .ok_or(CommandError::InvalidClientIndex(index))
}

/// Runs the shared coverage-update protocol
///
/// `apply` receives a private copy of the target's manager and the catalog
/// plan for `plan_id`, and returns the plan to report back. Returns the
/// updated client together with that plan.
pub(crate) fn update_coverage<F>(
    model: &mut dyn Model,
    index: Index,
    plan_id: i32,
    apply: F,
) -> Result<(Client, InsurancePlan), CommandError>
where
    F: FnOnce(&mut InsurancePlansManager, InsurancePlan) -> Result<InsurancePlan, InsuranceError>,
{
    let outcome = try_update_coverage(model, index, plan_id, apply);

    match &outcome {
        Ok((client, plan)) => info!(
            client_id = %client.id(),
            plan = plan.name(),
            "Coverage updated"
        ),
        Err(error) => warn!(%error, "Coverage update rejected"),
    }
    outcome
}

fn try_update_coverage<F>(
    model: &mut dyn Model,
    index: Index,
    plan_id: i32,
    apply: F,
) -> Result<(Client, InsurancePlan), CommandError>
where
    F: FnOnce(&mut InsurancePlansManager, InsurancePlan) -> Result<InsurancePlan, InsuranceError>,
{
    let client = resolve_client(model, index)?;
    let plan = InsurancePlanFactory::create_insurance_plan(plan_id)?;

    let mut manager = client.insurance_plans_manager().clone();
    let affected = apply(&mut manager, plan)?;

    let updated = client.with_insurance_plans_manager(manager);
    model.set_client(&client, updated.clone())?;
    Ok((updated, affected))
}
