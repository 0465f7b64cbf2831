//! Command abstraction

use std::fmt;

use domain_client::Model;

use crate::commands::{AddClaimCommand, AddInsuranceCommand, DeleteInsuranceCommand};
use crate::error::CommandError;

/// Outcome of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Text shown to the user
    pub feedback_to_user: String,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.feedback_to_user)
    }
}

/// A request that changes the model
///
/// `execute` consumes the command, so each instance runs at most once. It
/// either applies its whole change and returns feedback, or returns an error
/// with the model untouched.
pub trait Command {
    fn execute(self, model: &mut dyn Model) -> Result<CommandResult, CommandError>;
}

/// Any coverage command
///
/// Commands of different kinds never compare equal, even with identical
/// index and plan id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverageCommand {
    AddInsurance(AddInsuranceCommand),
    DeleteInsurance(DeleteInsuranceCommand),
    AddClaim(AddClaimCommand),
}

impl Command for CoverageCommand {
    fn execute(self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        match self {
            CoverageCommand::AddInsurance(command) => command.execute(model),
            CoverageCommand::DeleteInsurance(command) => command.execute(model),
            CoverageCommand::AddClaim(command) => command.execute(model),
        }
    }
}

impl From<AddInsuranceCommand> for CoverageCommand {
    fn from(command: AddInsuranceCommand) -> Self {
        CoverageCommand::AddInsurance(command)
    }
}

impl From<DeleteInsuranceCommand> for CoverageCommand {
    fn from(command: DeleteInsuranceCommand) -> Self {
        CoverageCommand::DeleteInsurance(command)
    }
}

impl From<AddClaimCommand> for CoverageCommand {
    fn from(command: AddClaimCommand) -> Self {
        CoverageCommand::AddClaim(command)
    }
}
