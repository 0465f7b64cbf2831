//! Shared assertions for command tests

use app_commands::{Command, CommandError};
use domain_client::{Model, ModelManager};
use test_utils::assert_same_claims;

/// Executes `command` and checks its feedback and the resulting model
pub fn assert_command_success<C: Command>(
    command: C,
    model: &mut ModelManager,
    expected_message: &str,
    expected_model: &ModelManager,
) {
    let result = command.execute(model).expect("command should succeed");
    assert_eq!(result.feedback_to_user, expected_message);
    assert_eq!(model, expected_model);
    assert_same_claims(model.address_book(), expected_model.address_book());
}

/// Executes `command` and checks it fails with `expected_message`, leaving the model untouched
pub fn assert_command_failure<C: Command>(
    command: C,
    model: &mut ModelManager,
    expected_message: &str,
) -> CommandError {
    let before = model.clone();
    let error = command.execute(model).expect_err("command should fail");
    assert_eq!(error.to_string(), expected_message);
    assert_eq!(model, &before);
    assert_same_claims(model.address_book(), before.address_book());
    error
}
