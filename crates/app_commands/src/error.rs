//! Command error handling

use thiserror::Error;

use core_kernel::Index;
use domain_client::ClientError;
use domain_insurance::InsuranceError;

use crate::messages::MESSAGE_INVALID_CLIENT_DISPLAYED_INDEX;

/// Reasons a command can fail
///
/// Every failure is detected before the model is touched, so an `Err` always
/// means the model is unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Display index outside the filtered client list
    #[error("{}", MESSAGE_INVALID_CLIENT_DISPLAYED_INDEX)]
    InvalidClientIndex(Index),

    /// Catalog or plans-manager rejection, reported with the domain's own message
    #[error(transparent)]
    Insurance(#[from] InsuranceError),

    /// The model refused the replacement
    #[error(transparent)]
    Client(#[from] ClientError),
}
