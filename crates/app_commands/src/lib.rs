//! Coverage Commands
//!
//! This crate turns a (display index, plan id[, claim]) request into a change
//! of a client's insurance coverage in the application model.
//!
//! # Architecture
//!
//! - **Commands**: `AddInsuranceCommand`, `DeleteInsuranceCommand`, `AddClaimCommand`
//! - **Messages**: Fixed user-facing feedback text
//! - **Error Handling**: `CommandError`, wrapping domain errors unchanged
//! - **Config / Telemetry**: environment-driven settings and tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use app_commands::{AddInsuranceCommand, Command};
//! use core_kernel::Index;
//!
//! let result = AddInsuranceCommand::new(Index::from_one_based(1), 0).execute(&mut model)?;
//! println!("{}", result);
//! ```

pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod messages;
pub mod telemetry;

pub use command::{Command, CommandResult, CoverageCommand};
pub use commands::{AddClaimCommand, AddInsuranceCommand, DeleteInsuranceCommand};
pub use config::AppConfig;
pub use error::CommandError;
