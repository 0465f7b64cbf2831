//! Test Utilities Crate
//!
//! Shared test infrastructure for the coverage workspace.
//!
//! # Modules
//!
//! - `fixtures`: The typical address book and display indexes
//! - `builders`: Client builder with sensible defaults
//! - `assertions`: Coverage assertions with readable failure messages
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
