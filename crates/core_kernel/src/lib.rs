//! Core Kernel - Foundational types for the client coverage system
//!
//! This crate provides the building blocks shared by the domain crates:
//! - Money types with precise decimal arithmetic (claim amounts)
//! - Strongly-typed client identifiers
//! - One-based display indexes

pub mod money;
pub mod identifiers;
pub mod index;
pub mod error;

pub use money::{Money, Currency, MoneyError, MONEY_PRECISION};
pub use identifiers::ClientId;
pub use index::Index;
pub use error::CoreError;
