//! Client Domain
//!
//! This crate holds the client records managed by the relationship tool and
//! the application model that commands operate on.
//!
//! # Client Lifecycle
//!
//! Clients are immutable. Every change produces a new `Client` value that
//! keeps the original `ClientId`, and the model swaps it into the address
//! book in place of the old one:
//!
//! ```text
//! filtered list[index] -> Client -> with_insurance_plans_manager(..) -> Model::set_client
//! ```

pub mod client;
pub mod address_book;
pub mod model;
pub mod error;

pub use client::{Client, ClientBuilder};
pub use address_book::AddressBook;
pub use model::{Model, ModelManager, ClientPredicate, show_all_clients};
pub use error::ClientError;
