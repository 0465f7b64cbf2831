//! Pre-built Test Fixtures
//!
//! A small, fixed address book used across the command and model tests.
//! Client ids are minted on every call, so compare clients taken from the
//! same fixture instance.

use core_kernel::{Currency, Index, Money};
use domain_client::{AddressBook, Client, ModelManager};
use domain_insurance::Claim;
use rust_decimal_macros::dec;

use crate::builders::TestClientBuilder;

pub const INDEX_FIRST_CLIENT: Index = Index::from_one_based(1);
pub const INDEX_SECOND_CLIENT: Index = Index::from_one_based(2);
pub const INDEX_THIRD_CLIENT: Index = Index::from_one_based(3);
pub const INDEX_FOURTH_CLIENT: Index = Index::from_one_based(4);

/// Catalog id of the Basic Insurance Plan
pub const BASIC_PLAN_ID: i32 = 0;
/// Catalog id of the Travel Insurance Plan
pub const TRAVEL_PLAN_ID: i32 = 1;
/// Catalog id of the Health Insurance Plan
pub const HEALTH_PLAN_ID: i32 = 2;
/// Catalog id of the Life Insurance Plan
pub const LIFE_PLAN_ID: i32 = 3;

/// The typical clients, in address book order
pub struct TypicalClients;

impl TypicalClients {
    pub fn alice() -> Client {
        TestClientBuilder::new()
            .with_name("Alice Pauline")
            .with_phone("94351253")
            .with_email("alice@example.com")
            .with_address("123, Jurong West Ave 6, #08-111")
            .with_tags(&["friends"])
            .build()
    }

    pub fn benson() -> Client {
        TestClientBuilder::new()
            .with_name("Benson Meier")
            .with_phone("98765432")
            .with_email("johnd@example.com")
            .with_address("311, Clementi Ave 2, #02-25")
            .with_tags(&["owesMoney", "friends"])
            .build()
    }

    /// Holds the Basic Insurance Plan
    pub fn carl() -> Client {
        TestClientBuilder::new()
            .with_name("Carl Kurz")
            .with_phone("95352563")
            .with_email("heinz@example.com")
            .with_address("wall street")
            .with_insurance_plans("Basic Insurance Plan")
            .build()
    }

    /// Holds no plans
    pub fn daniel() -> Client {
        TestClientBuilder::new()
            .with_name("Daniel Meier")
            .with_phone("87652533")
            .with_email("cornelia@example.com")
            .with_address("10th street")
            .with_tags(&["friends"])
            .build()
    }

    pub fn elle() -> Client {
        TestClientBuilder::new()
            .with_name("Elle Meyer")
            .with_phone("9482224")
            .with_email("werner@example.com")
            .with_address("michegan ave")
            .build()
    }

    pub fn fiona() -> Client {
        TestClientBuilder::new()
            .with_name("Fiona Kunz")
            .with_phone("9482427")
            .with_email("lydia@example.com")
            .with_address("little tokyo")
            .build()
    }

    pub fn george() -> Client {
        TestClientBuilder::new()
            .with_name("George Best")
            .with_phone("9482442")
            .with_email("anna@example.com")
            .with_address("4th street")
            .build()
    }

    pub fn all() -> Vec<Client> {
        vec![
            Self::alice(),
            Self::benson(),
            Self::carl(),
            Self::daniel(),
            Self::elle(),
            Self::fiona(),
            Self::george(),
        ]
    }
}

/// Address book holding every typical client
pub fn typical_address_book() -> AddressBook {
    AddressBook::with_clients(TypicalClients::all()).expect("typical clients are distinct")
}

/// Model over [`typical_address_book`], showing every client
pub fn typical_model() -> ModelManager {
    ModelManager::new(typical_address_book())
}

/// Claim fixtures
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// S$100.00 claim with reference B1234
    pub fn b1234() -> Claim {
        Self::sgd("B1234", Money::new(dec!(100), Currency::SGD))
    }

    /// S$2500.00 claim with reference H777
    pub fn h777() -> Claim {
        Self::sgd("H777", Money::new(dec!(2500), Currency::SGD))
    }

    fn sgd(reference: &str, amount: Money) -> Claim {
        Claim::new(reference, amount).expect("fixture claim is valid")
    }
}
