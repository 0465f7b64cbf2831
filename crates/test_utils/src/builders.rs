//! Test Data Builders
//!
//! Builders with sensible defaults, so tests only spell out the fields they
//! care about.

use domain_client::{Client, ClientBuilder};
use domain_insurance::InsurancePlansManager;

pub const DEFAULT_NAME: &str = "Amy Bee";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "amy@gmail.com";
pub const DEFAULT_ADDRESS: &str = "123, Jurong West Ave 6, #08-111";

/// Builder for constructing test clients
#[derive(Debug, Clone)]
pub struct TestClientBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    tags: Vec<String>,
    insurance_plans_manager: InsurancePlansManager,
}

impl Default for TestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClientBuilder {
    /// Creates a builder for a client with no tags and no plans
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            tags: Vec::new(),
            insurance_plans_manager: InsurancePlansManager::new(),
        }
    }

    /// Starts from an existing client's fields
    pub fn from_client(client: &Client) -> Self {
        Self {
            name: client.name().to_string(),
            phone: client.phone().to_string(),
            email: client.email().to_string(),
            address: client.address().to_string(),
            tags: client.tags().map(str::to_string).collect(),
            insurance_plans_manager: client.insurance_plans_manager().clone(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Replaces the tags
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Sets the plans from their rendering, e.g. `"Travel Insurance Plan, Life Insurance Plan"`
    ///
    /// # Panics
    ///
    /// Panics if the rendering names a plan outside the catalog
    pub fn with_insurance_plans(mut self, rendering: &str) -> Self {
        self.insurance_plans_manager = rendering
            .parse()
            .unwrap_or_else(|e| panic!("bad plans rendering '{}': {}", rendering, e));
        self
    }

    pub fn with_insurance_plans_manager(mut self, manager: InsurancePlansManager) -> Self {
        self.insurance_plans_manager = manager;
        self
    }

    /// Builds the client
    ///
    /// # Panics
    ///
    /// Panics if the fields do not form a valid client
    pub fn build(self) -> Client {
        ClientBuilder::new()
            .name(self.name)
            .phone(self.phone)
            .email(self.email)
            .address(self.address)
            .tags(self.tags)
            .insurance_plans_manager(self.insurance_plans_manager)
            .build()
            .expect("test client fields are valid")
    }
}
