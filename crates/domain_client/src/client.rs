//! Client aggregate
//!
//! A client record is immutable once built. Coverage changes go through
//! [`Client::with_insurance_plans_manager`], which returns a new record with
//! the same identity; general edits go through [`ClientBuilder::from`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use validator::Validate;

use core_kernel::ClientId;
use domain_insurance::InsurancePlansManager;
use crate::error::ClientError;

const MIN_PHONE_DIGITS: usize = 3;

/// A client of the relationship tool
///
/// # Invariants
///
/// - `id` never changes across functional updates
/// - Exactly one `InsurancePlansManager` is owned by each client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Client {
    id: ClientId,
    #[validate(length(min = 1, message = "name must not be blank"))]
    name: String,
    phone: String,
    #[validate(email(message = "email must be a valid address"))]
    email: String,
    #[validate(length(min = 1, message = "address must not be blank"))]
    address: String,
    tags: BTreeSet<String>,
    #[serde(default)]
    insurance_plans_manager: InsurancePlansManager,
}

impl Client {
    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Tags in sorted order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn insurance_plans_manager(&self) -> &InsurancePlansManager {
        &self.insurance_plans_manager
    }

    /// Returns a copy of this client holding `manager` instead of its current one
    pub fn with_insurance_plans_manager(&self, manager: InsurancePlansManager) -> Client {
        Client {
            insurance_plans_manager: manager,
            ..self.clone()
        }
    }

    /// Returns true if both records describe the same person
    ///
    /// Names are compared case-insensitively; the address book uses this to
    /// refuse duplicate entries.
    pub fn is_same_client(&self, other: &Client) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

/// Summary line shown to the user after a command
impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        write!(f, "; Insurance Plans: {}", self.insurance_plans_manager)
    }
}

/// Builder for constructing and editing clients
///
/// # Example
///
/// ```rust
/// use domain_client::ClientBuilder;
///
/// let client = ClientBuilder::new()
///     .name("Alice Pauline")
///     .phone("94351253")
///     .email("alice@example.com")
///     .address("123, Jurong West Ave 6, #08-111")
///     .tag("friends")
///     .build()
///     .unwrap();
///
/// let renamed = ClientBuilder::from(&client).name("Alice Tan").build().unwrap();
/// assert_eq!(renamed.id(), client.id());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    id: Option<ClientId>,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    tags: BTreeSet<String>,
    insurance_plans_manager: InsurancePlansManager,
}

impl ClientBuilder {
    /// Creates an empty builder; a fresh `ClientId` is assigned on build
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Adds a tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Replaces all tags
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn insurance_plans_manager(mut self, manager: InsurancePlansManager) -> Self {
        self.insurance_plans_manager = manager;
        self
    }

    /// Builds and validates the client
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` if a required field is missing, the
    /// email is malformed, the phone is not at least three digits, or a tag
    /// is not alphanumeric
    pub fn build(self) -> Result<Client, ClientError> {
        let client = Client {
            id: self.id.unwrap_or_default(),
            name: required(self.name, "name")?.trim().to_string(),
            phone: required(self.phone, "phone")?,
            email: required(self.email, "email")?,
            address: required(self.address, "address")?,
            tags: self.tags,
            insurance_plans_manager: self.insurance_plans_manager,
        };

        client.validate()?;
        validate_phone(&client.phone)?;
        for tag in &client.tags {
            validate_tag(tag)?;
        }

        Ok(client)
    }
}

impl From<&Client> for ClientBuilder {
    fn from(client: &Client) -> Self {
        Self {
            id: Some(client.id),
            name: Some(client.name.clone()),
            phone: Some(client.phone.clone()),
            email: Some(client.email.clone()),
            address: Some(client.address.clone()),
            tags: client.tags.clone(),
            insurance_plans_manager: client.insurance_plans_manager.clone(),
        }
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, ClientError> {
    value.ok_or_else(|| ClientError::invalid(format!("{} is required", field)))
}

fn validate_phone(phone: &str) -> Result<(), ClientError> {
    if phone.len() < MIN_PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ClientError::invalid(format!(
            "phone '{}' must be at least {} digits",
            phone, MIN_PHONE_DIGITS
        )));
    }
    Ok(())
}

fn validate_tag(tag: &str) -> Result<(), ClientError> {
    if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ClientError::invalid(format!("tag '{}' must be alphanumeric", tag)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Client {
        ClientBuilder::new()
            .name("Alice Pauline")
            .phone("94351253")
            .email("alice@example.com")
            .address("123, Jurong West Ave 6, #08-111")
            .tag("friends")
            .build()
            .unwrap()
    }

    #[test]
    fn test_summary_format() {
        assert_eq!(
            alice().to_string(),
            "Alice Pauline; Phone: 94351253; Email: alice@example.com; \
             Address: 123, Jurong West Ave 6, #08-111; Tags: [friends]; \
             Insurance Plans: No added plans"
        );
    }

    #[test]
    fn test_with_manager_keeps_identity_and_fields() {
        let client = alice();
        let mut manager = InsurancePlansManager::new();
        manager
            .add_plan(domain_insurance::InsurancePlanFactory::create_insurance_plan(0).unwrap())
            .unwrap();

        let updated = client.with_insurance_plans_manager(manager.clone());

        assert_eq!(updated.id(), client.id());
        assert_eq!(updated.name(), client.name());
        assert_eq!(updated.insurance_plans_manager(), &manager);
        assert!(client.insurance_plans_manager().is_empty());
    }

    #[test]
    fn test_same_client_ignores_case() {
        let other = ClientBuilder::from(&alice()).name("ALICE PAULINE").build().unwrap();
        assert!(alice().is_same_client(&other));
    }

    #[test]
    fn test_missing_field() {
        let result = ClientBuilder::new().name("Bob").build();
        assert_eq!(result.unwrap_err(), ClientError::invalid("phone is required"));
    }
}
