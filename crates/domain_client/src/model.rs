//! Application model port
//!
//! Commands depend on the [`Model`] trait rather than a concrete store. The
//! model exposes two views of the same clients:
//!
//! - the authoritative [`AddressBook`], mutated only through
//!   [`Model::set_client`] and [`Model::add_client`]
//! - the filtered list, which is what the user sees and what display
//!   indexes refer to
//!
//! [`ModelManager`] is the in-memory implementation.

use std::fmt;
use std::rc::Rc;

use crate::address_book::AddressBook;
use crate::client::Client;
use crate::error::ClientError;

/// Predicate selecting which clients are displayed
pub type ClientPredicate = Rc<dyn Fn(&Client) -> bool>;

/// Predicate that displays every client
pub fn show_all_clients() -> ClientPredicate {
    Rc::new(|_: &Client| true)
}

/// Operations commands need from the application model
pub trait Model {
    /// Returns the authoritative collection
    fn address_book(&self) -> &AddressBook;

    /// Returns the displayed clients, in display order
    fn filtered_client_list(&self) -> Vec<&Client>;

    /// Narrows the displayed clients
    fn update_filtered_client_list(&mut self, predicate: ClientPredicate);

    fn has_client(&self, client: &Client) -> bool {
        self.address_book().has_client(client)
    }

    fn add_client(&mut self, client: Client) -> Result<(), ClientError>;

    /// Replaces `target` with `edited` in the authoritative collection
    fn set_client(&mut self, target: &Client, edited: Client) -> Result<(), ClientError>;
}

/// In-memory model backed by an [`AddressBook`]
#[derive(Clone)]
pub struct ModelManager {
    address_book: AddressBook,
    filter: ClientPredicate,
}

impl ModelManager {
    /// Creates a model showing every client of `address_book`
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            filter: show_all_clients(),
        }
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(AddressBook::new())
    }
}

impl Model for ModelManager {
    fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    fn filtered_client_list(&self) -> Vec<&Client> {
        self.address_book
            .clients()
            .iter()
            .filter(|c| (self.filter)(*c))
            .collect()
    }

    fn update_filtered_client_list(&mut self, predicate: ClientPredicate) {
        self.filter = predicate;
    }

    fn add_client(&mut self, client: Client) -> Result<(), ClientError> {
        self.address_book.add_client(client)
    }

    fn set_client(&mut self, target: &Client, edited: Client) -> Result<(), ClientError> {
        self.address_book.set_client(target, edited)
    }
}

/// Two models are equal when they hold the same clients and display the same ones
impl PartialEq for ModelManager {
    fn eq(&self, other: &Self) -> bool {
        self.address_book == other.address_book
            && self.filtered_client_list() == other.filtered_client_list()
    }
}

impl fmt::Debug for ModelManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelManager")
            .field("address_book", &self.address_book)
            .field("filtered", &self.filtered_client_list().len())
            .finish()
    }
}
