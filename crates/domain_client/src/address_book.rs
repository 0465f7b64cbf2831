//! Authoritative client collection

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::ClientId;
use crate::client::Client;
use crate::error::ClientError;

/// The canonical, ordered list of clients
///
/// No two clients in the book are the same client (see
/// [`Client::is_same_client`]). Records are only ever swapped out whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    clients: Vec<Client>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from clients, rejecting duplicates
    pub fn with_clients(clients: impl IntoIterator<Item = Client>) -> Result<Self, ClientError> {
        let mut book = Self::new();
        for client in clients {
            book.add_client(client)?;
        }
        Ok(book)
    }

    /// Clients in storage order
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Returns true if the same client is already stored
    pub fn has_client(&self, client: &Client) -> bool {
        self.clients.iter().any(|c| c.is_same_client(client))
    }

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id() == id)
    }

    /// Appends a client
    ///
    /// # Errors
    ///
    /// Returns `ClientError::DuplicateClient` if the same client is stored
    pub fn add_client(&mut self, client: Client) -> Result<(), ClientError> {
        if self.has_client(&client) {
            return Err(ClientError::DuplicateClient(client.name().to_string()));
        }
        self.clients.push(client);
        Ok(())
    }

    /// Replaces `target` with `edited`, keeping its position
    ///
    /// The record to replace is located by identity (`ClientId`), not by
    /// field equality.
    ///
    /// # Errors
    ///
    /// - `ClientError::ClientNotFound` if `target` is not stored
    /// - `ClientError::DuplicateClient` if `edited` would collide with a
    ///   different stored client
    pub fn set_client(&mut self, target: &Client, edited: Client) -> Result<(), ClientError> {
        let position = self
            .clients
            .iter()
            .position(|c| c.id() == target.id())
            .ok_or_else(|| ClientError::ClientNotFound(target.name().to_string()))?;

        let collides = self
            .clients
            .iter()
            .enumerate()
            .any(|(i, c)| i != position && c.is_same_client(&edited));
        if collides {
            return Err(ClientError::DuplicateClient(edited.name().to_string()));
        }

        debug!(client_id = %target.id(), "Replacing client record");
        self.clients[position] = edited;
        Ok(())
    }

    /// Removes a client by identity
    pub fn remove_client(&mut self, target: &Client) -> Result<Client, ClientError> {
        let position = self
            .clients
            .iter()
            .position(|c| c.id() == target.id())
            .ok_or_else(|| ClientError::ClientNotFound(target.name().to_string()))?;
        Ok(self.clients.remove(position))
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
