//! Business rules atop the contact store.
//!
//! The service is deliberately free of HTTP, logging and tracing concerns;
//! the observability wrapper lives at the handler boundary. The creation
//! sub-steps (`new_id`, `Contact::build`, `insert`) are exposed separately
//! so that boundary can wrap each one in its own span, while `create`
//! composes them for callers that don't care.

use std::sync::Arc;

use uuid::Uuid;

use crate::contacts::store::ContactStore;
use crate::contacts::types::{Contact, ContactInput};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ContactError {
    #[error("contact not found")]
    NotFound,
}

/// Contact directory operations: create, list, get.
#[derive(Debug, Clone)]
pub struct ContactService {
    store: Arc<ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<ContactStore>) -> Self {
        Self { store }
    }

    /// Generate a fresh identifier. 128 random bits; collisions are not a
    /// practical concern within a process lifetime.
    pub fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    /// Append a constructed record. Returns the new total count.
    pub fn insert(&self, contact: Contact) -> usize {
        self.store.append(contact)
    }

    /// Create a contact from a validated payload: id generation, record
    /// construction, append.
    pub fn create(&self, input: ContactInput) -> Contact {
        let contact = Contact::build(self.new_id(), input);
        self.insert(contact.clone());
        contact
    }

    /// All contacts, creation order.
    pub fn list(&self) -> Vec<Contact> {
        self.store.list_all()
    }

    /// Lookup by identifier.
    pub fn get(&self, id: &str) -> Result<Contact, ContactError> {
        self.store.find_by_id(id).ok_or(ContactError::NotFound)
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn service() -> ContactService {
        ContactService::new(Arc::new(ContactStore::new()))
    }

    fn input(name: &str) -> ContactInput {
        ContactInput {
            name: name.to_string(),
            phone: "555-0100".to_string(),
            email: Some("a@b.c".to_string()),
            address: None,
        }
    }

    #[test]
    fn create_assigns_unique_ids_and_timestamp() {
        let service = service();
        let before = Utc::now();
        let first = service.create(input("Ana"));
        let second = service.create(input("Bia"));
        let after = Utc::now();

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert!(first.created_at >= before && first.created_at <= after);
    }

    #[test]
    fn created_contact_is_retrievable() {
        let service = service();
        let created = service.create(input("Ana"));
        let fetched = service.get(&created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn list_returns_creation_order() {
        let service = service();
        for name in ["Ana", "Bia", "Caio"] {
            service.create(input(name));
        }
        let names: Vec<String> = service.list().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Ana", "Bia", "Caio"]);
        assert_eq!(service.count(), 3);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let service = service();
        service.create(input("Ana"));
        assert_eq!(service.get("never-issued"), Err(ContactError::NotFound));
    }
}
