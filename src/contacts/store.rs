//! In-memory contact storage.
//!
//! # Responsibilities
//! - Hold contacts in creation order
//! - Support append and full scan
//!
//! # Design Decisions
//! - Append-only; no update or delete exists anywhere in the service
//! - Lookups are a linear scan in creation order. O(n) per lookup, which
//!   is fine at this scale; an id index would be the first change if the
//!   directory were expected to grow
//! - The Vec sits behind an RwLock because handlers run on a
//!   multi-threaded runtime. The lock covers single append/scan calls
//!   only; no atomicity is claimed across a read-then-append sequence
//! - State lives for the process lifetime: empty at startup, cleared
//!   only by restart

use std::sync::RwLock;

use crate::contacts::types::Contact;

/// Ordered, append-only collection of contacts.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: RwLock<Vec<Contact>>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact at the end. Returns the new total count.
    pub fn append(&self, contact: Contact) -> usize {
        let mut contacts = self.contacts.write().unwrap_or_else(|e| e.into_inner());
        contacts.push(contact);
        contacts.len()
    }

    /// All contacts in creation order.
    pub fn list_all(&self) -> Vec<Contact> {
        self.contacts
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Linear scan in creation order; first match wins.
    pub fn find_by_id(&self, id: &str) -> Option<Contact> {
        self.contacts
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|contact| contact.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.contacts.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
