//! Record store for contactbook.
//!
//! [`ContactStore`] owns the in-memory contact list and its backing JSON file.
//! Every mutation rewrites the whole file. When a write fails the in-memory
//! change is rolled back, so memory and disk never drift apart.

pub mod export;
pub mod file;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::contact::{Contact, ContactUpdate};
use crate::error::Result;

/// In-memory contact collection bound to a JSON file.
#[derive(Debug)]
pub struct ContactStore {
    /// Path to the contacts file.
    path: PathBuf,
    /// Contacts in insertion order.
    contacts: Vec<Contact>,
    /// Create missing parent directories before writing.
    create_parent_dirs: bool,
}

impl ContactStore {
    /// Create an empty store bound to `path` without touching the file.
    #[must_use]
    pub fn empty(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            contacts: Vec::new(),
            create_parent_dirs: true,
        }
    }

    /// Load the store from `path`.
    ///
    /// A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut store = Self::empty(path);
        if let Some(contacts) = file::read_contacts(&store.path)? {
            store.contacts = contacts;
        }
        info!(
            "Loaded {} contacts from {}",
            store.contacts.len(),
            store.path.display()
        );
        Ok(store)
    }

    /// Set whether missing parent directories are created on write.
    #[must_use]
    pub fn with_create_parent_dirs(mut self, create: bool) -> Self {
        self.create_parent_dirs = create;
        self
    }

    /// Get the path to the contacts file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All contacts in insertion order.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of stored contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the store holds no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Write the full collection to the contacts file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        file::write_contacts(&self.path, &self.contacts, self.create_parent_dirs)
    }

    /// Append a contact and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The contact is not kept in that
    /// case.
    pub fn add(&mut self, contact: Contact) -> Result<()> {
        debug!("Adding contact {:?}", contact.name);

        self.contacts.push(contact);
        if let Err(err) = self.save() {
            self.contacts.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Find the first contact whose name matches, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.matches_name(name))
    }

    /// Index of the first contact whose name matches, ignoring case.
    fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.matches_name(name))
    }

    /// Update the first contact matching `name`.
    ///
    /// `prompt` receives the current record and returns the replacement
    /// values; empty values keep what is there. Returns the updated contact,
    /// or `None` if no contact matched (nothing is written in that case).
    ///
    /// # Errors
    ///
    /// Returns an error if `prompt` fails or the write fails. On a failed
    /// write the previous values are restored.
    pub fn update<F>(&mut self, name: &str, prompt: F) -> Result<Option<Contact>>
    where
        F: FnOnce(&Contact) -> Result<ContactUpdate>,
    {
        let Some(index) = self.position(name) else {
            debug!("Update: no contact named {:?}", name);
            return Ok(None);
        };

        let update = prompt(&self.contacts[index])?;
        let previous = self.contacts[index].clone();
        self.contacts[index].apply(update);

        if let Err(err) = self.save() {
            self.contacts[index] = previous;
            return Err(err);
        }
        Ok(Some(self.contacts[index].clone()))
    }

    /// Remove the first contact matching `name`.
    ///
    /// Returns the removed contact, or `None` if no contact matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. On a failed write the contact is
    /// put back in its original position.
    pub fn delete(&mut self, name: &str) -> Result<Option<Contact>> {
        let Some(index) = self.position(name) else {
            debug!("Delete: no contact named {:?}", name);
            return Ok(None);
        };

        let removed = self.contacts.remove(index);
        if let Err(err) = self.save() {
            warn!("Restoring {:?} after failed write", removed.name);
            self.contacts.insert(index, removed);
            return Err(err);
        }
        Ok(Some(removed))
    }

    /// Export the collection to a CSV file at `path`.
    ///
    /// Returns the number of data rows written.
    ///
    /// # Errors
    ///
    /// Returns an error if the export file cannot be written.
    pub fn export_csv(&self, path: impl AsRef<Path>) -> Result<usize> {
        export::export_csv(path.as_ref(), &self.contacts, self.create_parent_dirs)
    }
}
