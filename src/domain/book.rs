use super::contact::Contact;
use crate::errors::AppError;
use crate::store::ContactStore;

/// The in-memory contact collection plus its persistence contract: the
/// storage file reflects the collection after every mutating call that
/// returns successfully.
pub struct ContactBook {
    mem: Vec<Contact>,
    storage: Box<dyn ContactStore>,
}

impl ContactBook {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self {
            mem: Vec::new(),
            storage,
        }
    }

    /// Replaces the in-memory collection with the storage contents and
    /// returns how many contacts were loaded. A missing storage file
    /// loads as an empty collection.
    pub fn load(&mut self) -> Result<usize, AppError> {
        self.mem = self.storage.load()?;
        Ok(self.mem.len())
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }

    /// Appends the contact and persists. On a save failure the contact
    /// stays in memory and the error is returned to the caller.
    pub fn add(&mut self, contact: Contact) -> Result<(), AppError> {
        self.mem.push(contact);
        self.save()
    }

    /// Removes every contact whose name equals `name` ignoring case, then
    /// persists (a no-op rewrite when nothing matched). Returns how many
    /// entries were removed; zero is a reportable outcome, not an error.
    pub fn remove(&mut self, name: &str) -> Result<usize, AppError> {
        let needle = name.to_lowercase();
        let before = self.mem.len();

        self.mem.retain(|c| c.name.to_lowercase() != needle);

        let removed = before - self.mem.len();
        self.save()?;
        Ok(removed)
    }

    /// Every contact whose name contains `query` ignoring case, in
    /// insertion order. An empty query matches everything.
    pub fn find(&self, query: &str) -> Vec<&Contact> {
        let needle = query.to_lowercase();
        self.mem
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Replaces the first contact whose name equals `name` ignoring case
    /// and persists. Returns false, without touching storage, when no
    /// contact matched.
    pub fn update(&mut self, name: &str, new_contact: Contact) -> Result<bool, AppError> {
        let needle = name.to_lowercase();

        match self.mem.iter_mut().find(|c| c.name.to_lowercase() == needle) {
            Some(slot) => {
                *slot = new_contact;
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn list(&self) -> &[Contact] {
        &self.mem
    }
}
