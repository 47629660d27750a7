use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::ContactStore;
use crate::domain::contact::Contact;
use crate::errors::AppError;

/// Volatile store. Clones share the same backing data, which lets a test
/// hand one handle to a book and keep the other for inspection.
#[derive(Clone, Default)]
pub struct MemStore {
    data: Rc<RefCell<Vec<Contact>>>,
    saves: Rc<Cell<usize>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let store = Self::new();
        *store.data.borrow_mut() = contacts;
        store
    }

    pub fn contents(&self) -> Vec<Contact> {
        self.data.borrow().clone()
    }

    /// Number of times `save` has been called on this store.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
