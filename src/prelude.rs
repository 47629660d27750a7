pub use crate::cli::{self, Command};
pub use crate::codec;
pub use crate::domain::{book::ContactBook, contact::Contact};
pub use crate::errors::AppError;
pub use crate::store::{json::JsonStore, memory::MemStore, ContactStore};
