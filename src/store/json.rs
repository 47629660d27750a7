use std::fs;
use std::path::PathBuf;

use log::info;
use serde_json::Value;

use super::{create_file_parent, ContactStore};
use crate::codec;
use crate::domain::contact::Contact;
use crate::errors::AppError;

pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        // A missing file is a fresh book, not an error
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let data =
            fs::read_to_string(&self.path).map_err(|e| AppError::LoadFailure(e.to_string()))?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: Value =
            serde_json::from_str(&data).map_err(|e| AppError::LoadFailure(e.to_string()))?;

        let contacts = codec::decode_all(&value)?;

        info!(
            "Loaded {} contacts from {}",
            contacts.len(),
            self.path.display()
        );
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        // serde_json writes non-ASCII text literally, which the stored
        // format requires
        let data = serde_json::to_string_pretty(&codec::encode_all(contacts))
            .map_err(|e| AppError::SaveFailure(e.to_string()))?;

        create_file_parent(&self.path).map_err(|e| AppError::SaveFailure(e.to_string()))?;

        // Full rewrite goes to a sibling temp file first, then a rename
        // over the target; a reader never sees a partially written file
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, data.as_bytes()).map_err(|e| AppError::SaveFailure(e.to_string()))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| AppError::SaveFailure(e.to_string()))?;

        info!(
            "Saved {} contacts to {}",
            contacts.len(),
            self.path.display()
        );
        Ok(())
    }
}
