use serde_json::{Map, Value};

use crate::domain::contact::Contact;
use crate::errors::AppError;

/// Serializes a contact into a record with exactly the keys
/// `name`, `phone` and `email`.
pub fn encode(contact: &Contact) -> Map<String, Value> {
    let mut record = Map::new();
    record.insert("name".to_string(), Value::String(contact.name.clone()));
    record.insert("phone".to_string(), Value::String(contact.phone.clone()));
    record.insert("email".to_string(), Value::String(contact.email.clone()));
    record
}

pub fn encode_all(contacts: &[Contact]) -> Value {
    Value::Array(
        contacts
            .iter()
            .map(|contact| Value::Object(encode(contact)))
            .collect(),
    )
}

/// Rebuilds a contact from a stored record. `name` and `phone` must be
/// present as strings; a missing `email` defaults to the empty string.
pub fn decode(record: &Map<String, Value>) -> Result<Contact, AppError> {
    Ok(Contact {
        name: required_field(record, "name")?,
        phone: required_field(record, "phone")?,
        email: record
            .get("email")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    })
}

pub fn decode_all(value: &Value) -> Result<Vec<Contact>, AppError> {
    let records = value.as_array().ok_or_else(|| {
        AppError::LoadFailure("expected an array of contact records".to_string())
    })?;

    records
        .iter()
        .map(|record| match record {
            Value::Object(map) => decode(map),
            _ => Err(AppError::LoadFailure(
                "expected every contact record to be an object".to_string(),
            )),
        })
        .collect()
}

fn required_field(record: &Map<String, Value>, key: &str) -> Result<String, AppError> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::MalformedRecord(key.to_string()))
}
