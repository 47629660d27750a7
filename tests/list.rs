use std::fs;

use contact_book::prelude::*;
use tempfile::tempdir;

#[test]
fn loading_a_nonexistent_path_yields_an_empty_book() -> Result<(), AppError> {
    let dir = tempdir()?;
    let mut book = ContactBook::new(Box::new(JsonStore::new(dir.path().join("contacts.json"))));

    let loaded = book.load()?;

    assert_eq!(loaded, 0);
    assert!(book.list().is_empty());
    Ok(())
}

#[test]
fn loading_an_unparseable_file_fails_with_load_failure() -> Result<(), AppError> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.json");
    fs::write(&path, "not json at all")?;

    let mut book = ContactBook::new(Box::new(JsonStore::new(&path)));

    assert!(matches!(book.load(), Err(AppError::LoadFailure(_))));
    Ok(())
}

#[test]
fn loading_a_record_without_phone_fails_with_malformed_record() -> Result<(), AppError> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.json");
    fs::write(&path, r#"[{"name": "Anna Lee", "email": ""}]"#)?;

    let mut book = ContactBook::new(Box::new(JsonStore::new(&path)));

    assert!(matches!(
        book.load(),
        Err(AppError::MalformedRecord(key)) if key == "phone"
    ));
    Ok(())
}

#[test]
fn list_preserves_insertion_order() -> Result<(), AppError> {
    let dir = tempdir()?;
    let mut book = ContactBook::new(Box::new(JsonStore::new(dir.path().join("contacts.json"))));

    for (name, phone) in [("Clara", "3"), ("Anna", "1"), ("bob", "2")] {
        book.add(Contact::new(name, phone, "").unwrap())?;
    }

    let names: Vec<&str> = book.list().iter().map(|c| c.name.as_str()).collect();

    assert_eq!(names, ["Clara", "Anna", "bob"]);
    Ok(())
}

#[test]
fn stored_file_is_a_single_array_of_three_key_records() -> Result<(), AppError> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.json");

    let mut book = ContactBook::new(Box::new(JsonStore::new(&path)));
    book.add(Contact::new("Anna Lee", "111", "").unwrap())?;

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)
        .map_err(|e| AppError::LoadFailure(e.to_string()))?;

    let records = value.as_array().expect("top level must be an array");
    assert_eq!(records.len(), 1);

    let record = records[0].as_object().expect("record must be an object");
    let mut keys: Vec<&str> = record.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["email", "name", "phone"]);
    Ok(())
}
