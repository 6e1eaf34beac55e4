//! Input loading: a JSON document with a top-level "users" array.

use crate::record::RawRecord;
use std::path::Path;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    MissingUsersKey,
    NotAnArray,
    NotAnObject(usize),
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Json(e) => write!(f, "Invalid JSON: {e}"),
            Self::MissingUsersKey => write!(f, "JSON document missing 'users' key"),
            Self::NotAnArray => write!(f, "'users' must be an array"),
            Self::NotAnObject(index) => write!(f, "User entry {index} is not an object"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Read user records from a JSON file of shape `{"users": [...]}`.
///
/// Entries are returned untouched for the pipeline to validate; only the
/// document shape itself is checked here.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let document: serde_json::Value = serde_json::from_str(&content)?;
    let users = document.get("users").ok_or(LoadError::MissingUsersKey)?;
    let entries = users.as_array().ok_or(LoadError::NotAnArray)?;

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match entry.as_object() {
            Some(fields) => records.push(fields.clone()),
            None => return Err(LoadError::NotAnObject(index)),
        }
    }
    Ok(records)
}
