//! Built-in demonstration dataset, used when no input file can be loaded.

use crate::record::RawRecord;
use serde_json::{Value, json};

/// Seven demonstration users, covering a missing email, a non-integer age,
/// and records with and without an explicit status.
#[must_use]
pub fn sample_records() -> Vec<RawRecord> {
    let users = [
        json!({"id": 1, "name": "Alice", "age": 28, "email": "alice@example.com"}),
        json!({"id": 2, "name": "Bob", "age": 35, "email": "bob@example.com"}),
        json!({"id": 3, "name": "Charlie", "age": 17, "email": "charlie@example.com"}),
        json!({"id": 4, "name": "David", "age": 42, "status": "inactive"}),
        json!({"id": 5, "name": "Eve", "age": "thirty", "email": "eve@example.com"}),
        json!({"id": 6, "name": "Frank", "age": 22, "email": "frank@example.com", "status": "active"}),
        json!({"id": 7, "name": "Grace", "age": 55, "email": "grace@example.com", "status": "active"}),
    ];
    users
        .into_iter()
        .filter_map(|user| match user {
            Value::Object(fields) => Some(fields),
            _ => None,
        })
        .collect()
}
