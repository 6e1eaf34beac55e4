//! Record types: raw input maps and enriched processed records.

use serde::Serialize;
use serde_json::{Map, Value};

/// One user as supplied by the input source: arbitrary JSON fields keyed by name.
pub type RawRecord = Map<String, Value>;

/// Best-effort display name for a record, for skip reporting and check output.
#[must_use]
pub fn display_name(record: &RawRecord) -> &str {
    record
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or("N/A")
}

/// A validated record enriched with `age_group` and a guaranteed `status`.
///
/// Only the pipeline constructs these, so the guaranteed fields are always
/// present; the accessors fall back to empty values rather than panic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProcessedRecord {
    fields: RawRecord,
}

impl ProcessedRecord {
    pub(crate) fn new(fields: RawRecord) -> Self {
        Self { fields }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.str_field("name")
    }

    #[must_use]
    pub fn age(&self) -> i64 {
        self.fields.get("age").and_then(Value::as_i64).unwrap_or_default()
    }

    #[must_use]
    pub fn age_group(&self) -> &str {
        self.str_field("age_group")
    }

    #[must_use]
    pub fn status(&self) -> &str {
        self.str_field("status")
    }

    /// The source's `id` field, if any; its type is not constrained.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.fields.get("id")
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn fields(&self) -> &RawRecord {
        &self.fields
    }

    pub fn into_fields(self) -> RawRecord {
        self.fields
    }

    fn str_field(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or_default()
    }
}
