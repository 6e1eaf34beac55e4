//! Single-pass processing of raw records: validate, enrich, count.

use crate::age_group::AgeGroup;
use crate::defaults;
use crate::record::{ProcessedRecord, RawRecord, display_name};
use crate::validate::{positive_age, validate_record};
use serde_json::Value;

/// A record dropped from output, with the errors that disqualified it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub name: String,
    pub errors: Vec<String>,
}

/// Result of one pipeline run over an input batch.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Enriched records, in input order.
    pub processed: Vec<ProcessedRecord>,
    /// Skipped records, in input order.
    pub skipped: Vec<SkippedRecord>,
    /// Whether the cap stopped the run before the input was exhausted.
    pub limit_reached: bool,
}

impl PipelineOutput {
    #[must_use]
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Records actually looked at; input past the cap is never examined.
    #[must_use]
    pub fn examined(&self) -> usize {
        self.processed.len() + self.skipped.len()
    }
}

/// Process records in order, keeping at most `max_users` enriched copies.
///
/// Each examined record is validated; valid ones are shallow-copied,
/// given an `age_group`, and given `status = "active"` when absent.
/// Invalid ones are recorded as skips. Once the output holds `max_users`
/// records, the remaining input is not examined at all. The input is
/// never mutated.
#[must_use]
pub fn process_records(records: &[RawRecord], max_users: usize) -> PipelineOutput {
    let mut processed = Vec::new();
    let mut skipped = Vec::new();
    let mut limit_reached = false;

    for record in records {
        if processed.len() >= max_users {
            limit_reached = true;
            break;
        }

        let verdict = validate_record(record);
        if let Some(age) = positive_age(record).filter(|_| verdict.is_valid()) {
            processed.push(enrich(record, age));
        } else {
            skipped.push(SkippedRecord {
                name: display_name(record).to_string(),
                errors: verdict.into_errors(),
            });
        }
    }

    PipelineOutput {
        processed,
        skipped,
        limit_reached,
    }
}

fn enrich(record: &RawRecord, age: i64) -> ProcessedRecord {
    let mut fields = record.clone();
    fields.insert(
        "age_group".to_string(),
        Value::String(AgeGroup::from_age(age).as_str().to_string()),
    );
    fields
        .entry("status")
        .or_insert_with(|| Value::String(defaults::DEFAULT_STATUS.to_string()));
    ProcessedRecord::new(fields)
}

/// Whether any processed record carries the given numeric `id`.
#[must_use]
pub fn contains_id(records: &[ProcessedRecord], id: i64) -> bool {
    records
        .iter()
        .any(|record| record.id().and_then(Value::as_i64) == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::messages;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<RawRecord> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect()
    }

    #[test]
    fn test_valid_record_is_enriched() {
        let input = records(json!([
            {"name": "Alice", "age": 28, "email": "alice@example.com"}
        ]));
        let output = process_records(&input, 10);
        assert_eq!(output.processed_count(), 1);
        assert_eq!(output.skipped_count(), 0);
        let alice = &output.processed[0];
        assert_eq!(alice.age_group(), "18-30");
        assert_eq!(alice.status(), "active");
    }

    #[test]
    fn test_minor_gets_under_18_group() {
        let input = records(json!([
            {"name": "Charlie", "age": 17, "email": "charlie@example.com"}
        ]));
        let output = process_records(&input, 10);
        assert_eq!(output.processed[0].age_group(), "Under 18");
    }

    #[test]
    fn test_invalid_record_is_skipped_with_errors() {
        let input = records(json!([
            {"name": "Eve", "age": "thirty", "email": "eve@example.com"}
        ]));
        let output = process_records(&input, 10);
        assert_eq!(output.processed_count(), 0);
        assert_eq!(output.skipped_count(), 1);
        assert_eq!(output.skipped[0].name, "Eve");
        assert_eq!(output.skipped[0].errors, [messages::AGE_INVALID]);
    }

    #[test]
    fn test_existing_status_is_preserved() {
        let input = records(json!([
            {"name": "Frank", "age": 22, "email": "frank@example.com", "status": "inactive"}
        ]));
        let output = process_records(&input, 10);
        assert_eq!(output.processed[0].status(), "inactive");
    }

    #[test]
    fn test_pre_existing_age_group_is_overwritten() {
        let input = records(json!([
            {"name": "Grace", "age": 55, "email": "grace@example.com", "age_group": "bogus"}
        ]));
        let output = process_records(&input, 10);
        assert_eq!(output.processed[0].age_group(), "31-59");
    }

    #[test]
    fn test_cap_stops_examination() {
        // Seven valid records, cap of two: exactly two out, nothing skipped.
        let input: Vec<RawRecord> = (0..7)
            .map(|i| {
                json!({"name": format!("U{i}"), "age": 20 + i, "email": format!("u{i}@example.com")})
                    .as_object()
                    .cloned()
                    .unwrap()
            })
            .collect();
        let output = process_records(&input, 2);
        assert_eq!(output.processed_count(), 2);
        assert_eq!(output.skipped_count(), 0);
        assert_eq!(output.examined(), 2);
        assert!(output.limit_reached);
    }

    #[test]
    fn test_cap_counts_output_not_input() {
        // Invalid records do not consume cap slots.
        let input = records(json!([
            {"name": "", "age": 1, "email": "a@example.com"},
            {"name": "B", "age": 2, "email": "b@example.com"},
            {"name": "C", "age": 3, "email": "c@example.com"}
        ]));
        let output = process_records(&input, 2);
        assert_eq!(output.processed_count(), 2);
        assert_eq!(output.skipped_count(), 1);
        assert!(!output.limit_reached);
    }

    #[test]
    fn test_limit_not_reached_when_input_fits() {
        let input = records(json!([
            {"name": "A", "age": 20, "email": "a@example.com"}
        ]));
        let output = process_records(&input, 1);
        assert_eq!(output.processed_count(), 1);
        assert!(!output.limit_reached);
    }

    #[test]
    fn test_order_is_preserved() {
        let input = records(json!([
            {"name": "First", "age": 61, "email": "f@example.com"},
            {"name": "bad", "age": 0, "email": "x@example.com"},
            {"name": "Second", "age": 19, "email": "s@example.com"}
        ]));
        let output = process_records(&input, 10);
        let names: Vec<&str> = output.processed.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["First", "Second"]);
    }

    #[test]
    fn test_examined_accounts_for_every_record() {
        let input = records(json!([
            {"name": "A", "age": 20, "email": "a@example.com"},
            {"name": "", "age": "x"},
            {"name": "C", "age": 30, "email": "c@example.com"}
        ]));
        let output = process_records(&input, 10);
        assert_eq!(output.examined(), input.len());
        assert_eq!(output.processed_count() + output.skipped_count(), 3);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = records(json!([
            {"name": "Alice", "age": 28, "email": "alice@example.com"}
        ]));
        let before = input.clone();
        let _ = process_records(&input, 10);
        assert_eq!(input, before);
    }

    #[test]
    fn test_enriched_record_still_validates() {
        // Enrichment only adds fields, so a processed record passes validation again.
        let input = records(json!([
            {"name": "Grace", "age": 55, "email": "grace@example.com", "status": "active"}
        ]));
        let output = process_records(&input, 10);
        let fields = output.processed[0].clone().into_fields();
        assert!(validate_record(&fields).is_valid());
    }

    #[test]
    fn test_reprocessing_is_idempotent() {
        let input = records(json!([
            {"name": "Alice", "age": 28, "email": "alice@example.com"}
        ]));
        let first = process_records(&input, 10);
        let fields: Vec<RawRecord> = first
            .processed
            .iter()
            .map(|r| r.clone().into_fields())
            .collect();
        let second = process_records(&fields, 10);
        assert_eq!(first.processed, second.processed);
    }

    #[test]
    fn test_contains_id() {
        let input = records(json!([
            {"id": 2, "name": "Bob", "age": 35, "email": "bob@example.com"},
            {"name": "NoId", "age": 40, "email": "n@example.com"}
        ]));
        let output = process_records(&input, 10);
        assert!(contains_id(&output.processed, 2));
        assert!(!contains_id(&output.processed, 9));
    }

    #[test]
    fn test_empty_input() {
        let output = process_records(&[], 10);
        assert_eq!(output.processed_count(), 0);
        assert_eq!(output.skipped_count(), 0);
        assert!(!output.limit_reached);
    }

    #[test]
    fn test_skip_name_falls_back_when_unusable() {
        let input = records(json!([{"age": -1}]));
        let output = process_records(&input, 10);
        assert_eq!(output.skipped[0].name, "N/A");
    }
}
