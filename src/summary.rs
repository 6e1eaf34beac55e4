//! Summary computation over processed records, plus its console rendering.

use crate::age_group::AgeGroup;
use crate::defaults;
use crate::record::ProcessedRecord;
use std::fmt::Write;

/// Tallies recomputed from a batch of processed records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    /// Per-group counts in ascending age order; empty groups omitted.
    pub age_groups: Vec<(AgeGroup, usize)>,
}

#[must_use]
pub fn summarize(records: &[ProcessedRecord]) -> Summary {
    let active = records
        .iter()
        .filter(|record| record.status() == defaults::DEFAULT_STATUS)
        .count();

    let age_groups = AgeGroup::ALL
        .iter()
        .filter_map(|group| {
            let count = records
                .iter()
                .filter(|record| record.age_group() == group.as_str())
                .count();
            (count > 0).then_some((*group, count))
        })
        .collect();

    Summary {
        total: records.len(),
        active,
        age_groups,
    }
}

#[must_use]
pub fn format_summary(summary: &Summary) -> String {
    let mut out = String::from("\n--- User Summary ---\n");
    let _ = writeln!(out, "Total processed users: {}", summary.total);
    let _ = writeln!(out, "Active users: {}", summary.active);
    out.push_str("Age Group Distribution:\n");
    for (group, count) in &summary.age_groups {
        let _ = writeln!(out, "- {group}: {count}");
    }
    out
}
