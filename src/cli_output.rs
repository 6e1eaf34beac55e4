//! Console output helpers for the scrub binary.

use crate::pipeline::{PipelineOutput, SkippedRecord};
use crate::record::{RawRecord, display_name};
use crate::validate::validate_record;

pub fn print_skips(skipped: &[SkippedRecord]) {
    for skip in skipped {
        println!("Skipped invalid user {}: {}", skip.name, skip.errors.join(", "));
    }
}

pub fn print_limit_notice(max_users: usize) {
    println!("Reached max user limit of {max_users}. Skipping remaining.");
}

pub fn print_counts(output: &PipelineOutput) {
    println!(
        "Total users processed: {}, Skipped: {}",
        output.processed_count(),
        output.skipped_count()
    );
}

pub fn print_id_lookup(id: i64, found: bool) {
    if found {
        println!("\nUser with ID {id} found!");
    } else {
        println!("\nUser with ID {id} not found.");
    }
}

/// Per-record validation report for `scrub check`. Returns the invalid count.
pub fn print_check_report(records: &[RawRecord]) -> usize {
    let mut invalid = 0;
    for record in records {
        let verdict = validate_record(record);
        if verdict.is_valid() {
            println!("ok      {}", display_name(record));
        } else {
            invalid += 1;
            println!(
                "INVALID {}: {}",
                display_name(record),
                verdict.errors().join(", ")
            );
        }
    }
    println!("\n{} valid, {} invalid", records.len() - invalid, invalid);
    invalid
}
