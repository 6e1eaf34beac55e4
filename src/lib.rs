//! scrub - user-record cleaning utility
//!
//! Loads raw user records, validates each against field rules, enriches
//! valid records with an age group and a default status, and reports
//! counts plus a summary of the results.

// Core pipeline
pub mod age_group;
pub mod pipeline;
pub mod record;
pub mod validate;

// Glue: input, configuration, presentation
pub mod cli_output;
pub mod config;
pub mod defaults;
pub mod load;
pub mod sample;
pub mod summary;

// Re-export main types and functions for easy access
pub use age_group::AgeGroup;
pub use config::Config;
pub use load::{LoadError, load_records};
pub use pipeline::{PipelineOutput, SkippedRecord, contains_id, process_records};
pub use record::{ProcessedRecord, RawRecord, display_name};
pub use sample::sample_records;
pub use summary::{Summary, format_summary, summarize};
pub use validate::{ValidationResult, validate_record};
