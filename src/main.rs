use clap::{Parser, Subcommand};
use scrub::{
    Config, cli_output, contains_id, format_summary, load_records, process_records, sample_records,
    summarize,
};
use std::path::{Path, PathBuf};

/// scrub - user-record cleaning utility
#[derive(Parser, Debug)]
#[command(name = "scrub", version, about = "Validate and enrich user records from a JSON file")]
struct Cli {
    /// Use specified config file instead of defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file with a top-level "users" array (for the default run)
    #[arg(default_value = "users.json")]
    file: PathBuf,

    /// Override the configured cap on processed records
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_users: Option<u64>,

    /// Emit processed records as a JSON array instead of the summary
    #[arg(long)]
    json: bool,

    /// Report whether a processed record with this numeric id exists
    #[arg(long)]
    find_id: Option<i64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate records and report per-record errors without enriching
    Check {
        /// JSON file with a top-level "users" array
        #[arg(default_value = "users.json")]
        file: PathBuf,
    },
}

fn main() {
    reset_sigpipe();
    let cli = Cli::parse();

    // Load config (from --config flag or default locations)
    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)
    } else {
        Config::load()
    };

    match cli.command {
        Some(Commands::Check { file }) => {
            run_check(&file);
        }
        None => {
            let max_users = cli.max_users.map_or(config.max_users, |n| n as usize);
            run_process(&cli.file, max_users, cli.json, cli.find_id);
        }
    }
}

fn run_process(file: &Path, max_users: usize, json: bool, find_id: Option<i64>) {
    let records = match load_records(file) {
        Ok(records) if !records.is_empty() => records,
        Ok(_) => {
            eprintln!(
                "Warning: No users loaded from {}. Using sample data.",
                file.display()
            );
            sample_records()
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Warning: No users loaded from {}. Using sample data.",
                file.display()
            );
            sample_records()
        }
    };

    let output = process_records(&records, max_users);

    cli_output::print_skips(&output.skipped);
    if output.limit_reached {
        cli_output::print_limit_notice(max_users);
    }
    cli_output::print_counts(&output);

    if json {
        match serde_json::to_string_pretty(&output.processed) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                eprintln!("Error serializing output: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", format_summary(&summarize(&output.processed)));
    }

    if let Some(id) = find_id {
        cli_output::print_id_lookup(id, contains_id(&output.processed, id));
    }
}

fn run_check(file: &Path) {
    let records = match load_records(file) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    cli_output::print_check_report(&records);
}

#[cfg(unix)]
fn reset_sigpipe() {
    // Die quietly on closed pipes (e.g. `scrub | head`) instead of panicking.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
