//! Configuration management for scrub

use crate::defaults;
use std::path::Path;

/// Configurable limits for a pipeline run
#[derive(Debug, Clone)]
pub struct Config {
    pub max_users: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_users: defaults::limits::MAX_USERS,
        }
    }
}

impl Config {
    /// Load config from files, with later files overriding earlier ones.
    /// Loads from: ~/.scrubconfig, ./.scrubconfig
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(home) = std::env::var_os("HOME")
            && let Ok(content) = std::fs::read_to_string(Path::new(&home).join(".scrubconfig"))
        {
            config.merge_from_toml(&content);
        }

        if let Ok(content) = std::fs::read_to_string(".scrubconfig") {
            config.merge_from_toml(&content);
        }

        config
    }

    /// Load config from a specific file path
    pub fn load_from(path: &Path) -> Self {
        let mut config = Self::default();

        if let Ok(content) = std::fs::read_to_string(path) {
            config.merge_from_toml(&content);
        } else {
            eprintln!("Warning: Could not read config file: {}", path.display());
        }

        config
    }

    fn merge_from_toml(&mut self, content: &str) {
        let Ok(table) = content.parse::<toml::Table>() else {
            return;
        };

        if let Some(limits) = table.get("limits").and_then(|v| v.as_table()) {
            check_unknown_keys(limits, &["max_users"], "limits");
            if let Some(v) = get_usize(limits, "max_users") {
                if v == 0 {
                    eprintln!("Warning: Config key 'max_users' must be positive, got 0");
                } else {
                    self.max_users = v;
                }
            }
        }
    }
}

fn get_usize(table: &toml::Table, key: &str) -> Option<usize> {
    let value = table.get(key)?;
    match value.as_integer() {
        Some(v) if v >= 0 => Some(v as usize),
        // Ignore negative values
        Some(_) => None,
        None => {
            eprintln!(
                "Warning: Config key '{key}' expected integer, got {}",
                value.type_str()
            );
            None
        }
    }
}

fn check_unknown_keys(table: &toml::Table, known: &[&str], section: &str) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            eprintln!("Warning: Unknown config key '{key}' in [{section}]");
        }
    }
}
