//! Runtime configuration, read from the environment.

use std::path::PathBuf;

/// Environment variable overriding the log directory.
pub const LOG_DIR_VAR: &str = "TALLY_LOG_DIR";
/// Environment variable holding an `EnvFilter` directive.
pub const LOG_FILTER_VAR: &str = "TALLY_LOG";
/// Filter used when [`LOG_FILTER_VAR`] is unset or blank.
pub const DEFAULT_LOG_FILTER: &str = "tally=info";

/// Errors that can occur while building a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No override was given and the platform has no local data directory.
    #[error("could not determine local data directory; set TALLY_LOG_DIR")]
    NoDataDir,
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the rolling log file is written to.
    pub log_dir: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Config {
    /// Builds the configuration from the process environment.
    #[mutants::skip]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());

        let log_dir = match non_blank(LOG_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => default_log_dir()?,
        };
        let log_filter = non_blank(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

        Ok(Self {
            log_dir,
            log_filter,
        })
    }
}

/// `<local data dir>/tally/logs`.
fn default_log_dir() -> Result<PathBuf, ConfigError> {
    let data_dir = dirs::data_local_dir().ok_or(ConfigError::NoDataDir)?;
    Ok(data_dir.join("tally").join("logs"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn overrides_are_used() {
        let config = Config::from_lookup(lookup_from(&[
            (LOG_DIR_VAR, "/tmp/tally-logs"),
            (LOG_FILTER_VAR, "tally=debug"),
        ]))
        .unwrap();
        assert_eq!(config.log_dir, PathBuf::from("/tmp/tally-logs"));
        assert_eq!(config.log_filter, "tally=debug");
    }

    #[test]
    fn filter_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[(LOG_DIR_VAR, "/tmp/x")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = Config::from_lookup(lookup_from(&[
            (LOG_DIR_VAR, "/tmp/x"),
            (LOG_FILTER_VAR, "   "),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn log_dir_defaults_under_data_dir() {
        // Only meaningful where the platform reports a data directory.
        if let Some(data_dir) = dirs::data_local_dir() {
            let config = Config::from_lookup(lookup_from(&[])).unwrap();
            assert_eq!(config.log_dir, data_dir.join("tally").join("logs"));
        }
    }
}
