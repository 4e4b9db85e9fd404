//! Runtime configuration
//!
//! Read once at startup from environment variables.

use tracing_subscriber::EnvFilter;

use crate::nutrition::DEFAULT_SUBSTITUTION_LIMIT;

pub const LOG_FILTER_VAR: &str = "NUTRICOACH_LOG";
pub const SUBSTITUTION_LIMIT_VAR: &str = "NUTRICOACH_SUBSTITUTION_LIMIT";

const DEFAULT_LOG_FILTER: &str = "nutricoach=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// tracing-subscriber filter directive
    pub log_filter: String,
    /// Substitution limit used when a caller does not pass one
    pub substitution_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            substitution_limit: DEFAULT_SUBSTITUTION_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unusable values keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_filter = lookup(LOG_FILTER_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        let substitution_limit = lookup(SUBSTITUTION_LIMIT_VAR)
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.substitution_limit);

        Self {
            log_filter,
            substitution_limit,
        }
    }

    /// Log filter for the subscriber. A directive that does not parse is
    /// reported on stderr and replaced by the default.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_filter).unwrap_or_else(|e| {
            eprintln!(
                "Ignoring {}={:?} ({}); using {}",
                LOG_FILTER_VAR, self.log_filter, e, DEFAULT_LOG_FILTER
            );
            EnvFilter::new(DEFAULT_LOG_FILTER)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]), Config::default());
        assert_eq!(Config::default().substitution_limit, 5);
    }

    #[test]
    fn test_reads_values() {
        let config = config_from(&[(LOG_FILTER_VAR, "nutricoach=debug"), (SUBSTITUTION_LIMIT_VAR, " 8 ")]);
        assert_eq!(config.log_filter, "nutricoach=debug");
        assert_eq!(config.substitution_limit, 8);
    }

    #[test]
    fn test_bad_limit_falls_back() {
        assert_eq!(config_from(&[(SUBSTITUTION_LIMIT_VAR, "0")]).substitution_limit, 5);
        assert_eq!(config_from(&[(SUBSTITUTION_LIMIT_VAR, "lots")]).substitution_limit, 5);
    }

    #[test]
    fn test_bad_log_filter_falls_back() {
        let config = config_from(&[(LOG_FILTER_VAR, "nutricoach=loud")]);
        assert_eq!(config.env_filter().to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_valid_log_filter_kept() {
        let config = config_from(&[(LOG_FILTER_VAR, "nutricoach=debug")]);
        assert_eq!(config.env_filter().to_string(), "nutricoach=debug");
    }
}
