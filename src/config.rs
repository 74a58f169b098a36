//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOCKFALL_GRAVITY_MS` | 300 | Gravity interval (ms per row) |
//! | `BLOCKFALL_SEED` | entropy | Seed for the piece factory |
//! | `BLOCKFALL_LOG_PATH` | none | File that receives tracing output |
//! | `BLOCKFALL_LOG` | `blockfall=info,blockfall_core=info` | tracing filter |
//!
//! Unparseable values fall back to their defaults.

use crate::types::GRAVITY_INTERVAL_MS;

pub const DEFAULT_LOG_FILTER: &str = "blockfall=info,blockfall_core=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub gravity_ms: u64,
    pub seed: Option<u64>,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity_ms: GRAVITY_INTERVAL_MS,
            seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Create from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let gravity_ms = non_blank("BLOCKFALL_GRAVITY_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(GRAVITY_INTERVAL_MS)
            .max(1);

        let seed = non_blank("BLOCKFALL_SEED").and_then(|s| s.parse().ok());

        let log_path = non_blank("BLOCKFALL_LOG_PATH");

        let log_filter =
            non_blank("BLOCKFALL_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            gravity_ms,
            seed,
            log_path,
            log_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn values_are_parsed() {
        let config = config_from(&[
            ("BLOCKFALL_GRAVITY_MS", "120"),
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_LOG_PATH", " /tmp/blockfall.log "),
            ("BLOCKFALL_LOG", "blockfall_core=debug"),
        ]);
        assert_eq!(config.gravity_ms, 120);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/blockfall.log"));
        assert_eq!(config.log_filter, "blockfall_core=debug");
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[
            ("BLOCKFALL_GRAVITY_MS", "fast"),
            ("BLOCKFALL_SEED", "-1"),
            ("BLOCKFALL_LOG_PATH", "   "),
        ]);
        assert_eq!(config.gravity_ms, GRAVITY_INTERVAL_MS);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn zero_gravity_is_clamped() {
        assert_eq!(config_from(&[("BLOCKFALL_GRAVITY_MS", "0")]).gravity_ms, 1);
    }
}
