//! Runtime configuration for [`BakerySystem`](super::BakerySystem).
//!
//! Loads from environment variables with defaults. Embedders with their own config source can
//! deserialize a [`SystemConfig`] directly; missing fields take the defaults.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

pub const CHANNEL_CAPACITY_VAR: &str = "BAKERY_CHANNEL_CAPACITY";
pub const SEED_VAR: &str = "BAKERY_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Bound of each store's request channel. Must be non-zero.
    pub channel_capacity: usize,
    /// Start every store from the placeholder data instead of empty.
    pub seed_placeholder_data: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            seed_placeholder_data: true,
        }
    }
}

impl SystemConfig {
    /// Reads `BAKERY_CHANNEL_CAPACITY` and `BAKERY_SEED`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Replaces a zero channel capacity with the default, logging the substitution.
    ///
    /// Deserialized or hand-built configs can carry a zero; [`BakerySystem::new`](super::BakerySystem::new)
    /// runs every config through this before opening channels.
    pub fn sanitized(self) -> Self {
        if self.channel_capacity > 0 {
            return self;
        }
        let default = Self::default().channel_capacity;
        warn!(value = 0, default, "Invalid channel_capacity, using default");
        Self {
            channel_capacity: default,
            ..self
        }
    }

    /// Builds a config from any key lookup. Unset keys use the default; unparseable values
    /// are logged and also use the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let channel_capacity = match lookup(CHANNEL_CAPACITY_VAR) {
            None => defaults.channel_capacity,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    warn!(
                        value = %raw,
                        default = defaults.channel_capacity,
                        "Invalid {}, using default", CHANNEL_CAPACITY_VAR
                    );
                    defaults.channel_capacity
                }
            },
        };

        let seed_placeholder_data = match lookup(SEED_VAR) {
            None => defaults.seed_placeholder_data,
            Some(raw) => match parse_flag(&raw) {
                Some(flag) => flag,
                None => {
                    warn!(
                        value = %raw,
                        default = defaults.seed_placeholder_data,
                        "Invalid {}, using default", SEED_VAR
                    );
                    defaults.seed_placeholder_data
                }
            },
        };

        Self {
            channel_capacity,
            seed_placeholder_data,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(SystemConfig::from_lookup(lookup(&[])), SystemConfig::default());
    }

    #[test]
    fn test_reads_both_values() {
        let config = SystemConfig::from_lookup(lookup(&[
            (CHANNEL_CAPACITY_VAR, "8"),
            (SEED_VAR, "false"),
        ]));
        assert_eq!(config.channel_capacity, 8);
        assert!(!config.seed_placeholder_data);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = SystemConfig::from_lookup(lookup(&[
            (CHANNEL_CAPACITY_VAR, "0"),
            (SEED_VAR, "maybe"),
        ]));
        assert_eq!(config, SystemConfig::default());
    }

    #[test]
    fn test_zero_capacity_from_deserialize_falls_back() {
        let config: SystemConfig = serde_json::from_str(
            r#"{"channel_capacity": 0, "seed_placeholder_data": false}"#,
        )
        .unwrap();
        assert_eq!(config.channel_capacity, 0);

        let config = config.sanitized();
        assert_eq!(config.channel_capacity, 32);
        assert!(!config.seed_placeholder_data);
    }

    #[tokio::test]
    async fn test_system_starts_with_zero_capacity_config() {
        let config: SystemConfig = serde_json::from_str(r#"{"channel_capacity": 0}"#).unwrap();
        let system = crate::lifecycle::BakerySystem::new(config);

        assert_eq!(system.orders.by_status_label("all").await.unwrap().len(), 8);
        system.shutdown().await.unwrap();
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: SystemConfig =
            serde_json::from_str(r#"{"seed_placeholder_data": false}"#).unwrap();
        assert_eq!(config.channel_capacity, 32);
        assert!(!config.seed_placeholder_data);
    }
}
