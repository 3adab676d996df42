//! Configuration management for the Riftpath engine.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (RIFTPATH__ prefix)
//! 2. Config file (riftpath.toml)
//! 3. Defaults

use serde::Deserialize;

/// Top-level engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Path to the champion dataset JSON file.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
}

fn default_dataset_path() -> String {
    "champions.json".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
        }
    }
}

impl EngineConfig {
    /// Load from `<file_prefix>.toml` and `RIFTPATH__` environment
    /// variables, falling back to defaults when neither source resolves.
    pub fn load(file_prefix: &str) -> Self {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("RIFTPATH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build();

        match cfg {
            Ok(c) => c.try_deserialize().unwrap_or_default(),
            Err(e) => {
                tracing::debug!(error = %e, "Config sources unavailable, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.dataset_path, "champions.json");
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = EngineConfig::load("definitely-not-a-real-config-file");
        assert_eq!(config.dataset_path, "champions.json");
    }
}
