use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub exporter: ExporterConfig,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Local model store root, used when `OLLAMA_MODELS` is unset
    pub models_dir: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ExporterConfig {
    #[serde(default = "default_program")]
    pub program: String,
}

fn default_program() -> String {
    "ollama".to_string()
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[store]\nmodels_dir = \"/srv/models\"\n").unwrap();
        assert_eq!(config.store.models_dir, Some(PathBuf::from("/srv/models")));
        assert_eq!(config.exporter.program, "ollama");
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
