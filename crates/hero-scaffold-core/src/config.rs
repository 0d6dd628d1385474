//! Workspace configuration (`hero-scaffold.config.json`).
//!
//! The file is optional. When it is missing every field takes its default, which
//! matches the Cursor Hero workspace layout.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScaffoldError};

pub const CONFIG_FILE: &str = "hero-scaffold.config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Prefix of every workspace crate name, without the trailing `_`.
    pub crate_prefix: String,
    /// Extra variables made available to every template.
    pub variables: BTreeMap<String, String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            crate_prefix: "cursor_hero".into(),
            variables: BTreeMap::new(),
        }
    }
}

impl ScaffoldConfig {
    /// Load the config at `path`, falling back to defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| ScaffoldError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| ScaffoldError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScaffoldConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, ScaffoldConfig::default());
        assert_eq!(config.crate_prefix, "cursor_hero");
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = ScaffoldConfig {
            crate_prefix: "my_game".into(),
            ..Default::default()
        };
        config.variables.insert("author".into(), "someone".into());
        config.save(&path).unwrap();
        assert_eq!(ScaffoldConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "variables": { "edition": "2021" } }"#).unwrap();
        let config = ScaffoldConfig::load(&path).unwrap();
        assert_eq!(config.crate_prefix, "cursor_hero");
        assert_eq!(config.variables["edition"], "2021");
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        let err = ScaffoldConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::ConfigParse { .. }));
    }
}
