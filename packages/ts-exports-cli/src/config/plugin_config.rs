use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, TsExportsError};
use ts_exports::{is_valid_placeholder_name, PLACEHOLDER_BASE_NAME};

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "ts-exports.json";

/// Settings of the type-only export plugin.
///
/// ```json
/// { "input": [".ts", ".tsx", ".mts"], "sourceMap": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PluginConfig {
    /// File extensions the plugin loads, with the leading dot.
    pub input: Vec<String>,
    /// Emit a source map next to the transformed code.
    pub source_map: bool,
    /// Preferred name of the placeholder binding.
    pub placeholder_name: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            input: vec![".ts".to_string(), ".tsx".to_string()],
            source_map: false,
            placeholder_name: PLACEHOLDER_BASE_NAME.to_string(),
        }
    }
}

impl PluginConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: PluginConfig =
            serde_json::from_str(content).map_err(|e| TsExportsError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.is_empty() {
            return Err(TsExportsError::Config(
                "`input` must list at least one extension".to_string(),
            ));
        }
        if let Some(ext) = self.input.iter().find(|ext| !ext.starts_with('.')) {
            return Err(TsExportsError::Config(format!(
                "extension '{}' must start with '.'",
                ext
            )));
        }
        if !is_valid_placeholder_name(&self.placeholder_name) {
            return Err(TsExportsError::Config(format!(
                "'{}' is not a valid placeholder identifier",
                self.placeholder_name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_handles_ts_and_tsx() {
        let config = PluginConfig::default();
        assert_eq!(config.input, vec![".ts", ".tsx"]);
        assert!(!config.source_map);
        assert_eq!(config.placeholder_name, "__fakeValueExport__");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = PluginConfig::from_json(r#"{ "sourceMap": true }"#).unwrap();
        assert!(config.source_map);
        assert_eq!(config.input, vec![".ts", ".tsx"]);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = PluginConfig::from_json(r#"{ "inputs": [".ts"] }"#).unwrap_err();
        assert!(matches!(err, TsExportsError::Config(_)));
    }

    #[test]
    fn rejects_extension_without_dot() {
        let err = PluginConfig::from_json(r#"{ "input": ["ts"] }"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: extension 'ts' must start with '.'"
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert!(PluginConfig::from_json(r#"{ "input": [] }"#).is_err());
    }

    #[test]
    fn rejects_reserved_placeholder_name() {
        assert!(PluginConfig::from_json(r#"{ "placeholderName": "class" }"#).is_err());
    }
}
