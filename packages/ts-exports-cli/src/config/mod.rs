//! Plugin configuration

pub mod plugin_config;

pub use plugin_config::{PluginConfig, CONFIG_FILE_NAME};
