//! Type-only export plugin
//!
//! Load hook of the build pipeline: reads a TypeScript module, appends a
//! placeholder value export for every type-only export and transforms the
//! result to JavaScript.

use std::sync::Arc;

use ts_exports::{append_with_placeholder, ExportClassification};

use crate::config::PluginConfig;
use crate::error::{Result, TsExportsError};
use crate::file_system::{AbsoluteFsPath, ReadonlyFileSystem};
use crate::logging::{Logger, NullLogger};
use crate::parse::{classify_source, ScriptVariant};
use crate::transform::transform_module;

pub const PLUGIN_NAME: &str = "@snowpack/plugin-ts-exports";

/// Extensions a plugin consumes and produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveConfig {
    pub input: Vec<String>,
    pub output: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub code: String,
    pub map: Option<String>,
    /// Names that received a placeholder value.
    pub type_only_exports: Vec<String>,
}

/// Source text with the placeholder exports appended.
#[derive(Debug, Clone)]
pub struct PreparedModule {
    pub source: String,
    pub classification: ExportClassification,
}

/// Classify `contents` and append its placeholder exports.
pub fn prepare_module(
    path: &AbsoluteFsPath,
    contents: &str,
    variant: ScriptVariant,
    placeholder_base: &str,
) -> Result<PreparedModule> {
    let classification = classify_source(path, contents, variant)?;
    let placeholder = classification.placeholder_identifier_with_base(placeholder_base);
    let source = append_with_placeholder(contents, &classification, &placeholder);
    Ok(PreparedModule {
        source,
        classification,
    })
}

pub struct TsExportsPlugin<F: ReadonlyFileSystem> {
    config: PluginConfig,
    fs: F,
    logger: Arc<dyn Logger>,
}

impl<F: ReadonlyFileSystem> TsExportsPlugin<F> {
    pub fn new(config: PluginConfig, fs: F) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            fs,
            logger: Arc::new(NullLogger::new()),
        })
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    pub fn resolve(&self) -> ResolveConfig {
        ResolveConfig {
            input: self.config.input.clone(),
            output: vec![".js".to_string()],
        }
    }

    /// Whether `path` has one of the configured input extensions.
    pub fn handles(&self, path: &AbsoluteFsPath) -> bool {
        let ext = self.fs.extname(path.as_str());
        self.config.input.iter().any(|input| *input == ext)
    }

    /// Read and classify a module without transforming it.
    pub fn analyze(&self, path: &AbsoluteFsPath) -> Result<ExportClassification> {
        let contents = self.read(path)?;
        classify_source(path, &contents, self.variant_of(path))
    }

    pub fn load(&self, path: &AbsoluteFsPath) -> Result<LoadResult> {
        let contents = self.read(path)?;
        self.load_contents(path, &contents)
    }

    /// Load hook for contents that were already read.
    pub fn load_contents(&self, path: &AbsoluteFsPath, contents: &str) -> Result<LoadResult> {
        let variant = self.variant_of(path);
        let prepared = prepare_module(path, contents, variant, &self.config.placeholder_name)?;

        let type_only_exports: Vec<String> =
            prepared.classification.names().map(str::to_string).collect();
        if !type_only_exports.is_empty() {
            self.logger.debug(&format!(
                "{}: placeholder exports for {}",
                path,
                type_only_exports.join(", ")
            ));
        }

        let output = transform_module(path, &prepared.source, variant, self.config.source_map)?;
        Ok(LoadResult {
            code: output.code,
            map: output.map,
            type_only_exports,
        })
    }

    pub fn cleanup(&self) {
        self.logger.debug(&format!("{}: cleanup", PLUGIN_NAME));
    }

    pub fn read(&self, path: &AbsoluteFsPath) -> Result<String> {
        self.fs
            .read_file(path)
            .map_err(|e| TsExportsError::io(path, e))
    }

    fn variant_of(&self, path: &AbsoluteFsPath) -> ScriptVariant {
        ScriptVariant::from_extension(&self.fs.extname(path.as_str()))
    }
}

#[cfg(test)]
#[path = "plugin_test.rs"]
mod plugin_test;
