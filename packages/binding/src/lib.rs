#![deny(clippy::all)]

use napi::{Error, Result};
use napi_derive::napi;
use std::path::Path;
use std::sync::Arc;
use ts_exports_cli::cache::ContentCache;
use ts_exports_cli::config::PluginConfig;
use ts_exports_cli::file_system::{AbsoluteFsPath, NodeJSFileSystem, PathManipulation, ReadonlyFileSystem};
use ts_exports_cli::logging::{ConsoleLogger, LogLevel};
use ts_exports_cli::parse::{classify_source, ScriptVariant};
use ts_exports_cli::{prepare_module, LoadResult, TsExportsError, TsExportsPlugin};

fn to_napi_error(err: TsExportsError) -> Error {
    Error::from_reason(err.to_string())
}

fn variant_of(fs: &NodeJSFileSystem, file_path: &str) -> ScriptVariant {
    ScriptVariant::from_extension(&fs.extname(file_path))
}

/// Type-only exports of `source`, in first-seen order.
#[napi]
pub fn find_exports_with_no_value(source: String, file_path: String) -> Result<Vec<String>> {
    let path = AbsoluteFsPath::from(Path::new(&file_path));
    let variant = variant_of(&NodeJSFileSystem::new(), &file_path);
    let classification = classify_source(&path, &source, variant).map_err(to_napi_error)?;
    Ok(classification.exports_with_no_value.into_iter().collect())
}

/// `source` with the placeholder value exports appended, not yet transformed.
#[napi]
pub fn append_placeholder_exports(source: String, file_path: String) -> Result<String> {
    let path = AbsoluteFsPath::from(Path::new(&file_path));
    let variant = variant_of(&NodeJSFileSystem::new(), &file_path);
    let prepared = prepare_module(&path, &source, variant, ts_exports::PLACEHOLDER_BASE_NAME)
        .map_err(to_napi_error)?;
    Ok(prepared.source)
}

#[napi(object)]
#[derive(Clone)]
pub struct JsLoadResult {
    pub code: String,
    pub map: Option<String>,
    pub type_only_exports: Vec<String>,
}

impl From<LoadResult> for JsLoadResult {
    fn from(result: LoadResult) -> Self {
        JsLoadResult {
            code: result.code,
            map: result.map,
            type_only_exports: result.type_only_exports,
        }
    }
}

/// Plugin instance held by the build orchestrator.
#[napi]
pub struct TsExportsLoader {
    plugin: TsExportsPlugin<NodeJSFileSystem>,
    cache: ContentCache<JsLoadResult>,
}

#[napi]
impl TsExportsLoader {
    /// `config_json` uses the same keys as `ts-exports.json`.
    #[napi(constructor)]
    pub fn new(config_json: Option<String>, verbose: Option<bool>) -> Result<Self> {
        let config = match config_json {
            Some(json) => PluginConfig::from_json(&json).map_err(to_napi_error)?,
            None => PluginConfig::default(),
        };
        let level = if verbose.unwrap_or(false) {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        };
        let plugin = TsExportsPlugin::new(config, NodeJSFileSystem::new())
            .map_err(to_napi_error)?
            .with_logger(Arc::new(ConsoleLogger::new(level)));
        Ok(TsExportsLoader {
            plugin,
            cache: ContentCache::new(),
        })
    }

    #[napi(getter)]
    pub fn name(&self) -> String {
        self.plugin.name().to_string()
    }

    #[napi]
    pub fn input_extensions(&self) -> Vec<String> {
        self.plugin.resolve().input
    }

    #[napi]
    pub fn output_extensions(&self) -> Vec<String> {
        self.plugin.resolve().output
    }

    #[napi]
    pub fn load(&self, file_path: String) -> Result<JsLoadResult> {
        let path = AbsoluteFsPath::from(Path::new(&file_path));
        let contents = self.plugin.read(&path).map_err(to_napi_error)?;

        if let Some(cached) = self.cache.get(&path, &contents) {
            return Ok(cached);
        }

        let result: JsLoadResult = self
            .plugin
            .load_contents(&path, &contents)
            .map_err(to_napi_error)?
            .into();
        self.cache.insert(path, &contents, result.clone());
        Ok(result)
    }

    #[napi]
    pub fn cleanup(&self) {
        self.cache.clear();
        self.plugin.cleanup();
    }
}
