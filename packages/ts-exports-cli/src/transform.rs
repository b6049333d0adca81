//! Transform stage: strip TypeScript syntax and emit JavaScript.
//!
//! 1. Parse the module with oxc
//! 2. Run semantic analysis for scoping
//! 3. Strip types with the oxc transformer
//! 4. Codegen the final JavaScript

use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_semantic::SemanticBuilder;
use oxc_transformer::{TransformOptions, Transformer};

use crate::error::{Result, TsExportsError};
use crate::file_system::AbsoluteFsPath;
use crate::parse::{parse_module, ScriptVariant};

/// Executable output of the transform stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    pub code: String,
    /// Source map as JSON, when requested.
    pub map: Option<String>,
}

pub fn transform_module(
    path: &AbsoluteFsPath,
    source: &str,
    variant: ScriptVariant,
    source_map: bool,
) -> Result<TransformOutput> {
    let allocator = Allocator::default();
    let mut program = parse_module(&allocator, path, source, variant).map_err(|err| match err {
        // The combined source no longer parses.
        TsExportsError::Parse { path, messages } => TsExportsError::Transform { path, messages },
        other => other,
    })?;

    let semantic = SemanticBuilder::new()
        .with_excess_capacity(0.0)
        .build(&program);

    let transform_options = TransformOptions::default();
    let ret = Transformer::new(&allocator, path.as_path(), &transform_options)
        .build_with_scoping(semantic.semantic.into_scoping(), &mut program);
    if !ret.errors.is_empty() {
        return Err(TsExportsError::Transform {
            path: path.clone(),
            messages: ret.errors.iter().map(|e| e.to_string()).collect(),
        });
    }

    let options = CodegenOptions {
        source_map_path: source_map.then(|| path.as_path().to_path_buf()),
        ..CodegenOptions::default()
    };
    let output = Codegen::new().with_options(options).build(&program);

    Ok(TransformOutput {
        code: output.code,
        map: output.map.map(|map| map.to_json_string()),
    })
}
