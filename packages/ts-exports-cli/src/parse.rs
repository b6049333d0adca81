//! Parsing of TypeScript modules with oxc.

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;
use ts_exports::{classify_program, ExportClassification};

use crate::error::{Result, TsExportsError};
use crate::file_system::AbsoluteFsPath;

/// Parse mode of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptVariant {
    Ts,
    Tsx,
}

impl ScriptVariant {
    /// `.tsx`, `.jsx`, ... enable JSX; everything else parses as TypeScript.
    pub fn from_extension(ext: &str) -> Self {
        if ext.ends_with('x') {
            ScriptVariant::Tsx
        } else {
            ScriptVariant::Ts
        }
    }

    pub fn source_type(self) -> SourceType {
        match self {
            ScriptVariant::Ts => SourceType::ts(),
            ScriptVariant::Tsx => SourceType::ts().with_jsx(true),
        }
    }
}

pub fn parse_module<'a>(
    allocator: &'a Allocator,
    path: &AbsoluteFsPath,
    source: &'a str,
    variant: ScriptVariant,
) -> Result<Program<'a>> {
    let ret = Parser::new(allocator, source, variant.source_type()).parse();
    if !ret.errors.is_empty() || ret.panicked {
        return Err(TsExportsError::Parse {
            path: path.clone(),
            messages: ret.errors.iter().map(|e| e.to_string()).collect(),
        });
    }
    Ok(ret.program)
}

/// Parse `source` and classify its exports.
pub fn classify_source(
    path: &AbsoluteFsPath,
    source: &str,
    variant: ScriptVariant,
) -> Result<ExportClassification> {
    let allocator = Allocator::default();
    let program = parse_module(&allocator, path, source, variant)?;
    Ok(classify_program(&program))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(p: &str) -> AbsoluteFsPath {
        AbsoluteFsPath::new(p.to_string())
    }

    #[test]
    fn variant_follows_extension() {
        assert_eq!(ScriptVariant::from_extension(".ts"), ScriptVariant::Ts);
        assert_eq!(ScriptVariant::from_extension(".mts"), ScriptVariant::Ts);
        assert_eq!(ScriptVariant::from_extension(".tsx"), ScriptVariant::Tsx);
        assert_eq!(ScriptVariant::from_extension(""), ScriptVariant::Ts);
    }

    #[test]
    fn tsx_variant_accepts_jsx() {
        let source = "export interface Props {}\nexport const el = <div />;";
        let classification = classify_source(&path("/a.tsx"), source, ScriptVariant::Tsx).unwrap();
        assert_eq!(classification.names().collect::<Vec<_>>(), vec!["Props"]);
    }

    #[test]
    fn syntax_error_is_reported_with_path() {
        let err = classify_source(&path("/broken.ts"), "export type = ;", ScriptVariant::Ts)
            .unwrap_err();
        match err {
            TsExportsError::Parse { path, messages } => {
                assert_eq!(path.as_str(), "/broken.ts");
                assert!(!messages.is_empty());
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }
}
