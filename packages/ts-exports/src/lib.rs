#![deny(clippy::all)]

//! Type-only export detection for TypeScript modules.
//!
//! A module that exports a name which is only a type (an interface or a type
//! alias) loses that export once its types are stripped. [`classifier`] finds
//! those names from the top-level statements of the module and
//! [`synthesizer`] produces the placeholder value exports that keep
//! `export { Foo }` chains linking.

pub mod classifier;
pub mod module_statement;
pub mod synthesizer;

pub use classifier::{
    find_exports_with_no_value, ExportClassification, ExportClassifier, ExportIntent,
};
pub use module_statement::{
    lower_program, lower_statement, ModuleStatement, NamedExportClause, NamedExportElement,
    StatementKind, VariableBinding,
};
pub use synthesizer::{
    append_placeholder_exports, append_with_placeholder, is_valid_placeholder_name,
    placeholder_identifier, synthesize, PLACEHOLDER_BASE_NAME,
};

/// Classify an already parsed module.
pub fn classify_program(program: &oxc_ast::ast::Program<'_>) -> ExportClassification {
    ExportClassifier::classify_module(&lower_program(program))
}
