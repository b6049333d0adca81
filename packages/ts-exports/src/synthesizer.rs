//! Placeholder export synthesis
//!
//! Builds the snippet appended to a module so that every type-only export
//! also exists as a value:
//!
//! ```text
//! const __fakeValueExport__ = null;
//! export { __fakeValueExport__ as Foo, __fakeValueExport__ as Bar };
//! ```

use indexmap::IndexSet;
use oxc_syntax::identifier::is_identifier_name;

use crate::classifier::ExportClassification;

/// Binding name of the placeholder value, unless the module already uses it.
pub const PLACEHOLDER_BASE_NAME: &str = "__fakeValueExport__";

const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "import", "in", "instanceof", "let", "new", "null", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Whether `name` can be used as the placeholder binding.
pub fn is_valid_placeholder_name(name: &str) -> bool {
    is_identifier_name(name) && !RESERVED_WORDS.contains(&name)
}

/// Pick `base`, or `base$1`, `base$2`, ... whichever is not in `reserved`.
pub fn placeholder_identifier(base: &str, reserved: &IndexSet<String>) -> String {
    if !reserved.contains(base) {
        return base.to_string();
    }
    (1usize..)
        .map(|n| format!("{base}${n}"))
        .find(|candidate| !reserved.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Declare `placeholder` and export it under every name in `names`.
///
/// An empty `names` still yields the declaration and an empty export clause,
/// which is valid and does nothing.
pub fn synthesize<'n, I>(names: I, placeholder: &str) -> String
where
    I: IntoIterator<Item = &'n str>,
{
    let specifiers = names
        .into_iter()
        .map(|name| format!("{placeholder} as {}", export_name(name)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("\nconst {placeholder} = null;\nexport {{ {specifiers} }};")
}

/// Append the placeholder exports of `classification` to `source`.
pub fn append_placeholder_exports(source: &str, classification: &ExportClassification) -> String {
    let placeholder = classification.placeholder_identifier();
    append_with_placeholder(source, classification, &placeholder)
}

pub fn append_with_placeholder(
    source: &str,
    classification: &ExportClassification,
    placeholder: &str,
) -> String {
    let snippet = synthesize(classification.names(), placeholder);
    let mut combined = String::with_capacity(source.len() + snippet.len());
    combined.push_str(source);
    combined.push_str(&snippet);
    combined
}

// `export { x as "a-b" }` names must be written back as string literals.
fn export_name(name: &str) -> String {
    if is_identifier_name(name) {
        name.to_string()
    } else {
        serde_json::Value::String(name.to_string()).to_string()
    }
}
