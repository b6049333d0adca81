//! Placeholder synthesis tests

mod support;

use support::{assert_parses_as_typescript, classify_source};
use ts_exports::{append_placeholder_exports, synthesize, PLACEHOLDER_BASE_NAME};

#[test]
fn should_export_one_placeholder_under_every_name() {
    let snippet = synthesize(["A", "B"], PLACEHOLDER_BASE_NAME);
    assert_eq!(
        snippet,
        "\nconst __fakeValueExport__ = null;\nexport { __fakeValueExport__ as A, __fakeValueExport__ as B };"
    );
    assert_eq!(snippet.matches("const ").count(), 1);
}

#[test]
fn should_emit_empty_export_clause_for_no_names() {
    let snippet = synthesize(std::iter::empty(), PLACEHOLDER_BASE_NAME);
    assert_eq!(snippet, "\nconst __fakeValueExport__ = null;\nexport {  };");
    assert_parses_as_typescript(&snippet);
}

#[test]
fn should_append_snippet_after_source() {
    let source = "export type Foo = string;\nexport interface Bar {}";
    let classification = classify_source(source);
    let combined = append_placeholder_exports(source, &classification);

    assert!(combined.starts_with(source));
    assert!(combined.ends_with(
        "export { __fakeValueExport__ as Foo, __fakeValueExport__ as Bar };"
    ));
    assert_parses_as_typescript(&combined);
}

#[test]
fn should_append_after_trailing_line_comment() {
    let source = "export type Foo = string; // trailing";
    let combined = append_placeholder_exports(source, &classify_source(source));
    assert_parses_as_typescript(&combined);
    let reparsed = classify_source(&combined);
    assert!(reparsed.top_level_names.contains(PLACEHOLDER_BASE_NAME));
}

#[test]
fn should_avoid_colliding_with_user_bindings() {
    let source = r#"
        const __fakeValueExport__ = 'mine';
        export interface Foo {}
    "#;
    let combined = append_placeholder_exports(source, &classify_source(source));
    assert!(combined.contains("const __fakeValueExport__$1 = null;"));
    assert!(combined.contains("__fakeValueExport__$1 as Foo"));
    assert_parses_as_typescript(&combined);
}

#[test]
fn should_avoid_colliding_with_exported_namespace() {
    let source = r#"
        export namespace __fakeValueExport__ { export const y = 1; }
        export type T = 1;
    "#;
    let classification = classify_source(source);
    assert!(classification.top_level_names.contains(PLACEHOLDER_BASE_NAME));

    let combined = append_placeholder_exports(source, &classification);
    assert!(combined.ends_with(
        "\nconst __fakeValueExport__$1 = null;\nexport { __fakeValueExport__$1 as T };"
    ));
    assert_parses_as_typescript(&combined);
}

#[test]
fn should_quote_string_export_names() {
    let source = "type A = 1;\nexport { A as \"a-b\" };";
    let combined = append_placeholder_exports(source, &classify_source(source));
    assert!(combined.contains("__fakeValueExport__ as \"a-b\""));
    assert_parses_as_typescript(&combined);
}
