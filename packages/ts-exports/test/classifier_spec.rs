//! Export classifier tests
//!
//! Each case parses a small TypeScript module and checks which exports are
//! reported as needing a placeholder value.

mod support;

use support::{classify_source, exports_with_no_value};

#[test]
fn should_report_nothing_when_every_type_export_has_a_value() {
    let names = exports_with_no_value(
        r#"
        type Foo = { a: number };
        const Foo = { a: 1 };
        export { Foo };

        interface Bar {}
        export function Bar() {}
        export { Bar };
        "#,
    );
    assert!(names.is_empty(), "unexpected placeholders: {:?}", names);
}

#[test]
fn should_report_exported_type_alias() {
    let names = exports_with_no_value("export type Foo = string | number;");
    assert_eq!(names, vec!["Foo"]);
}

#[test]
fn should_report_exported_interface() {
    let names = exports_with_no_value("export interface Props { label: string }");
    assert_eq!(names, vec!["Props"]);
}

#[test]
fn should_not_report_exported_class() {
    assert!(exports_with_no_value("export class Foo {}").is_empty());
}

#[test]
fn should_not_report_exported_enum() {
    assert!(exports_with_no_value("export enum Color { Red, Green }").is_empty());
    assert!(exports_with_no_value("export const enum Size { S, M }").is_empty());
}

#[test]
fn should_report_only_the_type_in_a_mixed_export_clause() {
    let names = exports_with_no_value(
        r#"
        type A = string;
        function B() {}
        export { A, B };
        "#,
    );
    assert_eq!(names, vec!["A"]);
}

#[test]
fn should_report_type_only_export_clause() {
    let names = exports_with_no_value(
        r#"
        interface A {}
        export type { A };
        "#,
    );
    assert_eq!(names, vec!["A"]);
}

#[test]
fn should_report_type_only_clause_even_when_a_value_exists() {
    let names = exports_with_no_value(
        r#"
        interface A {}
        const A = 1;
        export type { A };
        "#,
    );
    assert_eq!(names, vec!["A"]);
}

#[test]
fn should_not_report_inline_type_specifier_backed_by_a_value() {
    let names = exports_with_no_value(
        r#"
        interface A {}
        const A = 1;
        export { type A };
        "#,
    );
    assert!(names.is_empty(), "unexpected placeholders: {:?}", names);
}

#[test]
fn should_report_inline_type_specifier_without_a_value() {
    let names = exports_with_no_value(
        r#"
        interface A {}
        function B() {}
        export { type A, B };
        "#,
    );
    assert_eq!(names, vec!["A"]);
}

#[test]
fn should_ignore_reexport_from_another_module() {
    let names = exports_with_no_value(
        r#"
        type X = string;
        export { X } from './other';
        export type { Y } from './other';
        export * from './other';
        "#,
    );
    assert!(names.is_empty(), "unexpected placeholders: {:?}", names);
}

#[test]
fn should_ignore_exports_without_a_local_type() {
    let names = exports_with_no_value(
        r#"
        import { Imported } from './other';
        const value = 1;
        export { Imported, value };
        "#,
    );
    assert!(names.is_empty(), "unexpected placeholders: {:?}", names);
}

#[test]
fn should_use_local_name_for_lookup_and_exported_name_for_placeholder() {
    let names = exports_with_no_value(
        r#"
        type Local = number;
        const Other = 1;
        export { Local as Public, Other as Local };
        "#,
    );
    assert_eq!(names, vec!["Public"]);
}

#[test]
fn should_report_every_alias_of_a_type() {
    let names = exports_with_no_value(
        r#"
        interface Foo {}
        export { Foo, Foo as Bar };
        "#,
    );
    assert_eq!(names, vec!["Foo", "Bar"]);
}

#[test]
fn should_report_a_name_exported_twice_once() {
    let names = exports_with_no_value(
        r#"
        export type Foo = string;
        export { Foo };
        "#,
    );
    assert_eq!(names, vec!["Foo"]);
}

#[test]
fn should_not_depend_on_statement_order() {
    let before = exports_with_no_value(
        r#"
        export { Foo, Bar };
        type Foo = string;
        interface Bar {}
        function Bar() {}
        "#,
    );
    let after = exports_with_no_value(
        r#"
        function Bar() {}
        interface Bar {}
        type Foo = string;
        export { Foo, Bar };
        "#,
    );
    assert_eq!(before, vec!["Foo"]);
    assert_eq!(after, vec!["Foo"]);
}

#[test]
fn should_exclude_type_alias_with_value_exported_elsewhere() {
    let names = exports_with_no_value(
        r#"
        export type Handler = () => void;
        export function Handler() {}
        "#,
    );
    assert!(names.is_empty(), "unexpected placeholders: {:?}", names);
}

#[test]
fn should_report_type_exported_inline_when_value_is_not_exported_as_value() {
    // The only export of `Foo` is as a type; the local value does not leave
    // the module under that export.
    let names = exports_with_no_value(
        r#"
        export interface Foo {}
        const Foo = 1;
        "#,
    );
    assert_eq!(names, vec!["Foo"]);
}

#[test]
fn should_treat_variables_as_values() {
    let names = exports_with_no_value(
        r#"
        type a = string;
        type b = string;
        export let a = '', b = '';
        "#,
    );
    assert!(names.is_empty(), "unexpected placeholders: {:?}", names);
}

#[test]
fn should_not_treat_destructured_names_as_values() {
    let names = exports_with_no_value(
        r#"
        type a = string;
        const { a } = { a: '' };
        export { a };
        "#,
    );
    assert_eq!(names, vec!["a"]);
}

#[test]
fn should_not_report_default_exported_interface() {
    let names = exports_with_no_value("export default interface Props {}");
    assert!(names.is_empty(), "unexpected placeholders: {:?}", names);
}

#[test]
fn should_ignore_anonymous_default_function() {
    let classification = classify_source("export default function () {}");
    assert!(classification.is_empty());
    assert!(classification.top_level_names.is_empty());
}

#[test]
fn should_count_named_default_declarations_as_local_bindings() {
    let names = exports_with_no_value(
        r#"
        interface Widget {}
        export default class Widget {}
        export { Widget };
        "#,
    );
    assert!(names.is_empty(), "unexpected placeholders: {:?}", names);
}

#[test]
fn should_collect_top_level_names() {
    let classification = classify_source(
        r#"
        import Default, { named as alias } from './a';
        import * as ns from './b';
        import legacy = require('./c');
        const [first, ...rest] = [1, 2];
        const { deep: { inner = 1 } } = { deep: {} };
        function fn() {}
        "#,
    );
    for name in [
        "Default", "alias", "ns", "legacy", "first", "rest", "inner", "fn",
    ] {
        assert!(
            classification.top_level_names.contains(name),
            "missing top-level name {}",
            name
        );
    }
    assert!(!classification.top_level_names.contains("named"));
    assert!(!classification.top_level_names.contains("deep"));
}

#[test]
fn should_keep_first_seen_order() {
    let names = exports_with_no_value(
        r#"
        export type C = 1;
        export interface A {}
        export type B = 2;
        "#,
    );
    assert_eq!(names, vec!["C", "A", "B"]);
}
