//! Shared helpers: parse TypeScript source with oxc and run the classifier.

#![allow(dead_code)]

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;
use ts_exports::{lower_program, ExportClassification, ExportClassifier, ModuleStatement};

pub fn lower_source(source: &str) -> Vec<ModuleStatement> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::ts()).parse();
    assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);
    lower_program(&ret.program)
}

pub fn classify_source(source: &str) -> ExportClassification {
    ExportClassifier::classify_module(&lower_source(source))
}

pub fn exports_with_no_value(source: &str) -> Vec<String> {
    classify_source(source)
        .exports_with_no_value
        .into_iter()
        .collect()
}

pub fn assert_parses_as_typescript(source: &str) {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::ts()).parse();
    assert!(ret.errors.is_empty(), "parse errors: {:?}\n{}", ret.errors, source);
}
