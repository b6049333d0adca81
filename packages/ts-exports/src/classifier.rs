//! Export classifier
//!
//! Finds the exported names of a module that denote a type but have no
//! runtime value behind them. Once the TypeScript syntax is stripped, such an
//! export disappears, and a module doing `export { Foo }` further down the
//! chain fails to link.
//!
//! The classification is built in one pass over the top-level statements:
//! - the *type universe* holds every name declared as a type (type alias,
//!   interface, class, enum);
//! - the *value universe* holds every name declared as a value (variable,
//!   function, class, enum);
//! - the *export intent* of every exported local name accumulates whether it
//!   is exported as a type and/or as a value.
//!
//! All three only ever grow, so statement order does not change the result.

use bitflags::bitflags;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use smallvec::SmallVec;

use crate::module_statement::{ModuleStatement, NamedExportClause, StatementKind};
use crate::synthesizer::{placeholder_identifier, PLACEHOLDER_BASE_NAME};

bitflags! {
    /// How a local name leaves the module. Flags are only ever added.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ExportIntent: u8 {
        const AS_TYPE = 1 << 0;
        const AS_VALUE = 1 << 1;
    }
}

#[derive(Debug, Default)]
struct ExportRecord {
    intent: ExportIntent,
    /// Names importers see for this local name, in first-seen order.
    exported_as: SmallVec<[String; 1]>,
}

/// Result of classifying one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportClassification {
    /// Exported names that need a placeholder value.
    pub exports_with_no_value: IndexSet<String>,
    /// Every identifier bound at the top level of the module.
    #[serde(skip)]
    pub top_level_names: IndexSet<String>,
}

impl ExportClassification {
    pub fn is_empty(&self) -> bool {
        self.exports_with_no_value.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.exports_with_no_value.iter().map(String::as_str)
    }

    /// A placeholder binding name that no top-level identifier uses.
    pub fn placeholder_identifier(&self) -> String {
        self.placeholder_identifier_with_base(PLACEHOLDER_BASE_NAME)
    }

    pub fn placeholder_identifier_with_base(&self, base: &str) -> String {
        placeholder_identifier(base, &self.top_level_names)
    }
}

/// Accumulates declarations and export intents statement by statement.
#[derive(Debug, Default)]
pub struct ExportClassifier {
    type_universe: IndexSet<String>,
    value_universe: IndexSet<String>,
    exports: IndexMap<String, ExportRecord>,
    top_level_names: IndexSet<String>,
}

impl ExportClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a whole module.
    pub fn classify_module(statements: &[ModuleStatement]) -> ExportClassification {
        let mut classifier = Self::new();
        for statement in statements {
            classifier.visit_statement(statement);
        }
        classifier.finish()
    }

    pub fn visit_statement(&mut self, statement: &ModuleStatement) {
        let exported = statement.exported;
        match &statement.kind {
            StatementKind::TypeAlias { name } | StatementKind::Interface { name } => {
                self.declare_type(name);
                if exported {
                    self.record_export(name, name, ExportIntent::AS_TYPE);
                }
            }
            StatementKind::Variable { declarators } => {
                for declarator in declarators {
                    for bound in declarator.bound_names() {
                        self.top_level_names.insert(bound.to_string());
                    }
                    // Destructured names are not tracked as values.
                    if let Some(name) = declarator.identifier() {
                        self.declare_value(name);
                        if exported {
                            self.record_export(name, name, ExportIntent::AS_VALUE);
                        }
                    }
                }
            }
            StatementKind::Function { name: Some(name) } => {
                self.declare_value(name);
                if exported {
                    self.record_export(name, name, ExportIntent::AS_VALUE);
                }
            }
            StatementKind::Class { name: Some(name) } | StatementKind::Enum { name } => {
                self.declare_type(name);
                self.declare_value(name);
                if exported {
                    self.record_export(name, name, ExportIntent::AS_TYPE | ExportIntent::AS_VALUE);
                }
            }
            StatementKind::NamedExports(clause) => self.visit_named_exports(clause),
            StatementKind::Import { local_names } => {
                self.top_level_names.extend(local_names.iter().cloned());
            }
            StatementKind::Function { name: None }
            | StatementKind::Class { name: None }
            | StatementKind::Other => {}
        }
    }

    fn visit_named_exports(&mut self, clause: &NamedExportClause) {
        if clause.is_reexport() {
            return;
        }
        // Only `export type { ... }` narrows the intent; an inline `type`
        // modifier on a single element does not.
        let mut intent = ExportIntent::AS_TYPE;
        if !clause.type_only {
            intent |= ExportIntent::AS_VALUE;
        }
        for element in &clause.elements {
            self.record_export(&element.local, &element.exported, intent);
        }
    }

    fn declare_type(&mut self, name: &str) {
        self.top_level_names.insert(name.to_string());
        self.type_universe.insert(name.to_string());
    }

    fn declare_value(&mut self, name: &str) {
        self.top_level_names.insert(name.to_string());
        self.value_universe.insert(name.to_string());
    }

    fn record_export(&mut self, local: &str, exported: &str, intent: ExportIntent) {
        let record = self.exports.entry(local.to_string()).or_default();
        record.intent |= intent;
        if !record.exported_as.iter().any(|name| name == exported) {
            record.exported_as.push(exported.to_string());
        }
    }

    pub fn finish(self) -> ExportClassification {
        let mut exports_with_no_value = IndexSet::new();
        for (local, record) in &self.exports {
            // No type under this name, so nothing can import it as a type.
            if !self.type_universe.contains(local) {
                continue;
            }
            if record.intent.contains(ExportIntent::AS_VALUE)
                && self.value_universe.contains(local)
            {
                continue;
            }
            exports_with_no_value.extend(record.exported_as.iter().cloned());
        }

        ExportClassification {
            exports_with_no_value,
            top_level_names: self.top_level_names,
        }
    }
}

/// Exported names of the module that need a placeholder value export.
pub fn find_exports_with_no_value(statements: &[ModuleStatement]) -> IndexSet<String> {
    ExportClassifier::classify_module(statements).exports_with_no_value
}
