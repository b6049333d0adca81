//! Top-level statement model
//!
//! The export classifier does not walk the syntax tree directly. Each
//! top-level statement of a module is first lowered into a [`ModuleStatement`],
//! which keeps only what matters for the export surface: the declaration kind,
//! the names it binds and whether it carries an `export` modifier.

use oxc_ast::ast::{
    BindingPattern, BindingPatternKind, Class, Declaration, ExportDefaultDeclarationKind,
    ExportNamedDeclaration, Function, ImportDeclarationSpecifier, ModuleExportName, Program,
    Statement, TSEnumDeclaration, TSImportEqualsDeclaration, TSInterfaceDeclaration,
    TSModuleDeclaration, TSModuleDeclarationName, TSTypeAliasDeclaration, VariableDeclaration,
};
use smallvec::SmallVec;

/// One top-level statement of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleStatement {
    pub kind: StatementKind,
    /// The statement carries an inline `export` modifier.
    pub exported: bool,
}

impl ModuleStatement {
    pub fn new(kind: StatementKind) -> Self {
        Self { kind, exported: false }
    }

    pub fn exported(kind: StatementKind) -> Self {
        Self { kind, exported: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    TypeAlias { name: String },
    Interface { name: String },
    Variable { declarators: Vec<VariableBinding> },
    /// `name` is `None` for anonymous default-exported functions.
    Function { name: Option<String> },
    Class { name: Option<String> },
    Enum { name: String },
    NamedExports(NamedExportClause),
    /// Names bound by an import. They never take part in classification.
    Import { local_names: Vec<String> },
    Other,
}

/// What a single variable declarator binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableBinding {
    Identifier(String),
    /// A destructuring pattern together with every name it binds.
    Pattern(SmallVec<[String; 4]>),
}

impl VariableBinding {
    /// The declared name when the binding is a plain identifier.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            VariableBinding::Identifier(name) => Some(name),
            VariableBinding::Pattern(_) => None,
        }
    }

    pub fn bound_names(&self) -> impl Iterator<Item = &str> {
        let names: &[String] = match self {
            VariableBinding::Identifier(name) => std::slice::from_ref(name),
            VariableBinding::Pattern(names) => names,
        };
        names.iter().map(String::as_str)
    }
}

/// `export { a, b as c }`, `export type { a }` or `export { a } from './m'`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedExportClause {
    pub elements: Vec<NamedExportElement>,
    /// The whole clause is written `export type { ... }`.
    pub type_only: bool,
    /// Module specifier of a re-export, e.g. `./other`.
    pub module_specifier: Option<String>,
}

impl NamedExportClause {
    pub fn is_reexport(&self) -> bool {
        self.module_specifier
            .as_deref()
            .is_some_and(|specifier| !specifier.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedExportElement {
    /// Name inside the module (before `as`).
    pub local: String,
    /// Name seen by importers (after `as`, or the local name).
    pub exported: String,
    /// The element is written `type a`.
    pub type_only: bool,
}

impl NamedExportElement {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            exported: name.clone(),
            local: name,
            type_only: false,
        }
    }

    pub fn renamed(local: impl Into<String>, exported: impl Into<String>) -> Self {
        Self {
            local: local.into(),
            exported: exported.into(),
            type_only: false,
        }
    }

    pub fn is_renamed(&self) -> bool {
        self.local != self.exported
    }
}

/// Lower the top-level statements of a parsed module.
pub fn lower_program(program: &Program<'_>) -> Vec<ModuleStatement> {
    program.body.iter().map(lower_statement).collect()
}

pub fn lower_statement(statement: &Statement<'_>) -> ModuleStatement {
    let kind = match statement {
        Statement::TSTypeAliasDeclaration(decl) => type_alias(decl),
        Statement::TSInterfaceDeclaration(decl) => interface(decl),
        Statement::VariableDeclaration(decl) => variable(decl),
        Statement::FunctionDeclaration(func) => function(func),
        Statement::ClassDeclaration(class) => class_kind(class),
        Statement::TSEnumDeclaration(decl) => enum_kind(decl),
        Statement::ExportNamedDeclaration(decl) => return lower_export_named(decl),
        Statement::ExportDefaultDeclaration(decl) => match &decl.declaration {
            // Default exports are not resolved, but a named default
            // declaration still binds its name locally.
            ExportDefaultDeclarationKind::FunctionDeclaration(func) => function(func),
            ExportDefaultDeclarationKind::ClassDeclaration(class) => class_kind(class),
            ExportDefaultDeclarationKind::TSInterfaceDeclaration(decl) => interface(decl),
            _ => StatementKind::Other,
        },
        Statement::ImportDeclaration(decl) => {
            let local_names = decl
                .specifiers
                .iter()
                .flatten()
                .map(|specifier| match specifier {
                    ImportDeclarationSpecifier::ImportSpecifier(s) => s.local.name.to_string(),
                    ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => {
                        s.local.name.to_string()
                    }
                    ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => {
                        s.local.name.to_string()
                    }
                })
                .collect();
            StatementKind::Import { local_names }
        }
        Statement::TSImportEqualsDeclaration(decl) => import_equals(decl),
        Statement::TSModuleDeclaration(decl) => namespace(decl),
        _ => StatementKind::Other,
    };
    ModuleStatement::new(kind)
}

fn lower_export_named(decl: &ExportNamedDeclaration<'_>) -> ModuleStatement {
    if let Some(declaration) = &decl.declaration {
        return ModuleStatement::exported(lower_declaration(declaration));
    }

    let elements = decl
        .specifiers
        .iter()
        .map(|specifier| NamedExportElement {
            local: module_export_name(&specifier.local),
            exported: module_export_name(&specifier.exported),
            type_only: specifier.export_kind.is_type(),
        })
        .collect();

    ModuleStatement::new(StatementKind::NamedExports(NamedExportClause {
        elements,
        type_only: decl.export_kind.is_type(),
        module_specifier: decl.source.as_ref().map(|source| source.value.to_string()),
    }))
}

fn lower_declaration(declaration: &Declaration<'_>) -> StatementKind {
    match declaration {
        Declaration::TSTypeAliasDeclaration(decl) => type_alias(decl),
        Declaration::TSInterfaceDeclaration(decl) => interface(decl),
        Declaration::VariableDeclaration(decl) => variable(decl),
        Declaration::FunctionDeclaration(func) => function(func),
        Declaration::ClassDeclaration(class) => class_kind(class),
        Declaration::TSEnumDeclaration(decl) => enum_kind(decl),
        Declaration::TSImportEqualsDeclaration(decl) => import_equals(decl),
        Declaration::TSModuleDeclaration(decl) => namespace(decl),
        _ => StatementKind::Other,
    }
}

fn type_alias(decl: &TSTypeAliasDeclaration<'_>) -> StatementKind {
    StatementKind::TypeAlias {
        name: decl.id.name.to_string(),
    }
}

fn interface(decl: &TSInterfaceDeclaration<'_>) -> StatementKind {
    StatementKind::Interface {
        name: decl.id.name.to_string(),
    }
}

fn variable(decl: &VariableDeclaration<'_>) -> StatementKind {
    let declarators = decl
        .declarations
        .iter()
        .map(|declarator| match &declarator.id.kind {
            BindingPatternKind::BindingIdentifier(id) => {
                VariableBinding::Identifier(id.name.to_string())
            }
            _ => {
                let mut names = SmallVec::new();
                collect_bound_names(&declarator.id, &mut names);
                VariableBinding::Pattern(names)
            }
        })
        .collect();
    StatementKind::Variable { declarators }
}

fn function(func: &Function<'_>) -> StatementKind {
    StatementKind::Function {
        name: func.id.as_ref().map(|id| id.name.to_string()),
    }
}

fn class_kind(class: &Class<'_>) -> StatementKind {
    StatementKind::Class {
        name: class.id.as_ref().map(|id| id.name.to_string()),
    }
}

fn enum_kind(decl: &TSEnumDeclaration<'_>) -> StatementKind {
    StatementKind::Enum {
        name: decl.id.name.to_string(),
    }
}

fn import_equals(decl: &TSImportEqualsDeclaration<'_>) -> StatementKind {
    StatementKind::Import {
        local_names: vec![decl.id.name.to_string()],
    }
}

// Namespaces are not classified; only their name is recorded.
fn namespace(decl: &TSModuleDeclaration<'_>) -> StatementKind {
    match &decl.id {
        TSModuleDeclarationName::Identifier(id) => StatementKind::Import {
            local_names: vec![id.name.to_string()],
        },
        TSModuleDeclarationName::StringLiteral(_) => StatementKind::Other,
    }
}

fn module_export_name(name: &ModuleExportName<'_>) -> String {
    match name {
        ModuleExportName::IdentifierName(id) => id.name.to_string(),
        ModuleExportName::IdentifierReference(id) => id.name.to_string(),
        ModuleExportName::StringLiteral(lit) => lit.value.to_string(),
    }
}

fn collect_bound_names(pattern: &BindingPattern<'_>, names: &mut SmallVec<[String; 4]>) {
    match &pattern.kind {
        BindingPatternKind::BindingIdentifier(id) => names.push(id.name.to_string()),
        BindingPatternKind::ObjectPattern(object) => {
            for property in &object.properties {
                collect_bound_names(&property.value, names);
            }
            if let Some(rest) = &object.rest {
                collect_bound_names(&rest.argument, names);
            }
        }
        BindingPatternKind::ArrayPattern(array) => {
            for element in array.elements.iter().flatten() {
                collect_bound_names(element, names);
            }
            if let Some(rest) = &array.rest {
                collect_bound_names(&rest.argument, names);
            }
        }
        BindingPatternKind::AssignmentPattern(assign) => collect_bound_names(&assign.left, names),
    }
}
