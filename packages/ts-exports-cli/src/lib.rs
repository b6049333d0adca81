#![deny(clippy::all)]

//! Build pipeline around the type-only export classifier.
//!
//! Reads TypeScript modules, appends placeholder value exports for their
//! type-only exports and transforms them to JavaScript with oxc.

// Re-export the classifier for convenience
pub use ts_exports as classifier;

pub mod cache;
pub mod compile;
pub mod config;
pub mod error;
pub mod file_system;
pub mod logging;
pub mod parse;
pub mod plugin;
pub mod transform;

pub use error::{Result, TsExportsError};
pub use plugin::{prepare_module, LoadResult, PreparedModule, ResolveConfig, TsExportsPlugin};

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
