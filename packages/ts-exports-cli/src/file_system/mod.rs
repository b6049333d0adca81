//! File System Abstraction
//!
//! Modules are read through [`ReadonlyFileSystem`] so the pipeline can run
//! against the disk or against an in-memory tree in tests.

pub mod node_js_file_system;
pub mod testing;
pub mod types;

pub use node_js_file_system::*;
pub use types::*;
