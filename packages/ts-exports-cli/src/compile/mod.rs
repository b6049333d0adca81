//! Loading many modules at once.

pub mod parallel;

pub use parallel::{emit_results, load_all, output_path};
