//! Logging
//!
//! A small logger interface so library code never prints directly.

mod console_logger;
mod logger;


pub use console_logger::ConsoleLogger;
pub use logger::{LogLevel, Logger, NullLogger};
