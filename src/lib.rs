//! Element Symbols
//!
//! Two-letter element symbols for made-up element names.
//!
//! This library provides:
//! - Symbol validation and enumeration
//! - Self-test case files and reports
//! - Command-line configuration and front end

pub mod cases;
pub mod cli;
pub mod config;
pub mod input;
pub mod symbols;

// Re-exports for clean public API
pub use config::Config;
pub use symbols::{InvalidArgument, all_symbols, first_symbol, symbol_count, validate};
