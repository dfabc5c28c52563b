//! G-code Cycle Time Estimator
//!
//! Estimates machining time, cut distance, feeds and spindle speeds for every
//! named group of a CNC program, and compares tool lists across programs.
//!
//! This library provides:
//! - Line tokenizing for grouped programs
//! - A single-pass modal estimator
//! - Report building, comparison and rendering
//! - Configuration management

pub mod cli;
pub mod config;
pub mod estimate;
pub mod parser;
pub mod report;

// Re-exports for clean public API
pub use config::Config;
pub use estimate::{parse, GroupRecord};
pub use parser::{scan_line, LineDirectives};
pub use report::{ProgramReport, ToolComparison};
