//! Reports
//!
//! Everything downstream of the estimator: numbered rows, totals, the tool
//! comparison, user edits and rendering. Nothing here feeds back into
//! [`crate::estimate`].

pub mod comparison;
pub mod edits;
pub mod format;
pub mod program;
pub mod render;

pub use comparison::{ComparisonRow, ToolComparison};
pub use edits::{EditsFile, RowEdit};
pub use program::{ProgramReport, ReportRow};
pub use render::{render, render_json, render_text, OutputFormat};
