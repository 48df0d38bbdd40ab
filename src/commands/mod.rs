//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod check;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use check::execute_check;
pub use report::{execute_report, validate_args, ReportArgs, ReportOutcome};
pub use utils::{display_schema, display_version, validate_export_file};
