//! Release tools: semantic-release dry runs and output parsing.

pub mod dry_run;
pub mod parse_output;

pub use dry_run::ReleaseDryRunTool;
pub use parse_output::ReleaseParseOutputTool;
