//! External collaborators: process execution and git log retrieval.
//!
//! These wrappers run a child to completion and hand the captured output to
//! the semver core. They impose no timeout and perform no retries; a
//! non-zero exit code is data for the caller, not an error here.

pub mod command;
pub mod git_log;

pub use command::{CommandOutput, run_command};
pub use git_log::{format_range, parse_log_output, read_commits};
