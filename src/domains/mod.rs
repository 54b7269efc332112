//! Domain modules organized by bounded contexts.
//!
//! - **semver**: pure classification and parsing logic (the decision core)
//! - **exec**: external collaborators (process execution, git log)
//! - **tools**: MCP tools that can be executed by clients

pub mod exec;
pub mod semver;
pub mod tools;
