//! DevWorkflow MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing
//! developer release-workflow tools: version bump inference from
//! conventional commits, PR-title validation, semantic-release dry runs,
//! and changelog generation.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **semver**: pure commit classification, bump inference, guard verdicts, release-output parsing
//!   - **exec**: external collaborators (child processes, git log retrieval)
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use devworkflow_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
