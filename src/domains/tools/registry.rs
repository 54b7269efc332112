//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when the http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;

use super::definitions::{
    GitChangelogTool, GitDeclaredBumpTool, GitInferBumpTool, GitVersionGuardTool, HealthPingTool,
    ReleaseDryRunTool, ReleaseParseOutputTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when the http feature is enabled)
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GitChangelogTool::NAME,
            GitDeclaredBumpTool::NAME,
            GitInferBumpTool::NAME,
            GitVersionGuardTool::NAME,
            HealthPingTool::NAME,
            ReleaseDryRunTool::NAME,
            ReleaseParseOutputTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GitChangelogTool::to_tool(),
            GitDeclaredBumpTool::to_tool(),
            GitInferBumpTool::to_tool(),
            GitVersionGuardTool::to_tool(),
            HealthPingTool::to_tool(),
            ReleaseDryRunTool::to_tool(),
            ReleaseParseOutputTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            GitChangelogTool::NAME => {
                GitChangelogTool::http_handler(arguments, self.config.clone()).await
            }
            GitDeclaredBumpTool::NAME => GitDeclaredBumpTool::http_handler(arguments),
            GitInferBumpTool::NAME => GitInferBumpTool::http_handler(arguments),
            GitVersionGuardTool::NAME => GitVersionGuardTool::http_handler(arguments),
            HealthPingTool::NAME => HealthPingTool::http_handler(arguments),
            ReleaseDryRunTool::NAME => {
                ReleaseDryRunTool::http_handler(arguments, self.config.clone()).await
            }
            ReleaseParseOutputTool::NAME => ReleaseParseOutputTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}
