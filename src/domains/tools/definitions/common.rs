//! Common helpers shared across tool definitions.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

use crate::core::config::Config;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with a text summary plus structured content.
pub fn structured_result<T: Serialize>(summary: String, data: &T) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(summary)],
        structured_content: Some(serde_json::to_value(data).unwrap_or_default()),
        is_error: Some(false),
        meta: None,
    }
}

/// Resolve the repository to operate on: explicit tool argument first, then
/// the configured default. Missing both, or a path that is not a directory,
/// is a boundary error naming the parameter.
pub fn resolve_repo_path(arg: Option<&str>, config: &Config) -> Result<PathBuf, String> {
    let path = match arg {
        Some(p) => PathBuf::from(p),
        None => config.release.repo_path.clone().ok_or_else(|| {
            "Missing 'repo_path' parameter (and no MCP_REPO_PATH default is configured)"
                .to_string()
        })?,
    };

    if !path.is_dir() {
        return Err(format!("Repository path is not a directory: {}", path.display()));
    }

    Ok(path)
}
