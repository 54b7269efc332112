//! Version-guard tool definition.
//!
//! Validates a PR title's declared bump against the bump inferred from its
//! commits. A failing guard is still a successful tool call: the verdict is
//! data, and `ok`/`violations` carry the outcome.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::semver::{GuardVerdict, check_version_guard};
use crate::domains::tools::definitions::common::structured_result;

/// Parameters for the version-guard tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GitVersionGuardParams {
    /// The pull-request title carrying the `[Release][...]` declaration.
    #[schemars(description = "Pull request title")]
    pub pr_title: String,

    /// Commit messages of the PR; may be omitted when unavailable.
    #[serde(default)]
    #[schemars(description = "Commit messages of the PR (optional)")]
    pub commits: Vec<String>,
}

/// Version-guard tool - cross-checks declared vs. inferred bumps.
pub struct GitVersionGuardTool;

impl GitVersionGuardTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "git_version_guard";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Validate a PR title bump tag against conventional commit signals. Fails the verdict when the tag is missing or declares less than the commits imply.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(commits = params.commits.len()))]
    pub fn execute(params: &GitVersionGuardParams) -> CallToolResult {
        let verdict = check_version_guard(&params.pr_title, &params.commits);
        info!(
            "Guard verdict: ok={} ({} violation(s))",
            verdict.ok,
            verdict.violations.len()
        );

        let summary = if verdict.ok {
            "Version guard passed".to_string()
        } else {
            format!("Version guard failed: {}", verdict.violations.join(" "))
        };

        structured_result(summary, &verdict)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let pr_title = arguments
            .get("pr_title")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'pr_title' parameter".to_string())?
            .to_string();

        let commits = match arguments.get("commits") {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(value) => value
                .as_array()
                .ok_or_else(|| "'commits' must be an array of strings".to_string())?
                .iter()
                .map(|v| v.as_str().map(|s| s.to_string()))
                .collect::<Option<Vec<String>>>()
                .ok_or_else(|| "'commits' must be an array of strings".to_string())?,
        };

        let params = GitVersionGuardParams { pr_title, commits };
        let result = Self::execute(&params);

        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GitVersionGuardParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<GuardVerdict>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: GitVersionGuardParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(title: &str, commits: &[&str]) -> GitVersionGuardParams {
        GitVersionGuardParams {
            pr_title: title.to_string(),
            commits: commits.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_execute_understated_declaration() {
        let result = GitVersionGuardTool::execute(&params("[Release][PATCH]", &["feat: x"]));
        // A failing guard is still a successful call.
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["ok"], false);
        assert_eq!(structured["declared"], "patch");
        assert_eq!(structured["inferred"], "minor");
        assert_eq!(
            structured["violations"][0],
            "Declared PATCH but commits imply MINOR."
        );
    }

    #[test]
    fn test_execute_passing_guard() {
        let result = GitVersionGuardTool::execute(&params("[Release][MAJOR]", &["feat: x"]));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["ok"], true);
        assert!(structured["violations"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_execute_no_tag_no_commits() {
        let result = GitVersionGuardTool::execute(&params("plain title", &[]));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["ok"], false);
        assert!(structured["declared"].is_null());
        assert!(structured["inferred"].is_null());
        assert_eq!(structured["violations"].as_array().unwrap().len(), 1);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_commits_optional() {
        let args = serde_json::json!({ "pr_title": "[Release][PATCH] tidy" });
        let value = GitVersionGuardTool::http_handler(args).unwrap();
        assert_eq!(value["structuredContent"]["ok"], true);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_missing_title() {
        let result = GitVersionGuardTool::http_handler(serde_json::json!({ "commits": [] }));
        assert!(result.is_err());
    }
}
