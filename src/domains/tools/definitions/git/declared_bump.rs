//! Declared-bump extraction tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domains::semver::{BumpLevel, extract_declared_bump};
use crate::domains::tools::definitions::common::structured_result;

/// Parameters for the declared-bump tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GitDeclaredBumpParams {
    /// The pull-request title to search for a `[Release][...]` tag.
    #[schemars(description = "Pull request title")]
    pub pr_title: String,
}

/// Result of declared-bump extraction.
///
/// `declared` is null when the title carries no tag, which is distinct from
/// any explicit level.
#[derive(Debug, Serialize, JsonSchema)]
struct DeclaredBumpResult {
    declared: Option<BumpLevel>,
}

/// Declared-bump tool - reads the human-declared release tag from a PR title.
pub struct GitDeclaredBumpTool;

impl GitDeclaredBumpTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "git_declared_bump";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Extract the declared release bump from a PR title tagged [Release][MAJOR|MINOR|PATCH]. Case-insensitive; reports absence when no tag is present.";

    /// Execute the tool logic.
    pub fn execute(params: &GitDeclaredBumpParams) -> CallToolResult {
        let declared = extract_declared_bump(&params.pr_title);
        info!("Declared bump: {:?}", declared);

        let summary = match declared {
            Some(level) => format!("PR title declares a {} release", level.as_tag()),
            None => "No [Release] tag in PR title".to_string(),
        };

        structured_result(summary, &DeclaredBumpResult { declared })
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let pr_title = arguments
            .get("pr_title")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'pr_title' parameter".to_string())?
            .to_string();

        let params = GitDeclaredBumpParams { pr_title };
        let result = Self::execute(&params);

        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GitDeclaredBumpParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<DeclaredBumpResult>().into()),
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
                let params: GitDeclaredBumpParams =
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

    #[test]
    fn test_execute_found() {
        let params = GitDeclaredBumpParams {
            pr_title: "foo [release][minor] bar".to_string(),
        };
        let result = GitDeclaredBumpTool::execute(&params);
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["declared"], "minor");
    }

    #[test]
    fn test_execute_absent_is_null() {
        let params = GitDeclaredBumpParams {
            pr_title: "feat: no tag here".to_string(),
        };
        let result = GitDeclaredBumpTool::execute(&params);
        let structured = result.structured_content.unwrap();
        assert!(structured["declared"].is_null());
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_missing_title() {
        let result = GitDeclaredBumpTool::http_handler(serde_json::json!({}));
        assert!(result.is_err());
    }
}
