//! Bump-inference tool definition.
//!
//! Exposes the commit classifier's OR-reduction: the highest version-impact
//! signal across a list of commit messages.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domains::semver::{BumpLevel, infer_bump};
use crate::domains::tools::definitions::common::structured_result;

/// Parameters for the bump-inference tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GitInferBumpParams {
    /// Commit messages to classify (subject, optionally followed by body).
    #[schemars(description = "Commit messages to classify")]
    pub commits: Vec<String>,
}

/// Result of bump inference.
#[derive(Debug, Serialize, JsonSchema)]
struct InferBumpResult {
    /// The inferred bump level.
    bump: BumpLevel,
    /// How many commit messages were classified.
    commit_count: usize,
}

/// Bump-inference tool - maps conventional commits to a version bump.
pub struct GitInferBumpTool;

impl GitInferBumpTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "git_infer_bump";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Infer the semantic-version bump (none/patch/minor/major) implied by a list of conventional commit messages. Any breaking change wins over features, features over fixes.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(commits = params.commits.len()))]
    pub fn execute(params: &GitInferBumpParams) -> CallToolResult {
        let bump = infer_bump(&params.commits);
        info!("Inferred {} from {} commit(s)", bump, params.commits.len());

        let result = InferBumpResult {
            bump,
            commit_count: params.commits.len(),
        };

        let summary = match bump {
            BumpLevel::None => "Commits carry no release-relevant signal".to_string(),
            _ => format!("Commits imply a {} bump", bump.as_tag()),
        };

        structured_result(summary, &result)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let commits = arguments
            .get("commits")
            .and_then(|v| v.as_array())
            .ok_or_else(|| "Missing or invalid 'commits' parameter".to_string())?
            .iter()
            .map(|v| v.as_str().map(|s| s.to_string()))
            .collect::<Option<Vec<String>>>()
            .ok_or_else(|| "'commits' must be an array of strings".to_string())?;

        let params = GitInferBumpParams { commits };
        let result = Self::execute(&params);

        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GitInferBumpParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<InferBumpResult>().into()),
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
                let params: GitInferBumpParams =
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

    fn params(commits: &[&str]) -> GitInferBumpParams {
        GitInferBumpParams {
            commits: commits.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_execute_minor() {
        let result = GitInferBumpTool::execute(&params(&["feat: x", "fix: y"]));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["bump"], "minor");
        assert_eq!(structured["commit_count"], 2);
    }

    #[test]
    fn test_execute_empty_is_none() {
        let result = GitInferBumpTool::execute(&params(&[]));
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["bump"], "none");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_missing_commits() {
        let result = GitInferBumpTool::http_handler(serde_json::json!({}));
        assert!(result.is_err());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_major() {
        let args = serde_json::json!({ "commits": ["feat!: breaking"] });
        let value = GitInferBumpTool::http_handler(args).unwrap();
        assert_eq!(value["structuredContent"]["bump"], "major");
    }
}
