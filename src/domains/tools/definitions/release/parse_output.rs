//! Release-output parsing tool definition.
//!
//! Pure adapter over the semrel scraper: callers that already hold dry-run
//! output (from CI logs, for instance) can parse it without re-running the
//! release computation.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::semver::{ReleaseParseResult, parse_release_output};
use crate::domains::tools::definitions::common::structured_result;

/// Parameters for the parse-output tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReleaseParseOutputParams {
    /// Combined stdout/stderr text of a semantic-release dry run.
    #[schemars(description = "Raw dry-run output text")]
    pub text: String,
}

/// Parse-output tool - structured view of dry-run release output.
pub struct ReleaseParseOutputTool;

impl ReleaseParseOutputTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "release_parse_output";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Parse semantic-release dry-run output into next version, release type, and notes. Missing markers degrade to absent/none/empty rather than errors.";

    /// Execute the tool logic.
    pub fn execute(params: &ReleaseParseOutputParams) -> CallToolResult {
        let parsed = parse_release_output(&params.text);
        info!(
            "Parsed release output: version={:?} type={}",
            parsed.next_version, parsed.release_type
        );

        let summary = match &parsed.next_version {
            Some(version) => {
                format!("Parsed next version {} ({} release)", version, parsed.release_type)
            }
            None => "No release version found in output".to_string(),
        };

        structured_result(summary, &parsed)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let text = arguments
            .get("text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'text' parameter".to_string())?
            .to_string();

        let params = ReleaseParseOutputParams { text };
        let result = Self::execute(&params);

        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ReleaseParseOutputParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<ReleaseParseResult>().into()),
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
                let params: ReleaseParseOutputParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
