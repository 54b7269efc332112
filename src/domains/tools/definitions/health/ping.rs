//! Liveness-check tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domains::tools::definitions::common::structured_result;

/// Parameters for the ping tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct HealthPingParams {}

/// Liveness response.
#[derive(Debug, Serialize, JsonSchema)]
struct PingResult {
    /// Always true when the server answered.
    ok: bool,
    /// Server-side RFC 3339 timestamp.
    ts: String,
}

/// Ping tool - reports that the server is alive.
pub struct HealthPingTool;

impl HealthPingTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "health_ping";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Check if the DevWorkflow server is alive. Returns ok plus a server timestamp.";

    /// Execute the tool logic.
    pub fn execute() -> CallToolResult {
        debug!("Ping");

        let result = PingResult {
            ok: true,
            ts: chrono::Utc::now().to_rfc3339(),
        };

        structured_result(format!("Server alive at {}", result.ts), &result)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(_arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let result = Self::execute();
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<HealthPingParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<PingResult>().into()),
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
        ToolRoute::new_dyn(Self::to_tool(), |_ctx: ToolCallContext<'_, S>| {
            async move { Ok(Self::execute()) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_reports_ok() {
        let result = HealthPingTool::execute();
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["ok"], true);
        assert!(structured["ts"].as_str().unwrap().contains('T'));
    }
}
