//! Release dry-run tool definition.
//!
//! Runs semantic-release in dry mode and scrapes next version, release type,
//! and notes out of its output. The child runs to completion with no
//! internal timeout; parsing happens even when the run fails, since partial
//! output may still be informative. `ok`/`code` report the exit status next
//! to the parse result.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::config::Config;
use crate::domains::exec::run_command;
use crate::domains::semver::{BumpLevel, parse_release_output};
use crate::domains::tools::definitions::common::{error_result, resolve_repo_path, structured_result};

/// Parameters for the dry-run tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReleaseDryRunParams {
    /// Repository to analyze; defaults to the configured repository.
    #[schemars(description = "Path to the git repository (optional)")]
    pub repo_path: Option<String>,

    /// Branch passed to semantic-release via --branches.
    #[schemars(description = "Branch to analyze (optional)")]
    pub branch: Option<String>,
}

/// Outcome of a semantic-release dry run.
#[derive(Debug, Serialize, JsonSchema)]
struct DryRunResult {
    /// Whether semantic-release exited successfully.
    ok: bool,
    /// semantic-release exit code.
    code: i32,
    /// The computed next version, when one was announced.
    next_version: Option<String>,
    /// Release type scraped from the output.
    release_type: BumpLevel,
    /// Release notes section, when present.
    notes: String,
    /// Combined stdout/stderr of the run.
    raw: String,
}

/// Dry-run tool - computes the next release without publishing.
pub struct ReleaseDryRunTool;

impl ReleaseDryRunTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "release_dry_run";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Run semantic-release in dry mode and return next version + notes.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(branch = ?params.branch))]
    pub async fn execute(params: &ReleaseDryRunParams, config: &Config) -> CallToolResult {
        let repo_path = match resolve_repo_path(params.repo_path.as_deref(), config) {
            Ok(path) => path,
            Err(message) => return error_result(&message),
        };

        let program = config
            .release
            .semantic_release_bin
            .as_deref()
            .unwrap_or("npx");

        // npx needs the package name in front of the flags; a configured
        // binary is invoked directly.
        let mut args: Vec<String> = if program == "npx" {
            vec!["semantic-release".to_string()]
        } else {
            Vec::new()
        };
        args.push("--dry-run".to_string());
        args.push("--no-ci".to_string());

        let branch = params
            .branch
            .clone()
            .or_else(|| config.release.default_branch.clone());
        if let Some(branch) = &branch {
            args.push("--branches".to_string());
            args.push(branch.clone());
        }

        let token = config.credentials.github_token.clone().unwrap_or_default();
        let envs = [("GITHUB_TOKEN", token.clone()), ("GH_TOKEN", token)];

        info!("Running semantic-release dry run in {:?}", repo_path);

        let output = match run_command(program, &args, &repo_path, &envs).await {
            Ok(output) => output,
            Err(e) => return error_result(&format!("Failed to run semantic-release: {}", e)),
        };

        if !output.success() {
            warn!("semantic-release exited with code {}", output.code);
        }

        let combined = output.combined();
        let parsed = parse_release_output(&combined);

        let result = DryRunResult {
            ok: output.success(),
            code: output.code,
            next_version: parsed.next_version,
            release_type: parsed.release_type,
            notes: parsed.notes,
            raw: combined,
        };

        let summary = match &result.next_version {
            Some(version) => format!(
                "Next release: {} ({} release, exit code {})",
                version, result.release_type, result.code
            ),
            None => format!("No release would be published (exit code {})", result.code),
        };

        structured_result(summary, &result)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let repo_path = arguments
            .get("repo_path")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let branch = arguments
            .get("branch")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let params = ReleaseDryRunParams { repo_path, branch };
        let result = Self::execute(&params, &config).await;

        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ReleaseDryRunParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<DryRunResult>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: ReleaseDryRunParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}
