//! Changelog tool definition.
//!
//! Reads the commit log for a revision range and renders conventional-style
//! changelog sections. The git invocation runs to completion before any
//! classification starts; a non-zero exit code is reported next to the
//! best-effort parse, not instead of it.

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
use crate::domains::exec::{format_range, read_commits};
use crate::domains::semver::{ChangelogBucket, bucket_commits, render_sections};
use crate::domains::tools::definitions::common::{error_result, resolve_repo_path, structured_result};

/// Parameters for the changelog tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GitChangelogParams {
    /// Repository to read; defaults to the configured repository.
    #[schemars(description = "Path to the git repository (optional)")]
    pub repo_path: Option<String>,

    /// Start of the revision range (exclusive), e.g. a previous tag.
    #[schemars(description = "Range start revision, e.g. the last release tag (optional)")]
    pub since: Option<String>,

    /// End of the revision range; defaults to HEAD.
    #[schemars(description = "Range end revision (optional, defaults to HEAD)")]
    pub until: Option<String>,
}

/// Rendered changelog for a revision range.
#[derive(Debug, Serialize, JsonSchema)]
struct ChangelogResult {
    /// The revision range that was read.
    range: String,
    /// Whether git log exited successfully.
    ok: bool,
    /// git log exit code.
    code: i32,
    /// Number of commit records read.
    commit_count: usize,
    /// Markdown sections, joined by blank lines.
    sections: String,
    /// The non-empty buckets in display order.
    buckets: Vec<ChangelogBucket>,
}

/// Changelog tool - buckets a commit range into conventional sections.
pub struct GitChangelogTool;

impl GitChangelogTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "git_changelog";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate a simple conventional-style changelog between two revisions. Groups commits under Breaking Changes, Features, Fixes, Performance, and Other.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(since = ?params.since, until = ?params.until))]
    pub async fn execute(params: &GitChangelogParams, config: &Config) -> CallToolResult {
        let repo_path = match resolve_repo_path(params.repo_path.as_deref(), config) {
            Ok(path) => path,
            Err(message) => return error_result(&message),
        };

        let range = format_range(params.since.as_deref(), params.until.as_deref());
        info!("Generating changelog for {}", range);

        let (records, output) = match read_commits(&repo_path, &range).await {
            Ok(read) => read,
            Err(e) => return error_result(&format!("Failed to run git log: {}", e)),
        };

        if !output.success() {
            warn!("git log exited with code {}: {}", output.code, output.stderr.trim());
        }

        let buckets = bucket_commits(&records);
        let sections = render_sections(&buckets);

        let result = ChangelogResult {
            range: range.clone(),
            ok: output.success(),
            code: output.code,
            commit_count: records.len(),
            sections,
            buckets,
        };

        let summary = if result.ok {
            format!(
                "Changelog for {}: {} commit(s) in {} section(s)",
                range,
                result.commit_count,
                result.buckets.len()
            )
        } else {
            format!(
                "git log exited with code {} for {}; returning best-effort changelog",
                result.code, range
            )
        };

        structured_result(summary, &result)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let get_string = |key: &str| {
            arguments
                .get(key)
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
        };

        let params = GitChangelogParams {
            repo_path: get_string("repo_path"),
            since: get_string("since"),
            until: get_string("until"),
        };

        let result = Self::execute(&params, &config).await;
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GitChangelogParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<ChangelogResult>().into()),
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
                let params: GitChangelogParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}
