//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for the STDIO transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own
//! route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    GitChangelogTool, GitDeclaredBumpTool, GitInferBumpTool, GitVersionGuardTool, HealthPingTool,
    ReleaseDryRunTool, ReleaseParseOutputTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GitChangelogTool::create_route(config.clone()))
        .with_route(GitDeclaredBumpTool::create_route())
        .with_route(GitInferBumpTool::create_route())
        .with_route(GitVersionGuardTool::create_route())
        .with_route(HealthPingTool::create_route())
        .with_route(ReleaseDryRunTool::create_route(config))
        .with_route(ReleaseParseOutputTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let tools = router.list_all();
        assert_eq!(tools.len(), 7);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"git_changelog"));
        assert!(names.contains(&"git_declared_bump"));
        assert!(names.contains(&"git_infer_bump"));
        assert!(names.contains(&"git_version_guard"));
        assert!(names.contains(&"health_ping"));
        assert!(names.contains(&"release_dry_run"));
        assert!(names.contains(&"release_parse_output"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let config = test_config();
        let registry = ToolRegistry::new(config.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(config);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
