//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Release tooling configuration.
    pub release: ReleaseConfig,

    /// External credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the release-workflow tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseConfig {
    /// Default repository to operate on when a tool call omits `repo_path`.
    pub repo_path: Option<PathBuf>,

    /// Path to the semantic-release binary. Falls back to `npx` when unset.
    pub semantic_release_bin: Option<String>,

    /// Default branch passed to semantic-release dry runs.
    pub default_branch: Option<String>,
}

/// Configuration for external credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// GitHub token forwarded to semantic-release as GITHUB_TOKEN/GH_TOKEN.
    pub github_token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "github_token",
                &self.github_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "devworkflow-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            release: ReleaseConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `MCP_` (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_REPO_PATH`, ...), except `GITHUB_TOKEN` which
    /// keeps its ecosystem-standard name.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(repo_path) = std::env::var("MCP_REPO_PATH") {
            config.release.repo_path = Some(PathBuf::from(repo_path));
            info!("Default repository: {:?}", config.release.repo_path);
        } else {
            warn!(
                "MCP_REPO_PATH not set - release_dry_run and git_changelog \
                 will require an explicit repo_path argument"
            );
        }

        if let Ok(bin) = std::env::var("MCP_SEMANTIC_RELEASE_BIN") {
            config.release.semantic_release_bin = Some(bin);
        }

        if let Ok(branch) = std::env::var("MCP_RELEASE_BRANCH") {
            config.release.default_branch = Some(branch);
        }

        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            config.credentials.github_token = Some(token);
            info!("GitHub token loaded from environment");
        } else {
            warn!(
                "GITHUB_TOKEN not set - semantic-release dry runs against \
                 private repositories will fail to authenticate"
            );
        }

        config
    }
}
