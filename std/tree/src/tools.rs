//! Tool implementations for the tree MCP server.

use crate::TreeServer;
use crate::config::{ErrorReporting, ServerConfig};
use ddtree::TreeBuilder;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Per-call traversal options. Omitted fields use the server defaults.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TreeOptionsParams {
    /// Depth of the filesystem structure (levels below the root).
    ///
    /// Any JSON number is accepted here and validated by the tool, so a
    /// negative or fractional depth is reported like every other tree error.
    pub depth: Option<f64>,
    /// Patterns to exclude from the tree (e.g. ["node_modules", "*.log"]).
    pub exclude_patterns: Option<Vec<String>>,
}

/// Parameters for the deep filesystem tree tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TreeParams {
    /// Path to the root of the filesystem tree.
    pub path: String,
    /// Tree generation options.
    #[serde(default)]
    pub options: Option<TreeOptionsParams>,
}

#[tool_router]
impl TreeServer {
    /// Create a new tree server with the given defaults.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Render the directory tree below a path.
    #[tool(
        name = "get-deep-filesystem-tree",
        description = "Get deep filesystem tree"
    )]
    async fn get_deep_filesystem_tree(
        &self,
        Parameters(params): Parameters<TreeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let root = PathBuf::from(&params.path);
        let builder = match self
            .config
            .resolve(params.options)
            .and_then(|opts| TreeBuilder::new(&opts))
        {
            Ok(builder) => builder,
            Err(e) => return self.report(&params.path, e),
        };

        let built = tokio::task::spawn_blocking(move || builder.build(&root))
            .await
            .map_err(|e| ErrorData::internal_error(format!("tree task failed: {e}"), None))?;

        match built {
            Ok(tree) => {
                tracing::debug!(path = %params.path, lines = tree.lines().count(), "tree built");
                Ok(CallToolResult::success(vec![Content::text(tree)]))
            }
            Err(e) => self.report(&params.path, e),
        }
    }
}

impl TreeServer {
    /// Surface a core failure according to the configured reporting style.
    fn report(&self, path: &str, err: ddtree::Error) -> Result<CallToolResult, ErrorData> {
        tracing::warn!(path, error = %err, "tree request failed");
        match self.config.errors {
            ErrorReporting::Text => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {err}"
            ))])),
            ErrorReporting::Fault => Err(error_data(&err)),
        }
    }
}

fn error_data(err: &ddtree::Error) -> ErrorData {
    match err {
        ddtree::Error::InvalidOptions(_) | ddtree::Error::Pattern { .. } => {
            ErrorData::invalid_params(err.to_string(), None)
        }
        ddtree::Error::PathUnreadable { .. } => ErrorData::internal_error(err.to_string(), None),
    }
}
