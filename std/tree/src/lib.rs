//! MCP server exposing depth-limited directory trees.
//!
//! Wraps the [`ddtree`] engine as a single tool, `get-deep-filesystem-tree`,
//! which renders the entries below a path as an indented tree. Server-wide
//! defaults and the error reporting style come from [`config::ServerConfig`].

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};
pub mod config;
pub mod tools;

pub use config::{ErrorReporting, Order, ServerConfig};

/// MCP server rendering directory trees.
#[derive(Debug, Clone)]
pub struct TreeServer {
    pub(crate) config: ServerConfig,
    pub(crate) tool_router: ToolRouter<Self>,
}

impl Default for TreeServer {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

#[tool_handler]
impl ServerHandler for TreeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "ddtree-mcp".into(),
                title: Some("Deep Directory Tree Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Renders an indented tree of a directory, limited by depth and filtered by name patterns."
                    .into(),
            ),
        }
    }
}
