//! Host configuration for the tree server.
//!
//! Everything here is a deployment choice layered over the core: the
//! fallback depth and exclusion set, sibling order, and how failures are
//! reported back to the caller.

use crate::tools::TreeOptionsParams;
use clap::{Args, ValueEnum};
use ddtree::{DEFAULT_DEPTH, DEFAULT_EXCLUDE_PATTERNS, EntryOrder, TraversalOptions};

/// How a failed tree build is reported to the MCP client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ErrorReporting {
    /// Fail the call with a protocol-level error.
    #[default]
    Fault,
    /// Return `Error: <message>` as tool output, flagged as an error result.
    Text,
}

/// Sibling order in the rendered tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Sorted by name.
    #[default]
    Name,
    /// As returned by the directory listing.
    Listing,
}

impl From<Order> for EntryOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Name => EntryOrder::Name,
            Order::Listing => EntryOrder::Listing,
        }
    }
}

fn default_exclude_patterns() -> Vec<String> {
    DEFAULT_EXCLUDE_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

/// Server-wide defaults, filled from flags or `DDTREE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ServerConfig {
    /// Depth used when a call does not specify one.
    #[arg(long, env = "DDTREE_DEPTH", default_value_t = DEFAULT_DEPTH)]
    pub depth: usize,

    /// Exclusion pattern used when a call does not specify any (repeatable).
    #[arg(
        long = "exclude",
        value_name = "PATTERN",
        env = "DDTREE_EXCLUDE",
        value_delimiter = ',',
        default_values_t = default_exclude_patterns()
    )]
    pub exclude_patterns: Vec<String>,

    /// Order of siblings within a directory.
    #[arg(long, env = "DDTREE_ORDER", value_enum, default_value_t = Order::default())]
    pub order: Order,

    /// How failures are returned to the client.
    #[arg(long, env = "DDTREE_ERRORS", value_enum, default_value_t = ErrorReporting::default())]
    pub errors: ErrorReporting,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            exclude_patterns: default_exclude_patterns(),
            order: Order::default(),
            errors: ErrorReporting::default(),
        }
    }
}

impl ServerConfig {
    /// Merge per-call options over the server defaults.
    pub fn resolve(&self, params: Option<TreeOptionsParams>) -> ddtree::Result<TraversalOptions> {
        let params = params.unwrap_or_default();
        let depth = match params.depth {
            Some(raw) => ddtree::parse_depth(raw)?,
            None => self.depth,
        };
        let exclude_patterns = params
            .exclude_patterns
            .unwrap_or_else(|| self.exclude_patterns.clone());
        Ok(TraversalOptions {
            depth,
            exclude_patterns,
            order: self.order.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ErrorReporting, Order, ServerConfig};
    use crate::tools::TreeOptionsParams;
    use clap::Parser;
    use ddtree::EntryOrder;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ServerConfig,
    }

    fn parse(args: &[&str]) -> ServerConfig {
        let argv = std::iter::once("ddtree-mcp").chain(args.iter().copied());
        TestCli::try_parse_from(argv).unwrap().config
    }

    #[test]
    fn cli_defaults_match_default_impl() {
        assert_eq!(parse(&[]), ServerConfig::default());
    }

    #[test]
    fn cli_overrides() {
        let config = parse(&[
            "--depth",
            "5",
            "--exclude",
            "node_modules",
            "--exclude",
            ".git",
            "--order",
            "listing",
            "--errors",
            "text",
        ]);
        assert_eq!(config.depth, 5);
        assert_eq!(config.exclude_patterns, vec!["node_modules", ".git"]);
        assert_eq!(config.order, Order::Listing);
        assert_eq!(config.errors, ErrorReporting::Text);
    }

    #[test]
    fn exclude_accepts_comma_list() {
        let config = parse(&["--exclude", "node_modules,.git,*.log"]);
        assert_eq!(config.exclude_patterns, vec!["node_modules", ".git", "*.log"]);
    }

    #[test]
    fn resolve_falls_back_to_config() {
        let config = ServerConfig {
            depth: 2,
            exclude_patterns: vec![".git".into()],
            order: Order::Listing,
            ..Default::default()
        };
        let opts = config.resolve(None).unwrap();
        assert_eq!(opts.depth, 2);
        assert_eq!(opts.exclude_patterns, vec![".git"]);
        assert_eq!(opts.order, EntryOrder::Listing);
    }

    #[test]
    fn resolve_prefers_call_options() {
        let config = ServerConfig::default();
        let opts = config
            .resolve(Some(TreeOptionsParams {
                depth: Some(1.0),
                exclude_patterns: Some(vec![]),
            }))
            .unwrap();
        assert_eq!(opts.depth, 1);
        assert!(opts.exclude_patterns.is_empty());
    }

    #[test]
    fn resolve_rejects_negative_depth() {
        let err = ServerConfig::default()
            .resolve(Some(TreeOptionsParams {
                depth: Some(-3.0),
                exclude_patterns: None,
            }))
            .unwrap_err();
        assert!(matches!(err, ddtree::Error::InvalidOptions(_)));
    }
}
