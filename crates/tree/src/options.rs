//! Traversal options shared by every tree build.

use crate::error::{Error, Result};

/// Depth used when the caller does not supply one.
pub const DEFAULT_DEPTH: usize = 3;

/// Exclusion set used when the caller does not supply one.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &["node_modules"];

/// Order in which siblings are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryOrder {
    /// Sort siblings by name, byte-wise.
    #[default]
    Name,
    /// Keep whatever order the platform's directory listing returns.
    Listing,
}

/// Options for a single traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Levels of descent below the root. Zero yields an empty tree.
    pub depth: usize,
    /// Literal names or `*` wildcards matched against bare entry names.
    pub exclude_patterns: Vec<String>,
    pub order: EntryOrder,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            exclude_patterns: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            order: EntryOrder::default(),
        }
    }
}

impl TraversalOptions {
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_exclude_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_order(mut self, order: EntryOrder) -> Self {
        self.order = order;
        self
    }
}

/// Convert an untyped depth (e.g. a JSON number) into a traversal depth.
///
/// Accepts any non-negative whole number; fractions, negatives and
/// non-finite values are rejected.
pub fn parse_depth(raw: f64) -> Result<usize> {
    if !raw.is_finite() || raw < 0.0 || raw.fract() != 0.0 {
        return Err(Error::InvalidOptions(format!(
            "depth must be a non-negative integer, got {raw}"
        )));
    }
    Ok(raw as usize)
}
