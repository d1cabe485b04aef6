//! Recursive, depth-limited directory rendering.

use crate::error::{Error, Result};
use crate::exclude::Exclusions;
use crate::options::{EntryOrder, TraversalOptions};
use std::fs;
use std::path::{Path, PathBuf};

/// Connector for every sibling but the last.
pub const BRANCH: &str = "├── ";
/// Connector for the last sibling in a directory.
pub const LAST_BRANCH: &str = "└── ";

const INDENT: &str = "  ";

/// A listed child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TreeEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Render one tree line for an entry at `level`.
pub fn render_line(level: usize, is_last: bool, name: &str) -> String {
    let connector = if is_last { LAST_BRANCH } else { BRANCH };
    format!("{}{connector}{name}", INDENT.repeat(level))
}

/// Builds tree renderings for a fixed set of options.
///
/// Patterns are compiled once in [`TreeBuilder::new`], so a builder can be
/// reused across any number of roots.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    depth: usize,
    exclusions: Exclusions,
    order: EntryOrder,
}

impl TreeBuilder {
    pub fn new(options: &TraversalOptions) -> Result<Self> {
        Ok(Self {
            depth: options.depth,
            exclusions: Exclusions::new(options.exclude_patterns.as_slice())?,
            order: options.order,
        })
    }

    /// Render the tree below `root` as newline-separated lines.
    ///
    /// Returns an empty string when the depth is zero or nothing survives
    /// exclusion. Any unreadable directory aborts the whole build.
    pub fn build(&self, root: &Path) -> Result<String> {
        tracing::debug!(
            root = %root.display(),
            depth = self.depth,
            filtered = !self.exclusions.is_empty(),
            "building tree"
        );
        let mut lines = Vec::new();
        self.traverse(root, 0, &mut lines)?;
        Ok(lines.join("\n"))
    }

    fn traverse(&self, dir: &Path, level: usize, lines: &mut Vec<String>) -> Result<()> {
        if level >= self.depth {
            return Ok(());
        }

        let entries = self.read_entries(dir)?;
        let last = entries.len().saturating_sub(1);
        for (i, entry) in entries.iter().enumerate() {
            lines.push(render_line(level, i == last, &entry.name));
            if entry.is_dir {
                self.traverse(&entry.path, level + 1, lines)?;
            }
        }
        Ok(())
    }

    /// List the non-excluded children of `dir` in emission order.
    fn read_entries(&self, dir: &Path) -> Result<Vec<TreeEntry>> {
        tracing::trace!(dir = %dir.display(), "reading directory");
        let unreadable = |path: &Path| {
            let path = path.to_path_buf();
            move |source: std::io::Error| Error::PathUnreadable { path, source }
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(unreadable(dir))? {
            let entry = entry.map_err(unreadable(dir))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.exclusions.is_excluded(&name) {
                continue;
            }

            let path = entry.path();
            let file_type = entry.file_type().map_err(unreadable(&path))?;
            // Follow symlinks; a dangling link is listed as a plain entry.
            let is_dir = if file_type.is_symlink() {
                fs::metadata(&path).is_ok_and(|m| m.is_dir())
            } else {
                file_type.is_dir()
            };
            entries.push(TreeEntry { name, path, is_dir });
        }

        if self.order == EntryOrder::Name {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(entries)
    }
}

/// Build a tree rendering of `root` with the given options.
pub fn build_tree(root: &Path, options: &TraversalOptions) -> Result<String> {
    TreeBuilder::new(options)?.build(root)
}
