//! Depth-limited directory tree rendering.
//!
//! Walks a directory from a root path, drops entries whose bare name matches
//! an exclusion pattern, and renders the survivors as indented lines:
//!
//! ```text
//! ├── a.txt
//! └── b
//!   └── c.txt
//! ```
//!
//! The crate has no global state and performs no I/O beyond reading
//! directories, so it can be embedded in any host.

pub mod builder;
pub mod error;
pub mod exclude;
pub mod options;

pub use builder::{TreeBuilder, build_tree, render_line};
pub use error::{Error, Result};
pub use exclude::Exclusions;
pub use options::{
    DEFAULT_DEPTH, DEFAULT_EXCLUDE_PATTERNS, EntryOrder, TraversalOptions, parse_depth,
};
