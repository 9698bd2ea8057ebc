//! # navtree
//!
//! Typed parsing and validation of documentation sidebar navigation.
//!
//! A sidebar is declared as nested configuration data: document ids as plain
//! strings, and categories as mappings with a `label` and ordered `items`.
//! navtree turns that data into a [`NavigationTree`] once, checking its
//! invariants on the way, so the site generator consuming it can rely on the
//! shape instead of re-inspecting raw values.
//!
//! ## Architecture
//!
//! - **Formats**: decode JSON or YAML text into a raw value
//! - **Validator**: classify raw values into [`NavigationNode`]s, fail fast on
//!   structural errors, then report duplicate document ids
//! - **Tree**: the validated, immutable result, with traversal helpers
//!
//! ## Example
//!
//! ```
//! use navtree::{validate, NavigationNode, NavigationTree};
//! use serde_json::json;
//!
//! let tree = validate(&json!([
//!     "index",
//!     {"label": "Guides", "items": ["setup", "usage"]}
//! ]))
//! .unwrap();
//!
//! assert_eq!(
//!     tree,
//!     NavigationTree::new(vec![
//!         NavigationNode::leaf("index"),
//!         NavigationNode::category(
//!             "Guides",
//!             vec![NavigationNode::leaf("setup"), NavigationNode::leaf("usage")],
//!         ),
//!     ])
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod format;
pub mod formats;
pub mod path;
pub mod tree;
pub mod validate;

// Re-export main types
pub use context::ValidateOptions;
pub use error::{LoadError, Result, ValidationError};
pub use format::{
    format_by_name, format_for_path, load_file, parse_tree, read_raw, select_sidebar, ConfigFormat,
};
pub use formats::{JsonFormat, YamlFormat, JSON, YAML};
pub use path::{NodePath, PathSegment};
pub use tree::{Category, NavigationNode, NavigationTree, Sidebars, Walk};
pub use validate::{validate, validate_sidebars, Report, Validator, Warning};

/// navtree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
