//! Node locations for diagnostics

use std::fmt;

use serde::{Serialize, Serializer};

/// Default name of the root segment of a path.
pub const ROOT: &str = "root";

/// One step from a parent value to a child value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Position within a sequence: `[2]`
    Index(usize),

    /// Key within a mapping: `.items`
    Key(String),
}

/// The location of a node, from the root of its tree.
///
/// Renders as `root[2].items[0]`. Paths are immutable; [`NodePath::index`]
/// and [`NodePath::key`] return extended copies so a recursive walk can hand
/// each child its own path.
///
/// # Example
///
/// ```
/// use navtree::NodePath;
///
/// let path = NodePath::root().index(2).key("items").index(0);
/// assert_eq!(path.to_string(), "root[2].items[0]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath {
    root: String,
    segments: Vec<PathSegment>,
}

impl NodePath {
    /// The path of a tree root named `root`.
    pub fn root() -> Self {
        Self::named(ROOT)
    }

    /// The path of a tree root with a custom name, such as a sidebar name.
    pub fn named(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            segments: Vec::new(),
        }
    }

    /// Extend with a sequence index.
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    /// Extend with a mapping key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(PathSegment::Key(key.into()))
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment);
        Self {
            root: self.root.clone(),
            segments,
        }
    }

    /// Name of the root segment.
    pub fn root_name(&self) -> &str {
        &self.root
    }

    /// Segments after the root, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Whether this path points at the root itself.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Nesting depth of the node this path points at.
    ///
    /// Top-level nodes (`root[0]`) are at depth 1; each enclosing category
    /// adds one. Key segments do not count.
    pub fn depth(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::Index(_)))
            .count()
    }
}

impl Default for NodePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        for segment in &self.segments {
            match segment {
                PathSegment::Index(i) => write!(f, "[{}]", i)?,
                PathSegment::Key(k) => write!(f, ".{}", k)?,
            }
        }
        Ok(())
    }
}

impl Serialize for NodePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Allows `assert_eq!(path, "root[0]")` in tests and callers.
impl PartialEq<str> for NodePath {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for NodePath {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}
