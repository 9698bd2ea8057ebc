//! Typed navigation tree

mod codec;
mod display;

use indexmap::IndexMap;

use crate::path::NodePath;

/// A single entry in a sidebar.
///
/// Resolved once from the raw configuration by the validator; code that
/// consumes a tree matches on the variant instead of inspecting shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationNode {
    /// Reference to one external document
    Leaf(String),

    /// Labelled group of child nodes
    Category(Category),
}

/// A labelled, ordered group of navigation nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Display label, never empty in a validated tree
    pub label: String,

    /// Children in display order
    pub items: Vec<NavigationNode>,
}

impl Category {
    /// Create a category.
    pub fn new(label: impl Into<String>, items: Vec<NavigationNode>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }

    /// Whether the category has no children.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl NavigationNode {
    /// Create a leaf node.
    pub fn leaf(document_id: impl Into<String>) -> Self {
        NavigationNode::Leaf(document_id.into())
    }

    /// Create a category node.
    pub fn category(label: impl Into<String>, items: Vec<NavigationNode>) -> Self {
        NavigationNode::Category(Category::new(label, items))
    }

    /// The document id, if this is a leaf.
    pub fn document_id(&self) -> Option<&str> {
        match self {
            NavigationNode::Leaf(id) => Some(id),
            NavigationNode::Category(_) => None,
        }
    }

    /// The category, if this is one.
    pub fn as_category(&self) -> Option<&Category> {
        match self {
            NavigationNode::Category(c) => Some(c),
            NavigationNode::Leaf(_) => None,
        }
    }

    /// Whether this is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, NavigationNode::Leaf(_))
    }

    /// Children of a category; empty for leaves.
    pub fn children(&self) -> &[NavigationNode] {
        match self {
            NavigationNode::Category(c) => &c.items,
            NavigationNode::Leaf(_) => &[],
        }
    }
}

/// The validated root of a sidebar: an ordered sequence of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationTree {
    items: Vec<NavigationNode>,
}

impl NavigationTree {
    /// Create a tree from already-typed nodes.
    ///
    /// This does not validate; use [`crate::validate`] on raw input.
    pub fn new(items: Vec<NavigationNode>) -> Self {
        Self { items }
    }

    /// Top-level nodes in display order.
    pub fn items(&self) -> &[NavigationNode] {
        &self.items
    }

    /// Consume the tree, returning its top-level nodes.
    pub fn into_items(self) -> Vec<NavigationNode> {
        self.items
    }

    /// Number of top-level nodes.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Depth-first, left-to-right traversal of every node with its path.
    pub fn walk(&self) -> Walk<'_> {
        self.walk_from(NodePath::root())
    }

    /// Like [`NavigationTree::walk`], with paths rooted at `root`.
    pub fn walk_from(&self, root: NodePath) -> Walk<'_> {
        let mut stack = Vec::with_capacity(self.items.len());
        for (i, node) in self.items.iter().enumerate().rev() {
            stack.push((root.index(i), node));
        }
        Walk { stack }
    }

    /// Every document id in traversal order, duplicates included.
    pub fn document_ids(&self) -> Vec<&str> {
        self.walk().filter_map(|(_, node)| node.document_id()).collect()
    }

    /// Maximum nesting depth; top-level nodes are at depth 1.
    pub fn depth(&self) -> usize {
        self.walk().map(|(path, _)| path.depth()).max().unwrap_or(0)
    }

    /// Find the path of the first leaf referencing `document_id`.
    pub fn find(&self, document_id: &str) -> Option<NodePath> {
        self.walk()
            .find(|(_, node)| node.document_id() == Some(document_id))
            .map(|(path, _)| path)
    }
}

impl From<Vec<NavigationNode>> for NavigationTree {
    fn from(items: Vec<NavigationNode>) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for &'a NavigationTree {
    type Item = &'a NavigationNode;
    type IntoIter = std::slice::Iter<'a, NavigationNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Iterator returned by [`NavigationTree::walk`].
pub struct Walk<'a> {
    stack: Vec<(NodePath, &'a NavigationNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (NodePath, &'a NavigationNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;
        if let NavigationNode::Category(category) = node {
            let items_path = path.key("items");
            for (i, child) in category.items.iter().enumerate().rev() {
                self.stack.push((items_path.index(i), child));
            }
        }
        Some((path, node))
    }
}

/// Named sidebars from one configuration, in declaration order.
pub type Sidebars = IndexMap<String, NavigationTree>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NavigationTree {
        NavigationTree::new(vec![
            NavigationNode::leaf("index"),
            NavigationNode::category(
                "Guides",
                vec![
                    NavigationNode::leaf("setup"),
                    NavigationNode::category("Advanced", vec![NavigationNode::leaf("tuning")]),
                ],
            ),
            NavigationNode::leaf("faq"),
        ])
    }

    #[test]
    fn test_walk_order() {
        let tree = sample();
        let paths: Vec<String> = tree.walk().map(|(p, _)| p.to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "root[0]",
                "root[1]",
                "root[1].items[0]",
                "root[1].items[1]",
                "root[1].items[1].items[0]",
                "root[2]",
            ]
        );
    }

    #[test]
    fn test_document_ids_in_traversal_order() {
        assert_eq!(sample().document_ids(), vec!["index", "setup", "tuning", "faq"]);
    }

    #[test]
    fn test_depth() {
        assert_eq!(NavigationTree::default().depth(), 0);
        assert_eq!(sample().depth(), 3);
    }

    #[test]
    fn test_find() {
        let tree = sample();
        assert_eq!(tree.find("tuning").unwrap(), "root[1].items[1].items[0]");
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_node_accessors() {
        let leaf = NavigationNode::leaf("a");
        assert!(leaf.is_leaf());
        assert_eq!(leaf.document_id(), Some("a"));
        assert!(leaf.children().is_empty());

        let cat = NavigationNode::category("C", vec![leaf.clone()]);
        assert!(!cat.is_leaf());
        assert_eq!(cat.as_category().unwrap().label, "C");
        assert_eq!(cat.children(), &[leaf]);
    }
}
