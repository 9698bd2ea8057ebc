//! Display implementations for navigation trees

use std::fmt;

use super::*;

impl fmt::Display for NavigationNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationNode::Leaf(id) => write!(f, "{}", id),
            NavigationNode::Category(c) => {
                let noun = if c.items.len() == 1 { "item" } else { "items" };
                write!(f, "{} ({} {})", c.label, c.items.len(), noun)
            }
        }
    }
}

/// Indented outline, one node per line.
///
/// ```text
/// - index
/// + Guides
///   - setup
///   - usage
/// ```
impl fmt::Display for NavigationTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.items {
            write_outline(f, node, 0)?;
        }
        Ok(())
    }
}

fn write_outline(f: &mut fmt::Formatter<'_>, node: &NavigationNode, indent: usize) -> fmt::Result {
    let pad = "  ".repeat(indent);
    match node {
        NavigationNode::Leaf(id) => writeln!(f, "{}- {}", pad, id),
        NavigationNode::Category(c) => {
            writeln!(f, "{}+ {}", pad, c.label)?;
            for child in &c.items {
                write_outline(f, child, indent + 1)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline() {
        let tree = NavigationTree::new(vec![
            NavigationNode::leaf("index"),
            NavigationNode::category(
                "Guides",
                vec![NavigationNode::leaf("setup"), NavigationNode::leaf("usage")],
            ),
        ]);
        assert_eq!(
            tree.to_string(),
            "- index\n+ Guides\n  - setup\n  - usage\n"
        );
    }

    #[test]
    fn test_empty_tree_renders_nothing() {
        assert_eq!(NavigationTree::default().to_string(), "");
    }

    #[test]
    fn test_node_summary() {
        assert_eq!(NavigationNode::leaf("a").to_string(), "a");
        assert_eq!(
            NavigationNode::category("One", vec![NavigationNode::leaf("a")]).to_string(),
            "One (1 item)"
        );
        assert_eq!(
            NavigationNode::category("Empty", vec![]).to_string(),
            "Empty (0 items)"
        );
    }
}
