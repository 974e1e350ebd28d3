//! Serializable tree snapshots
//!
//! A `TreeSnapshot` is a plain owned mirror of a node tree for serialization
//! and tooling. It keeps structure, node kinds, and labels, and drops the
//! shared-variable identity (each occurrence snapshots independently).

use crate::gptree::node::Node;
use serde::Serialize;

/// Node family tag in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Function,
    Literal,
    Variable,
}

/// Owned, serializable mirror of a parsed tree.
#[derive(Debug, Clone, Serialize)]
pub struct TreeSnapshot {
    pub kind: NodeKind,
    pub label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSnapshot>,
}

/// Build a snapshot of a node tree.
pub fn snapshot_from_node(node: &Node) -> TreeSnapshot {
    TreeSnapshot {
        kind: match node {
            Node::Function(_) => NodeKind::Function,
            Node::Literal(_) => NodeKind::Literal,
            Node::Variable(_) => NodeKind::Variable,
        },
        label: node.label(),
        children: node.children().iter().map(snapshot_from_node).collect(),
    }
}

/// Serialize a tree to pretty JSON.
pub fn to_json_str(node: &Node) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&snapshot_from_node(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gptree::parser::ProgramParser;

    #[test]
    fn snapshot_mirrors_the_tree_shape() {
        let parser = ProgramParser::new();
        let tree = parser.parse("IF(true,false,true)").unwrap();

        let snapshot = snapshot_from_node(&tree);
        assert_eq!(snapshot.kind, NodeKind::Function);
        assert_eq!(snapshot.label, "IF");
        assert_eq!(snapshot.children.len(), 3);
        assert_eq!(snapshot.children[0].kind, NodeKind::Literal);
        assert!(snapshot.children[0].children.is_empty());
    }

    #[test]
    fn terminal_snapshots_omit_the_children_field() {
        let parser = ProgramParser::new();
        let tree = parser.parse("3.14").unwrap();

        let json = to_json_str(&tree).unwrap();
        assert!(json.contains("\"literal\""));
        assert!(!json.contains("children"));
    }
}
