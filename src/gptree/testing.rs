//! Testing utilities for tree assertions
//!
//! What a tree test wants is assurance on the tree's shape and on the
//! content of each node, not generalities like node counts. Matching nested
//! trees by hand means a ladder of `match` arms per level; the fluent API
//! here verifies whole hierarchies in a few lines:
//!
//! ```rust-example
//! use gptree::gptree::testing::assert_tree;
//!
//! let tree = parser.parse("AND(OR(true,false),NOT(true))")?;
//! assert_tree(&tree)
//!     .label("AND")
//!     .child_count(2)
//!     .child(0, |or| {
//!         or.label("OR")
//!             .child(0, |c| { c.is_bool_literal(true); })
//!             .child(1, |c| { c.is_bool_literal(false); });
//!     })
//!     .child(1, |not| {
//!         not.label("NOT").child_count(1);
//!     });
//! ```
//!
//! Every assertion panics with the path of the offending node, so a failure
//! deep in a tree reads as `root.1.0` rather than a bare mismatch.

use crate::gptree::node::{Node, Value};

/// Entry point for fluent tree assertions.
pub fn assert_tree(node: &Node) -> TreeAssert<'_> {
    TreeAssert {
        node,
        path: "root".to_string(),
    }
}

/// Fluent assertion over one node; `child` descends.
pub struct TreeAssert<'a> {
    node: &'a Node,
    path: String,
}

impl<'a> TreeAssert<'a> {
    pub fn label(self, expected: &str) -> Self {
        assert_eq!(self.node.label(), expected, "label mismatch at {}", self.path);
        self
    }

    pub fn arity(self, expected: usize) -> Self {
        assert_eq!(self.node.arity(), expected, "arity mismatch at {}", self.path);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.children().len(),
            expected,
            "child count mismatch at {}",
            self.path
        );
        self
    }

    pub fn is_function(self) -> Self {
        assert!(
            matches!(self.node, Node::Function(_)),
            "expected a function node at {}",
            self.path
        );
        self
    }

    pub fn is_bool_literal(self, expected: bool) -> Self {
        match self.node {
            Node::Literal(lit) => assert_eq!(
                lit.value(),
                Value::Boolean(expected),
                "literal mismatch at {}",
                self.path
            ),
            other => panic!("expected a boolean literal at {}, found {other:?}", self.path),
        }
        self
    }

    pub fn is_number_literal(self, expected: f64) -> Self {
        match self.node {
            Node::Literal(lit) => assert_eq!(
                lit.value(),
                Value::Number(expected),
                "literal mismatch at {}",
                self.path
            ),
            other => panic!("expected a number literal at {}, found {other:?}", self.path),
        }
        self
    }

    pub fn is_variable(self, expected_ident: &str) -> Self {
        match self.node {
            Node::Variable(var) => assert_eq!(
                var.ident(),
                expected_ident,
                "variable mismatch at {}",
                self.path
            ),
            other => panic!(
                "expected variable '{expected_ident}' at {}, found {other:?}",
                self.path
            ),
        }
        self
    }

    /// Run assertions against the child at `index`.
    pub fn child(self, index: usize, assertions: impl FnOnce(TreeAssert<'_>)) -> Self {
        let child = self.node.child(index).unwrap_or_else(|| {
            panic!(
                "no child {index} at {} (node has {} children)",
                self.path,
                self.node.children().len()
            )
        });
        assertions(TreeAssert {
            node: child,
            path: format!("{}.{index}", self.path),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gptree::parser::ProgramParser;

    #[test]
    fn asserts_whole_hierarchies() {
        let parser = ProgramParser::new();
        let tree = parser.parse("IF(true,false,3.5)").unwrap();

        assert_tree(&tree)
            .is_function()
            .label("IF")
            .arity(3)
            .child_count(3)
            .child(0, |c| {
                c.is_bool_literal(true);
            })
            .child(1, |c| {
                c.is_bool_literal(false);
            })
            .child(2, |c| {
                c.is_number_literal(3.5);
            });
    }

    #[test]
    #[should_panic(expected = "root.0")]
    fn failures_name_the_node_path() {
        let parser = ProgramParser::new();
        let tree = parser.parse("NOT(true)").unwrap();

        assert_tree(&tree).child(0, |c| {
            c.is_bool_literal(false);
        });
    }
}
