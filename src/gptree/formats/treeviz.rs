//! Treeviz formatter for program trees
//!
//! Treeviz is a one line per node rendering that encodes tree structure as
//! indentation, with 2 white spaces per level of nesting:
//!
//!     ƒ AND
//!       ƒ OR
//!         • true
//!         • false
//!       ƒ NOT
//!         • true
//!
//! Icons:
//!     Function: ƒ
//!     Literal: •
//!     Variable: $

use crate::gptree::node::Node;

/// Get the icon for a node family
fn get_icon(node: &Node) -> &'static str {
    match node {
        Node::Function(_) => "ƒ",
        Node::Literal(_) => "•",
        Node::Variable(_) => "$",
    }
}

/// Render a tree in treeviz format.
pub fn to_treeviz_str(node: &Node) -> String {
    let mut out = String::new();
    render(node, 0, &mut out);
    out
}

fn render(node: &Node, level: usize, out: &mut String) {
    for _ in 0..level {
        out.push_str("  ");
    }
    out.push_str(get_icon(node));
    out.push(' ');
    out.push_str(&node.label());
    out.push('\n');

    for child in node.children() {
        render(child, level + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gptree::parser::ProgramParser;

    #[test]
    fn renders_one_line_per_node_with_indentation() {
        let parser = ProgramParser::new();
        let tree = parser.parse("AND(OR(true,false),NOT(true))").unwrap();

        let expected = "\
ƒ AND
  ƒ OR
    • true
    • false
  ƒ NOT
    • true
";
        assert_eq!(to_treeviz_str(&tree), expected);
    }

    #[test]
    fn variables_use_their_own_icon() {
        let mut parser = ProgramParser::new();
        parser.add_available_variable(crate::gptree::node::Variable::boolean("d0", true));
        let tree = parser.parse("NOT(d0)").unwrap();

        assert_eq!(to_treeviz_str(&tree), "ƒ NOT\n  $ d0\n");
    }
}
