//! Snapshot tests for tree output formats

use gptree::gptree::formats::{to_json_str, to_treeviz_str};
use gptree::gptree::parser::ProgramParser;

#[test]
fn treeviz_renders_structure_as_indentation() {
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
fn display_round_trips_program_notation() {
    let parser = ProgramParser::new();
    let tree = parser.parse("IF(true,SEQ2(false,true),3.5)").unwrap();

    insta::assert_snapshot!(tree.to_string(), @"IF(true,SEQ2(false,true),3.5)");
}

#[test]
fn json_snapshot_keeps_kinds_and_labels() {
    let parser = ProgramParser::new();
    let tree = parser.parse("NOT(true)").unwrap();

    insta::assert_snapshot!(to_json_str(&tree).unwrap(), @r###"
{
  "kind": "function",
  "label": "NOT",
  "children": [
    {
      "kind": "literal",
      "label": "true"
    }
  ]
}
"###);
}
