//! Command-line interface for gptree
//! This binary parses program descriptions and prints the resulting tree in
//! different formats.
//!
//! Usage:
//!   gptree parse `<expr>` [--format `<format>`] [--var `NAME=VALUE`]...  - Parse and print a tree
//!   gptree functions                                                 - List registered function names

use clap::{Arg, ArgAction, Command};
use gptree::gptree::formats::{to_json_str, to_treeviz_str};
use gptree::gptree::node::Variable;
use gptree::gptree::parser::ProgramParser;
use std::process;

fn main() {
    let matches = Command::new("gptree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing nested function-call program trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a program description and print the tree")
                .arg(
                    Arg::new("expr")
                        .help("The program description to parse")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('tree' or 'json')")
                        .default_value("tree"),
                )
                .arg(
                    Arg::new("var")
                        .long("var")
                        .action(ArgAction::Append)
                        .value_name("NAME=VALUE")
                        .help("Bind a numeric variable before parsing (repeatable)"),
                ),
        )
        .subcommand(Command::new("functions").about("List registered function names"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let expr = parse_matches.get_one::<String>("expr").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            let bindings: Vec<&String> = parse_matches
                .get_many::<String>("var")
                .map(|values| values.collect())
                .unwrap_or_default();
            handle_parse_command(expr, format, &bindings);
        }
        Some(("functions", _)) => {
            handle_functions_command();
        }
        _ => unreachable!("subcommand is required"),
    }
}

fn handle_parse_command(expr: &str, format: &str, bindings: &[&String]) {
    let mut parser = ProgramParser::new();

    for binding in bindings {
        let Some((name, value)) = binding.split_once('=') else {
            eprintln!("Error: invalid --var '{binding}', expected NAME=VALUE");
            process::exit(2);
        };
        let Ok(value) = value.parse::<f64>() else {
            eprintln!("Error: invalid value in --var '{binding}', expected a number");
            process::exit(2);
        };
        parser.add_available_variable(Variable::number(name, value));
    }

    let tree = match parser.parse(expr) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    match format {
        "tree" => print!("{}", to_treeviz_str(&tree)),
        "json" => match to_json_str(&tree) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        },
        other => {
            eprintln!("Error: unknown format '{other}' (expected 'tree' or 'json')");
            process::exit(2);
        }
    }
}

fn handle_functions_command() {
    let parser = ProgramParser::new();
    for name in parser.registry().list_functions() {
        println!("{name}");
    }
}
