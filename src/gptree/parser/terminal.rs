//! Terminal resolution
//!
//! A bare token resolves through an ordered chain, first match wins: boolean
//! literal, then bound variable, then numeric literal. The order is
//! load-bearing: `true`/`false` always win over a variable of the same name,
//! and a variable always wins over a numeric reading of its identifier.

use crate::gptree::environment::VariableEnvironment;
use crate::gptree::node::{Literal, Node};
use once_cell::sync::Lazy;
use regex::Regex;

/// Floating-point literal grammar: optional surrounding whitespace and sign,
/// `NaN`, `Infinity`, decimal forms with an optional exponent, hexadecimal
/// forms with a mandatory binary exponent, and an optional trailing
/// type-suffix letter.
static FP_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^[\x00-\x20]*
        [+-]?
        (
            NaN
            | Infinity
            | ( ( [0-9]+ \.? [0-9]* | \. [0-9]+ ) ( [eE][+-]?[0-9]+ )? )
            | ( 0[xX] ( [0-9a-fA-F]+ \.? | [0-9a-fA-F]* \. [0-9a-fA-F]+ ) [pP][+-]?[0-9]+ )
        )
        [fFdD]?
        [\x00-\x20]*$
        ",
    )
    .unwrap()
});

/// Resolve a bare token to a terminal node, or `None` if no rule matches.
pub fn resolve_terminal(token: &str, variables: &VariableEnvironment) -> Option<Node> {
    boolean_literal(token)
        .map(Node::Literal)
        .or_else(|| variables.lookup(token).map(Node::Variable))
        .or_else(|| numeric_literal(token).map(Node::Literal))
}

/// Case-insensitive `true`/`false`.
fn boolean_literal(token: &str) -> Option<Literal> {
    if token.eq_ignore_ascii_case("true") {
        Some(Literal::boolean(true))
    } else if token.eq_ignore_ascii_case("false") {
        Some(Literal::boolean(false))
    } else {
        None
    }
}

/// Parse a token matching the floating-point literal grammar.
pub fn numeric_literal(token: &str) -> Option<Literal> {
    if !FP_LITERAL.is_match(token) {
        return None;
    }

    let trimmed = token.trim_matches(|c: char| (c as u32) <= 0x20);
    let stripped = trimmed
        .strip_suffix(&['f', 'F', 'd', 'D'][..])
        .unwrap_or(trimmed);

    let value = if is_hex_form(stripped) {
        parse_hex_float(stripped)?
    } else {
        stripped.parse::<f64>().ok()?
    };
    Some(Literal::number(value))
}

fn is_hex_form(token: &str) -> bool {
    let unsigned = token.strip_prefix(&['+', '-'][..]).unwrap_or(token);
    unsigned.len() >= 2 && unsigned[..2].eq_ignore_ascii_case("0x")
}

/// Convert a grammar-validated hexadecimal form (`0x1.8p3`) to its value.
/// `f64::from_str` rejects the hexadecimal grammar, so the mantissa and
/// binary exponent are folded manually.
fn parse_hex_float(token: &str) -> Option<f64> {
    let (sign, unsigned) = if let Some(rest) = token.strip_prefix('-') {
        (-1.0, rest)
    } else {
        (1.0, token.strip_prefix('+').unwrap_or(token))
    };

    // Past the "0x" marker.
    let body = &unsigned[2..];
    let (mantissa_str, exp_str) = body.split_once(&['p', 'P'][..])?;
    let exponent = exp_str.parse::<i32>().ok()?;

    let (int_part, frac_part) = match mantissa_str.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa_str, ""),
    };

    let mut mantissa = 0.0f64;
    for digit in int_part.chars() {
        mantissa = mantissa * 16.0 + f64::from(digit.to_digit(16)?);
    }
    let mut scale = 1.0 / 16.0;
    for digit in frac_part.chars() {
        mantissa += f64::from(digit.to_digit(16)?) * scale;
        scale /= 16.0;
    }

    Some(sign * mantissa * 2f64.powi(exponent))
}
