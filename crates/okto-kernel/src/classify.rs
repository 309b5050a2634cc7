//! Token classification.
//!
//! Rules are checked in a fixed order and the first match wins, so a
//! variable named like a builtin still classifies as `Function`.
//!
//! Numeric literals are recognised by grammar alone: digits without a
//! point or exponent are integers, anything with a point or exponent is a
//! decimal. `3.0` is therefore always a decimal.

use logos::Logos;

use crate::builtins::Verb;
use crate::interpreter::VariableStore;
use crate::token::{COMPARATORS, INCREMENTORS, MODIFIERS, OPERATORS, Token, TokenKind};

/// Numeric literal grammar.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum NumberLiteral {
    /// `42`, `-7`, `+3`.
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),
    /// `2.5`, `5.`, `.5`, `1e3`, `-2.5E-3`.
    #[regex(r"[+-]?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_decimal)]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", parse_decimal)]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+", parse_decimal)]
    Dec(f64),
}

fn parse_decimal(lex: &logos::Lexer<NumberLiteral>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Match `text` as a single numeric literal spanning the whole string.
///
/// Integers that do not fit an `i64` do not match.
pub fn number_literal(text: &str) -> Option<NumberLiteral> {
    let mut lexer = NumberLiteral::lexer(text);
    let literal = lexer.next()?.ok()?;
    (lexer.span() == (0..text.len())).then_some(literal)
}

/// Classify a raw token against the current store.
pub fn classify(text: &str, store: &VariableStore) -> TokenKind {
    if Verb::from_name(text).is_some() {
        return TokenKind::Function;
    }
    if INCREMENTORS.contains(&text) {
        return TokenKind::Incrementor;
    }
    if MODIFIERS.contains(&text) {
        return TokenKind::Modifier;
    }
    if OPERATORS.contains(&text) {
        return TokenKind::Operator;
    }
    if COMPARATORS.contains(&text) {
        return TokenKind::Comparator;
    }
    if store.contains(text) {
        return TokenKind::Variable;
    }
    if text == "=" {
        return TokenKind::Equals;
    }
    if text.starts_with('"') {
        return TokenKind::StringLiteral;
    }
    match number_literal(text) {
        Some(NumberLiteral::Int(_)) => return TokenKind::IntLiteral,
        Some(NumberLiteral::Dec(_)) => return TokenKind::DecLiteral,
        None => {}
    }
    if text == "true" || text == "false" {
        return TokenKind::BoolLiteral;
    }
    TokenKind::Unknown
}

/// Classify every raw token of a line.
pub fn classify_all(raw: Vec<String>, store: &VariableStore) -> Vec<Token> {
    raw.into_iter()
        .map(|text| {
            let kind = classify(&text, store);
            Token { text, kind }
        })
        .collect()
}
