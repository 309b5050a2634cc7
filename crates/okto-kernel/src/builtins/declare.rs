//! str, int, dec, bool: variable declarations.
//!
//! ```text
//! int n = 5
//! str name = in "Name: "
//! ```
//!
//! The right-hand side is either a literal of the declared kind or `in`
//! with an optional prompt, in which case the line read is used as the
//! literal.

use crate::classify::{NumberLiteral, classify, number_literal};
use crate::interpreter::{EvalError, ExecResult, StoreError};
use crate::token::{Token, TokenKind};
use crate::value::{Value, ValueKind};

use super::{ExecContext, Verb, input};

pub fn declare(
    kind: ValueKind,
    tokens: &[Token],
    ctx: &mut ExecContext<'_>,
) -> Result<ExecResult, EvalError> {
    ctx.info(format!("Declaring {kind} variable"));
    let name = tokens.get(1).ok_or(EvalError::MissingName)?;
    if !is_declarable(name) {
        return Err(EvalError::InvalidName {
            name: name.text.clone(),
            kind: name.kind,
        });
    }
    if tokens.len() < 4 {
        return Err(EvalError::MissingValue);
    }
    if tokens[2].text != "=" {
        return Err(EvalError::MissingEquals);
    }
    if ctx.store.contains(&name.text) {
        return Err(StoreError::AlreadyDefined(name.text.clone()).into());
    }

    let rhs = &tokens[3];
    let literal = if rhs.is(TokenKind::Function) && rhs.text == Verb::In.name() {
        let line = input::read_line(&tokens[4..], ctx)?;
        input_literal(kind, line, ctx)
    } else {
        rhs.clone()
    };

    let value = literal_value(kind, &name.text, &literal)?;
    ctx.info(format!("{kind} variable {} defined as {value}", name.text));
    ctx.store.define(name.text.clone(), value)?;
    Ok(ExecResult::Continue)
}

/// A name must not already classify as a literal or symbol. Builtin names
/// are allowed; existing variables reach the redefinition check.
fn is_declarable(name: &Token) -> bool {
    matches!(
        name.kind,
        TokenKind::Unknown | TokenKind::Function | TokenKind::Variable
    )
}

/// Turn a line read by `in` into a literal token.
///
/// Strings take the line verbatim; other kinds classify the trimmed line.
fn input_literal(kind: ValueKind, line: String, ctx: &ExecContext<'_>) -> Token {
    if kind == ValueKind::String {
        return Token::new(line, TokenKind::StringLiteral);
    }
    let text = line.trim();
    Token::new(text, classify(text, ctx.store))
}

/// Convert a literal token into a value of `kind`.
fn literal_value(kind: ValueKind, name: &str, literal: &Token) -> Result<Value, EvalError> {
    let mismatch = || EvalError::WrongLiteral {
        name: name.to_string(),
        expected: kind,
        found: literal.kind,
    };
    match (kind, literal.kind) {
        (ValueKind::String, TokenKind::StringLiteral) => Ok(Value::String(literal.text.clone())),
        (ValueKind::Integer, TokenKind::IntLiteral) => match number_literal(&literal.text) {
            Some(NumberLiteral::Int(i)) => Ok(Value::Integer(i)),
            _ => Err(mismatch()),
        },
        (ValueKind::Decimal, TokenKind::DecLiteral) => match number_literal(&literal.text) {
            Some(NumberLiteral::Dec(d)) => Ok(Value::Decimal(d)),
            _ => Err(mismatch()),
        },
        (ValueKind::Boolean, TokenKind::BoolLiteral) => Ok(Value::Boolean(literal.text == "true")),
        _ => Err(mismatch()),
    }
}
