//! Classified tokens.

use std::fmt;

/// Semantic kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A builtin verb (`log`, `int`, ...).
    Function,
    /// `++` or `--`.
    Incrementor,
    /// `+=`, `-=`, `*=`, `/=`.
    Modifier,
    /// `+`, `-`, `*`, `/`.
    Operator,
    /// `==`, `>`, `>=`, `=<`, `!=`, `!<`, `!>`, `!=<`, `!>=`.
    Comparator,
    /// Name of a variable that exists in the store.
    Variable,
    /// `=`.
    Equals,
    StringLiteral,
    IntLiteral,
    DecLiteral,
    /// `true` or `false`.
    BoolLiteral,
    Unknown,
}

impl TokenKind {
    /// Label printed by the `type` builtin.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Function => "function",
            TokenKind::Incrementor => "incrementor",
            TokenKind::Modifier => "modifier",
            TokenKind::Operator => "operator",
            TokenKind::Comparator => "comparator",
            TokenKind::Variable => "variable",
            TokenKind::Equals => "equals",
            TokenKind::StringLiteral => "str",
            TokenKind::IntLiteral => "int",
            TokenKind::DecLiteral => "dec",
            TokenKind::BoolLiteral => "bool",
            TokenKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A token with its kind. Built fresh for every statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// True if this token has the given kind.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

pub const INCREMENTORS: &[&str] = &["++", "--"];
pub const MODIFIERS: &[&str] = &["+=", "-=", "*=", "/="];
pub const OPERATORS: &[&str] = &["+", "-", "*", "/"];
pub const COMPARATORS: &[&str] = &["==", ">", ">=", "=<", "!=", "!<", "!>", "!=<", "!>="];
