//! Statement preprocessing: interpolation, `$name` sigils, quote stripping.
//!
//! Runs once per statement after classification and before dispatch. After
//! this pass a `StringLiteral` token's text is its bare content.

use crate::classify::classify;
use crate::interpolate::interpolate;
use crate::interpreter::{EvalError, VariableStore};
use crate::token::{Token, TokenKind};

/// Output of [`preprocess`].
#[derive(Debug)]
pub struct Preprocessed {
    pub tokens: Vec<Token>,
    /// Non-fatal problems (unresolved references). Reported, not raised.
    pub diagnostics: Vec<EvalError>,
}

/// Rewrite classified tokens against the current store.
pub fn preprocess(tokens: Vec<Token>, store: &VariableStore) -> Preprocessed {
    let mut diagnostics = Vec::new();
    let tokens = tokens
        .into_iter()
        .map(|token| {
            if token.is(TokenKind::StringLiteral) {
                let interpolated = interpolate(&token.text, store);
                diagnostics.extend(interpolated.unresolved.into_iter().map(EvalError::Unresolved));
                return Token::new(strip_quotes(&interpolated.text), TokenKind::StringLiteral);
            }
            match sigil_name(&token.text) {
                Some(name) => match store.get(name) {
                    Ok(value) => {
                        let kind = classify(&value.literal_form(), store);
                        tracing::trace!(name, %kind, "sigil resolved");
                        Token::new(value.to_string(), kind)
                    }
                    Err(_) => {
                        diagnostics.push(EvalError::Unresolved(name.to_string()));
                        Token::new(token.text, TokenKind::Unknown)
                    }
                },
                None => token,
            }
        })
        .collect();

    Preprocessed {
        tokens,
        diagnostics,
    }
}

/// `$name` → `name`. A bare `$` is not a sigil.
fn sigil_name(text: &str) -> Option<&str> {
    text.strip_prefix('$').filter(|name| !name.is_empty())
}

/// Drop the leading quote and, if present, the trailing one.
fn strip_quotes(text: &str) -> &str {
    let inner = text.strip_prefix('"').unwrap_or(text);
    inner.strip_suffix('"').unwrap_or(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_all;
    use crate::lexer::tokenize;
    use crate::value::Value;

    fn store() -> VariableStore {
        let mut store = VariableStore::new();
        store.define("name", Value::String("Ada".into())).unwrap();
        store.define("n", Value::Integer(6)).unwrap();
        store.define("d", Value::Decimal(3.0)).unwrap();
        store.define("on", Value::Boolean(true)).unwrap();
        store
    }

    fn run(line: &str) -> Preprocessed {
        let store = store();
        preprocess(classify_all(tokenize(line), &store), &store)
    }

    #[test]
    fn string_literal_is_interpolated_and_unquoted() {
        let out = run(r#"log "Hi ${name}""#);
        assert_eq!(out.tokens[1], Token::new("Hi Ada", TokenKind::StringLiteral));
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn unresolved_interpolation_is_diagnosed() {
        let out = run(r#"log "Hi ${missing}""#);
        assert_eq!(out.tokens[1].text, "Hi ${missing}");
        assert!(matches!(&out.diagnostics[..], [EvalError::Unresolved(n)] if n == "missing"));
    }

    #[test]
    fn sigil_resolves_and_reclassifies() {
        let out = run("log $n $d $name $on");
        assert_eq!(out.tokens[1], Token::new("6", TokenKind::IntLiteral));
        assert_eq!(out.tokens[2], Token::new("3.0", TokenKind::DecLiteral));
        assert_eq!(out.tokens[3], Token::new("Ada", TokenKind::StringLiteral));
        assert_eq!(out.tokens[4], Token::new("true", TokenKind::BoolLiteral));
    }

    #[test]
    fn unknown_sigil_stays_put() {
        let out = run("log $ghost");
        assert_eq!(out.tokens[1], Token::new("$ghost", TokenKind::Unknown));
        assert!(matches!(&out.diagnostics[..], [EvalError::Unresolved(n)] if n == "ghost"));
    }

    #[test]
    fn bare_dollar_is_untouched() {
        let out = run("log $");
        assert_eq!(out.tokens[1], Token::new("$", TokenKind::Unknown));
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn unterminated_string_loses_only_leading_quote() {
        let out = run(r#"log "open ended"#);
        assert_eq!(out.tokens[1].text, "open ended");
    }

    #[test]
    fn empty_string_literal() {
        let out = run(r#"log """#);
        assert_eq!(out.tokens[1], Token::new("", TokenKind::StringLiteral));
    }
}
