//! Lexer for Oktolang statements.
//!
//! A statement is one line. Tokens are separated by whitespace, except
//! inside a double-quoted span: each `"` toggles string mode and is kept in
//! the token text. There is no escaping, so an unterminated quote swallows
//! the rest of the line into a single token.

/// Split a line into raw token strings.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_string = false;

    for ch in line.chars() {
        if ch.is_whitespace() && !in_string {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            continue;
        }
        if ch == '"' {
            in_string = !in_string;
        }
        current.push(ch);
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
