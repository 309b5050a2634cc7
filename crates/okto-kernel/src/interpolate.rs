//! `${name}` interpolation inside string literals.

use crate::interpreter::VariableStore;

/// Result of interpolating one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolated {
    /// The rewritten text.
    pub text: String,
    /// Names referenced by `${name}` that were not in the store, in order.
    pub unresolved: Vec<String>,
}

/// Substitute every `${name}` in `raw` with the variable's textual value.
///
/// Unknown names are collected and their placeholder is kept verbatim. A
/// `${` with no closing `}` is copied through unchanged.
pub fn interpolate(raw: &str, store: &VariableStore) -> Interpolated {
    let mut text = String::with_capacity(raw.len());
    let mut unresolved = Vec::new();
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };

        text.push_str(&rest[..start]);
        let name = &after[..end];
        match store.get(name) {
            Ok(value) => text.push_str(&value.to_string()),
            Err(_) => {
                tracing::debug!(name, "unresolved interpolation");
                unresolved.push(name.to_string());
                text.push_str("${");
                text.push_str(name);
                text.push('}');
            }
        }
        rest = &after[end + 1..];
    }
    text.push_str(rest);

    Interpolated { text, unresolved }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn store() -> VariableStore {
        let mut store = VariableStore::new();
        store.define("name", Value::String("Ada".into())).unwrap();
        store.define("n", Value::Integer(6)).unwrap();
        store.define("d", Value::Decimal(2.5)).unwrap();
        store.define("flag", Value::Boolean(true)).unwrap();
        store
    }

    #[test]
    fn substitutes_known_variable() {
        let out = interpolate("Hi ${name}!", &store());
        assert_eq!(out.text, "Hi Ada!");
        assert!(out.unresolved.is_empty());
    }

    #[test]
    fn renders_every_kind() {
        let out = interpolate("${n} ${d} ${flag}", &store());
        assert_eq!(out.text, "6 2.5 true");
    }

    #[test]
    fn adjacent_placeholders() {
        assert_eq!(interpolate("${n}${n}", &store()).text, "66");
    }

    #[test]
    fn missing_variable_keeps_placeholder() {
        let out = interpolate("Hi ${missing} and ${name}", &store());
        assert_eq!(out.text, "Hi ${missing} and Ada");
        assert_eq!(out.unresolved, vec!["missing".to_string()]);
    }

    #[test]
    fn unclosed_placeholder_is_verbatim() {
        let out = interpolate("cost: ${name", &store());
        assert_eq!(out.text, "cost: ${name");
        assert!(out.unresolved.is_empty());
    }

    #[test]
    fn lone_dollar_is_plain_text() {
        assert_eq!(interpolate("$5 and $name", &store()).text, "$5 and $name");
    }

    #[test]
    fn empty_name_is_unresolved() {
        let out = interpolate("a${}b", &store());
        assert_eq!(out.text, "a${}b");
        assert_eq!(out.unresolved, vec![String::new()]);
    }
}
