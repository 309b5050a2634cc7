//! Arithmetic on numeric variables.
//!
//! Statements that start with an existing variable name mutate it. Three
//! shapes are accepted:
//!
//! ```text
//! n ++            n --
//! n += 2          n -= m         (also *= and /=)
//! n = a + b       n = n / 2      (operands: literal or variable)
//! ```
//!
//! All four operators go through one table. Integer targets only accept
//! integer operands; decimal targets promote integers. Division is checked:
//! a zero on either side is an error and the variable is left untouched.

use crate::classify::{NumberLiteral, number_literal};
use crate::token::{Token, TokenKind};
use crate::value::{Value, ValueKind};

use super::error::EvalError;
use super::scope::VariableStore;

/// A resolved numeric operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Dec(f64),
}

impl Number {
    fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Dec(d) => d == 0.0,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Dec(d) => d,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(i) => Some(Number::Int(*i)),
            Value::Decimal(d) => Some(Number::Dec(*d)),
            Value::String(_) | Value::Boolean(_) => None,
        }
    }
}

/// One row of the operator table.
#[derive(Debug, Clone, Copy)]
pub struct BinaryOp {
    pub symbol: &'static str,
    int: fn(i64, i64) -> Option<i64>,
    dec: fn(f64, f64) -> f64,
    /// Reject a zero operand.
    checked: bool,
}

static OPERATORS: [BinaryOp; 4] = [
    BinaryOp {
        symbol: "+",
        int: i64::checked_add,
        dec: |a, b| a + b,
        checked: false,
    },
    BinaryOp {
        symbol: "-",
        int: i64::checked_sub,
        dec: |a, b| a - b,
        checked: false,
    },
    BinaryOp {
        symbol: "*",
        int: i64::checked_mul,
        dec: |a, b| a * b,
        checked: false,
    },
    BinaryOp {
        symbol: "/",
        int: i64::checked_div,
        dec: |a, b| a / b,
        checked: true,
    },
];

impl BinaryOp {
    /// Look up an operator by symbol (`+`, `-`, `*`, `/`).
    pub fn from_symbol(symbol: &str) -> Option<&'static BinaryOp> {
        OPERATORS.iter().find(|op| op.symbol == symbol)
    }

    /// Operator behind a compound modifier such as `+=`.
    pub fn from_modifier(modifier: &str) -> Option<&'static BinaryOp> {
        modifier.strip_suffix('=').and_then(Self::from_symbol)
    }

    /// Apply the operator for a variable of kind `target`.
    pub fn apply(&self, target: ValueKind, lhs: Number, rhs: Number) -> Result<Value, EvalError> {
        match target {
            ValueKind::Integer => {
                let (Number::Int(a), Number::Int(b)) = (lhs, rhs) else {
                    return Err(EvalError::OperandMismatch {
                        target,
                        found: ValueKind::Decimal,
                    });
                };
                self.check_zero(lhs, rhs)?;
                (self.int)(a, b).map(Value::Integer).ok_or(EvalError::Overflow)
            }
            ValueKind::Decimal => {
                self.check_zero(lhs, rhs)?;
                let result = (self.dec)(lhs.as_f64(), rhs.as_f64());
                if !result.is_finite() {
                    return Err(EvalError::Overflow);
                }
                Ok(Value::Decimal(result))
            }
            ValueKind::String | ValueKind::Boolean => Err(EvalError::InvalidOperation),
        }
    }

    fn check_zero(&self, lhs: Number, rhs: Number) -> Result<(), EvalError> {
        if self.checked && (lhs.is_zero() || rhs.is_zero()) {
            return Err(EvalError::DivisionByZero);
        }
        Ok(())
    }
}

/// Resolve an operand token to a number.
///
/// Variables are read from the store; literals are parsed by the same
/// grammar the classifier uses.
pub fn resolve_operand(token: &Token, store: &VariableStore) -> Result<Number, EvalError> {
    match token.kind {
        TokenKind::Variable => {
            let value = store.get(&token.text)?;
            Number::from_value(value).ok_or_else(|| EvalError::NotANumber(token.text.clone()))
        }
        TokenKind::IntLiteral | TokenKind::DecLiteral => match number_literal(&token.text) {
            Some(NumberLiteral::Int(i)) => Ok(Number::Int(i)),
            Some(NumberLiteral::Dec(d)) => Ok(Number::Dec(d)),
            None => Err(EvalError::NotANumber(token.text.clone())),
        },
        _ => Err(EvalError::NotANumber(token.text.clone())),
    }
}

/// Compute the new value of the variable named by `tokens[0]`.
///
/// The store is only read; the caller writes the result back.
pub fn evaluate(tokens: &[Token], store: &VariableStore) -> Result<Value, EvalError> {
    let Some(target) = tokens.first() else {
        return Err(EvalError::InvalidOperation);
    };
    let current = store.get(&target.text)?;
    if tokens.len() < 2 {
        return Err(EvalError::ExpectedOperator);
    }
    let Some(current_number) = Number::from_value(current) else {
        return Err(EvalError::InvalidOperation);
    };
    let kind = current.kind();

    match tokens {
        [_, step] if step.is(TokenKind::Incrementor) => {
            let symbol = if step.text == "++" { "+" } else { "-" };
            let op = BinaryOp::from_symbol(symbol).ok_or(EvalError::InvalidOperation)?;
            tracing::trace!(var = %target.text, op = symbol, "step");
            op.apply(kind, current_number, Number::Int(1))
        }
        [_, modifier, operand] if modifier.is(TokenKind::Modifier) => {
            let op = BinaryOp::from_modifier(&modifier.text).ok_or(EvalError::InvalidOperation)?;
            let rhs = resolve_operand(operand, store)?;
            tracing::trace!(var = %target.text, op = op.symbol, "modify");
            op.apply(kind, current_number, rhs)
        }
        [_, equals, lhs, op, rhs] if equals.is(TokenKind::Equals) && op.is(TokenKind::Operator) => {
            let op = BinaryOp::from_symbol(&op.text).ok_or(EvalError::InvalidOperation)?;
            let lhs = resolve_operand(lhs, store)?;
            let rhs = resolve_operand(rhs, store)?;
            tracing::trace!(var = %target.text, op = op.symbol, "assign");
            op.apply(kind, lhs, rhs)
        }
        _ => Err(EvalError::InvalidOperation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn store() -> VariableStore {
        let mut store = VariableStore::new();
        store.define("n", Value::Integer(5)).unwrap();
        store.define("z", Value::Integer(0)).unwrap();
        store.define("d", Value::Decimal(2.5)).unwrap();
        store.define("s", Value::String("text".into())).unwrap();
        store.define("b", Value::Boolean(true)).unwrap();
        store
    }

    fn tokens(line: &str, store: &VariableStore) -> Vec<Token> {
        crate::classify::classify_all(crate::lexer::tokenize(line), store)
    }

    fn eval(line: &str) -> Result<Value, EvalError> {
        let store = store();
        evaluate(&tokens(line, &store), &store)
    }

    #[rstest]
    #[case::increment("n ++", Value::Integer(6))]
    #[case::decrement("n --", Value::Integer(4))]
    #[case::dec_increment("d ++", Value::Decimal(3.5))]
    #[case::add_literals("n = 2 + 3", Value::Integer(5))]
    #[case::self_reference("n = n * 3", Value::Integer(15))]
    #[case::int_division_truncates("n = n / 2", Value::Integer(2))]
    #[case::dec_promotes_int("d = d + 1", Value::Decimal(3.5))]
    #[case::dec_from_ints("d = 7 / 2", Value::Decimal(3.5))]
    #[case::dec_mixed_vars("d = n - d", Value::Decimal(2.5))]
    #[case::modifier_add("n += 10", Value::Integer(15))]
    #[case::modifier_var("d *= n", Value::Decimal(12.5))]
    #[case::negative_literal("n = -3 + 1", Value::Integer(-2))]
    fn evaluates(#[case] line: &str, #[case] expected: Value) {
        assert_eq!(eval(line).unwrap(), expected);
    }

    #[rstest]
    #[case::divide_by_zero_var("n = n / z")]
    #[case::divide_by_zero_literal("d = d / 0")]
    #[case::zero_numerator("n = 0 / n")]
    #[case::modifier_zero("n /= 0")]
    fn division_by_zero(#[case] line: &str) {
        assert!(matches!(eval(line), Err(EvalError::DivisionByZero)));
    }

    #[test]
    fn integer_target_rejects_decimal_operand() {
        assert!(matches!(
            eval("n = n + 1.5"),
            Err(EvalError::OperandMismatch { target: ValueKind::Integer, .. })
        ));
        assert!(matches!(eval("n = d + 1"), Err(EvalError::OperandMismatch { .. })));
    }

    #[test]
    fn non_numeric_operand() {
        assert!(matches!(eval("n = s + 1"), Err(EvalError::NotANumber(name)) if name == "s"));
        assert!(matches!(eval("n = wat + 1"), Err(EvalError::NotANumber(_))));
    }

    #[test]
    fn lone_variable_expects_operator() {
        assert!(matches!(eval("n"), Err(EvalError::ExpectedOperator)));
    }

    #[rstest]
    #[case::string_target("s ++")]
    #[case::bool_target("b = 1 + 1")]
    #[case::wrong_shape("n = 1 +")]
    #[case::comparator("n == 5")]
    #[case::missing_equals("n 1 + 2")]
    #[case::too_long("n ++ ++")]
    fn invalid_operation(#[case] line: &str) {
        assert!(matches!(eval(line), Err(EvalError::InvalidOperation)));
    }

    #[test]
    fn integer_overflow_is_reported() {
        let mut store = VariableStore::new();
        store.define("big", Value::Integer(i64::MAX)).unwrap();
        let result = evaluate(&tokens("big ++", &store), &store);
        assert!(matches!(result, Err(EvalError::Overflow)));
    }

    #[test]
    fn decimal_overflow_is_reported() {
        let mut store = VariableStore::new();
        store.define("huge", Value::Decimal(1e308)).unwrap();
        let result = evaluate(&tokens("huge *= 10", &store), &store);
        assert!(matches!(result, Err(EvalError::Overflow)));
        let result = evaluate(&tokens("huge = huge + huge", &store), &store);
        assert!(matches!(result, Err(EvalError::Overflow)));
    }

    #[test]
    fn operator_table_lookup() {
        assert_eq!(BinaryOp::from_symbol("*").map(|op| op.symbol), Some("*"));
        assert_eq!(BinaryOp::from_modifier("-=").map(|op| op.symbol), Some("-"));
        assert!(BinaryOp::from_symbol("%").is_none());
    }
}
