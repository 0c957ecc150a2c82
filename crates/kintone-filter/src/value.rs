//! Literal values and their query-string rendering.
//!
//! A [`Value`] is the right-hand side of a clause. Rendering rules:
//!
//! | Value | Rendering |
//! |-------|-----------|
//! | function token string | verbatim, e.g. `NOW()` |
//! | other string | double-quoted, `"` escaped as `\"` |
//! | integer | decimal digits |
//! | list | `(a,b,c)` with each element rendered recursively |

use std::fmt;

use crate::function::is_function_token;

/// Right-hand side of a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize), serde(untagged))]
pub enum Value {
    /// String literal or function token.
    String(String),
    /// Integer literal.
    Int(i64),
    /// Ordered list, used with `in` / `not in`.
    List(Vec<Value>),
}

impl Value {
    /// Returns the runtime type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Int(_) => "int",
            Value::List(_) => "list",
        }
    }

    /// Returns `true` if this is a `List` value.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) if is_function_token(s) => f.write_str(s),
            Value::String(s) => write!(f, "\"{}\"", escape_double_quote(s)),
            Value::Int(n) => write!(f, "{n}"),
            Value::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Escapes double quotes with a backslash: `ho"ge` becomes `ho\"ge`.
///
/// Nothing else is escaped; backslashes and newlines pass through.
pub fn escape_double_quote(s: &str) -> String {
    s.replace('"', "\\\"")
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<i8> for Value {
    fn from(n: i8) -> Self {
        Value::Int(n.into())
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Value::Int(n.into())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u8> for Value {
    fn from(n: u8) -> Self {
        Value::Int(n.into())
    }
}

impl From<u16> for Value {
    fn from(n: u16) -> Self {
        Value::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::List(items.iter().cloned().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_is_quoted() {
        assert_eq!(Value::from("Done").to_string(), r#""Done""#);
        assert_eq!(Value::from("").to_string(), r#""""#);
    }

    #[test]
    fn embedded_quote_is_escaped() {
        assert_eq!(Value::from(r#"ho"ge"#).to_string(), r#""ho\"ge""#);
    }

    #[test]
    fn only_quotes_are_escaped() {
        assert_eq!(
            Value::from("a\\b\nc").to_string(),
            "\"a\\b\nc\""
        );
    }

    #[test]
    fn function_token_is_bare() {
        assert_eq!(Value::from("NOW()").to_string(), "NOW()");
        assert_eq!(
            Value::from("FROM_TODAY(-7, DAYS)").to_string(),
            "FROM_TODAY(-7, DAYS)"
        );
        assert_eq!(Value::from("now()").to_string(), r#""now()""#);
    }

    #[test]
    fn integers() {
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(-7i64).to_string(), "-7");
        assert_eq!(Value::from(0u8).to_string(), "0");
    }

    #[test]
    fn mixed_list() {
        let list = Value::List(vec!["a".into(), "b".into(), 3.into()]);
        assert_eq!(list.to_string(), r#"("a","b",3)"#);
    }

    #[test]
    fn nested_and_empty_lists() {
        assert_eq!(Value::List(vec![]).to_string(), "()");
        let nested = Value::List(vec![1.into(), Value::from(vec!["x", "TODAY()"])]);
        assert_eq!(nested.to_string(), r#"(1,("x",TODAY()))"#);
    }

    #[test]
    fn collection_conversions() {
        assert_eq!(Value::from(vec![1, 2]), Value::List(vec![Value::Int(1), Value::Int(2)]));
        assert_eq!(Value::from(["a"]), Value::List(vec![Value::from("a")]));
        let slice: &[&str] = &["x", "y"];
        assert_eq!(Value::from(slice).to_string(), r#"("x","y")"#);
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::from("a").type_name(), "string");
        assert_eq!(Value::from(1).type_name(), "int");
        assert_eq!(Value::from(vec![1]).type_name(), "list");
        assert!(Value::from(vec![1]).is_list());
        assert!(!Value::from(1).is_list());
    }
}
