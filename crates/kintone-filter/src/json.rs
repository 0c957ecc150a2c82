//! Conversions from dynamic JSON input.
//!
//! Useful when conditions arrive from a config file or a request body
//! rather than from Rust code. Only shapes the grammar can express are
//! accepted; everything else is rejected with the JSON type in the error.

use serde_json::Value as Json;

use crate::error::FilterError;
use crate::expr::Condition;
use crate::field::validate_field;
use crate::op::Op;
use crate::value::Value;

const EXPECTED_VALUE: &str = "string, int or list";

fn json_type_name(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(n) if n.is_f64() => "float",
        Json::Number(_) => "integer",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

impl TryFrom<Json> for Value {
    type Error = FilterError;

    fn try_from(json: Json) -> Result<Self, Self::Error> {
        match json {
            Json::String(s) => Ok(Value::String(s)),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Ok(Value::Int(i)),
                None => Err(FilterError::value_type(
                    EXPECTED_VALUE,
                    if n.is_f64() { "float" } else { "integer" },
                )),
            },
            Json::Array(items) => items
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            other => Err(FilterError::value_type(EXPECTED_VALUE, json_type_name(&other))),
        }
    }
}

/// Accepts a `[field, operator, value]` array.
///
/// Field and operator are checked before the value is converted, so errors
/// come out in the same order as for [`Expr::and`](crate::Expr::and).
impl TryFrom<Json> for Condition {
    type Error = FilterError;

    fn try_from(json: Json) -> Result<Self, Self::Error> {
        let parts = match json {
            Json::Array(parts) => parts,
            other => return Err(FilterError::argument(json_type_name(&other))),
        };
        let [field, op, value]: [Json; 3] = parts
            .try_into()
            .map_err(|parts: Vec<Json>| FilterError::argument(format!("array of {}", parts.len())))?;

        let field = match field {
            Json::String(s) => s,
            other => return Err(FilterError::argument(json_type_name(&other))),
        };
        validate_field(&field)?;
        let op = match op {
            Json::String(s) => s,
            other => return Err(FilterError::InvalidOperator(other.to_string())),
        };
        op.parse::<Op>()?;
        Ok(Condition::compare(field, op, Value::try_from(value)?))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::expr::Expr;

    #[test]
    fn scalar_values() {
        assert_eq!(Value::try_from(json!("a")), Ok(Value::from("a")));
        assert_eq!(Value::try_from(json!(-3)), Ok(Value::Int(-3)));
        assert_eq!(
            Value::try_from(json!(["a", 1, ["b"]])),
            Ok(Value::List(vec![
                "a".into(),
                1.into(),
                Value::List(vec!["b".into()])
            ]))
        );
    }

    #[test]
    fn unsupported_values() {
        for (json, name) in [
            (json!(1.5), "float"),
            (json!(true), "bool"),
            (json!(null), "null"),
            (json!({"a": 1}), "object"),
            (json!(u64::MAX), "integer"),
        ] {
            assert_eq!(
                Value::try_from(json),
                Err(FilterError::value_type("string, int or list", name))
            );
        }
        assert!(Value::try_from(json!([1, 2.5])).is_err());
    }

    #[test]
    fn condition_from_array() {
        let cond = Condition::try_from(json!(["Status", "in", ["A", "B"]])).unwrap();
        let expr = Expr::new().where_(cond).unwrap();
        assert_eq!(expr.to_clause_string(), r#"Status in ("A","B")"#);
    }

    #[test]
    fn condition_target_must_be_field_code() {
        assert_eq!(
            Condition::try_from(json!([5, "=", 1])).unwrap_err(),
            FilterError::argument("integer")
        );
        assert_eq!(
            Condition::try_from(json!({"field": "A"})).unwrap_err(),
            FilterError::argument("object")
        );
        assert_eq!(
            Condition::try_from(json!(["A", "="])).unwrap_err(),
            FilterError::argument("array of 2")
        );
    }

    #[test]
    fn condition_operator_must_be_text() {
        assert_eq!(
            Condition::try_from(json!(["A", 1, 1])).unwrap_err(),
            FilterError::InvalidOperator("1".to_string())
        );
    }

    #[test]
    fn condition_checks_field_and_operator_before_value() {
        assert_eq!(
            Condition::try_from(json!(["bad field", "=", 1.5])).unwrap_err(),
            FilterError::InvalidField {
                field: "bad field".to_string(),
                found: ' ',
            }
        );
        assert_eq!(
            Condition::try_from(json!(["A", "<>", true])).unwrap_err(),
            FilterError::InvalidOperator("<>".to_string())
        );
        assert_eq!(
            Condition::try_from(json!(["A", "=", true])).unwrap_err(),
            FilterError::value_type("string, int or list", "bool")
        );
    }

    #[test]
    fn serialize_value() {
        let value = Value::from(vec![Value::from("a"), Value::from(2)]);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!(["a", 2]));
    }
}
