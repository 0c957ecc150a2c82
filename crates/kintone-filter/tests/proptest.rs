//! Property-based tests for kintone-filter using proptest.

use kintone_filter::{Expr, FilterError, Value, ALLOWED_OPERATORS, DISALLOWED_FIELD_CHARS};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn field_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,15}"
}

fn reserved_char_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(DISALLOWED_FIELD_CHARS.to_vec())
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z \"\\\\]{0,12}".prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
    ]
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A reserved character anywhere in the field code is rejected.
    #[test]
    fn reserved_char_rejects_field(
        prefix in field_strategy(),
        c in reserved_char_strategy(),
        suffix in "[a-z]{0,5}",
    ) {
        let field = format!("{prefix}{c}{suffix}");
        let err = Expr::new().and(&field, "=", 1).unwrap_err();
        let is_field_error = matches!(err, FilterError::InvalidField { .. });
        prop_assert!(is_field_error);
    }

    /// Any operator text outside the allowed set is rejected.
    #[test]
    fn unknown_operator_rejected(op in "\\PC{0,10}") {
        prop_assume!(!ALLOWED_OPERATORS.contains(&op.as_str()));
        let err = Expr::new().and("Field", op.as_str(), 1).unwrap_err();
        prop_assert_eq!(err, FilterError::InvalidOperator(op));
    }

    /// Quoted strings contain no unescaped inner quote.
    #[test]
    fn quoted_string_escapes_quotes(s in "[a-z\"]{0,20}") {
        let rendered = Value::from(s.as_str()).to_string();
        prop_assert!(rendered.starts_with('"') && rendered.ends_with('"'));
        let inner = &rendered[1..rendered.len() - 1];
        prop_assert_eq!(inner.replace("\\\"", ""), s.replace('"', ""));
    }

    /// Integers render as plain decimal.
    #[test]
    fn integer_renders_decimal(n in any::<i64>()) {
        prop_assert_eq!(Value::from(n).to_string(), n.to_string());
    }

    /// Serializing the same builder twice yields the same string.
    #[test]
    fn serialization_is_idempotent(
        values in prop::collection::vec((field_strategy(), scalar_strategy(), any::<bool>()), 0..10),
    ) {
        let mut expr = Expr::new();
        for (field, value, use_or) in values {
            expr = if use_or {
                expr.or(&field, "=", value).unwrap()
            } else {
                expr.and(&field, "=", value).unwrap()
            };
        }
        prop_assert_eq!(expr.to_clause_string(), expr.to_clause_string());
    }

    /// Merging an empty expression never changes the target.
    #[test]
    fn empty_merge_is_noop(
        fields in prop::collection::vec(field_strategy(), 0..8),
        use_or in any::<bool>(),
    ) {
        let mut expr = Expr::new();
        for field in &fields {
            expr = expr.and_eq(field, 1).unwrap();
        }
        let before = expr.clone();
        let after = if use_or { expr.or_expr(Expr::new()) } else { expr.and_expr(Expr::new()) };
        prop_assert_eq!(after, before);
    }

    /// Merging adds exactly the sub-expression's fragment count.
    #[test]
    fn merge_adds_fragment_count(
        left in prop::collection::vec(field_strategy(), 0..6),
        right in prop::collection::vec(field_strategy(), 0..6),
    ) {
        let build = |fields: &[String]| {
            fields.iter().try_fold(Expr::new(), |expr, f| expr.and_eq(f, 1)).unwrap()
        };
        let merged = build(&left).or_expr(build(&right));
        prop_assert_eq!(merged.len(), left.len() + right.len());
    }
}
