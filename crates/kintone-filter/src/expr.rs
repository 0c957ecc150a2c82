//! Expression builder.
//!
//! [`Expr`] is the fluent surface for composing a filter clause. Leaf
//! conditions are validated and formatted when they are added; nested
//! expressions are spliced in whole.
//!
//! # Example
//!
//! ```
//! use kintone_filter::Expr;
//!
//! # fn main() -> kintone_filter::Result<()> {
//! let urgent = Expr::new()
//!     .and("Priority", ">=", 3)?
//!     .or("Assignee", "in", ["LOGINUSER()"])?;
//!
//! let expr = Expr::new()
//!     .and("Status", "=", "Open")?
//!     .and_expr(urgent);
//!
//! assert_eq!(
//!     expr.to_clause_string(),
//!     r#"Status = "Open" and (Priority >= 3 or Assignee in (LOGINUSER()))"#
//! );
//! # Ok(())
//! # }
//! ```

use std::fmt;

use tracing::debug;

use crate::buffer::{ClauseBuffer, Conjunction, Grouping};
use crate::error::{FilterError, Result};
use crate::field::validate_field;
use crate::op::Op;
use crate::value::Value;

/// Validates and formats a single `field operator value` clause.
///
/// Checks run in order: field code, operator, then list shape for
/// `in` / `not in`.
pub fn where_clause<O>(field: &str, op: O, value: impl Into<Value>) -> Result<String>
where
    O: TryInto<Op>,
    FilterError: From<O::Error>,
{
    let value = value.into();
    validate_field(field).inspect_err(|err| debug!(%err, "rejected field"))?;
    let op: Op = op
        .try_into()
        .map_err(FilterError::from)
        .inspect_err(|err| debug!(%err, "rejected operator"))?;

    if op.requires_list() && !value.is_list() {
        let err = FilterError::value_type(format!("list for '{op}'"), value.type_name());
        debug!(%err, "rejected value");
        return Err(err);
    }

    Ok(format!("{field} {op} {value}"))
}

/// A condition accepted by [`Expr::where_`], [`Expr::and_where`] and
/// [`Expr::or_where`].
///
/// Built from a `(field, operator, value)` tuple or from another [`Expr`].
#[derive(Debug, Clone)]
pub enum Condition {
    /// A single comparison. The operator is kept as text and checked when
    /// the condition is added.
    Compare {
        field: String,
        op: String,
        value: Value,
    },
    /// A sub-expression to splice in.
    Nested(Expr),
}

impl Condition {
    /// Creates a comparison condition.
    pub fn compare(field: impl Into<String>, op: impl Into<String>, value: impl Into<Value>) -> Self {
        Condition::Compare {
            field: field.into(),
            op: op.into(),
            value: value.into(),
        }
    }
}

impl From<Expr> for Condition {
    fn from(expr: Expr) -> Self {
        Condition::Nested(expr)
    }
}

impl<F, O, V> From<(F, O, V)> for Condition
where
    F: Into<String>,
    O: Into<String>,
    V: Into<Value>,
{
    fn from((field, op, value): (F, O, V)) -> Self {
        Condition::compare(field, op, value)
    }
}

/// Builder for a filter clause.
///
/// Each builder owns one [`ClauseBuffer`]. Nesting another builder moves
/// its buffer into this one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expr {
    buffer: ClauseBuffer,
    grouping: Grouping,
}

impl Expr {
    /// Creates an empty expression.
    pub fn new() -> Self {
        Expr::default()
    }

    /// Sets how nested expressions are rendered by [`to_clause_string`].
    ///
    /// Only the outermost builder's setting is used.
    ///
    /// [`to_clause_string`]: Self::to_clause_string
    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }

    // ========================================================================
    // Explicit entry points
    // ========================================================================

    /// Adds a comparison joined with `and`.
    pub fn and<O>(self, field: &str, op: O, value: impl Into<Value>) -> Result<Self>
    where
        O: TryInto<Op>,
        FilterError: From<O::Error>,
    {
        self.add_condition(field, op, value, Conjunction::And)
    }

    /// Adds a comparison joined with `or`.
    pub fn or<O>(self, field: &str, op: O, value: impl Into<Value>) -> Result<Self>
    where
        O: TryInto<Op>,
        FilterError: From<O::Error>,
    {
        self.add_condition(field, op, value, Conjunction::Or)
    }

    /// Splices `expr` in, joined with `and`.
    pub fn and_expr(self, expr: Expr) -> Self {
        self.add_sub_expression(expr, Conjunction::And)
    }

    /// Splices `expr` in, joined with `or`.
    pub fn or_expr(self, expr: Expr) -> Self {
        self.add_sub_expression(expr, Conjunction::Or)
    }

    /// Validates and appends one comparison.
    pub fn add_condition<O>(
        mut self,
        field: &str,
        op: O,
        value: impl Into<Value>,
        conjunction: Conjunction,
    ) -> Result<Self>
    where
        O: TryInto<Op>,
        FilterError: From<O::Error>,
    {
        let clause = where_clause(field, op, value)?;
        self.buffer.append(clause, Some(conjunction));
        Ok(self)
    }

    /// Splices the clauses of `expr` onto this expression.
    ///
    /// An empty `expr` contributes nothing and leaves this expression
    /// untouched.
    pub fn add_sub_expression(mut self, expr: Expr, conjunction: Conjunction) -> Self {
        if expr.grouping != Grouping::default() {
            debug!(grouping = ?expr.grouping, "nested expression grouping ignored; outer grouping applies");
        }
        let mut other = expr.buffer;
        if other.is_empty() {
            debug!(%conjunction, "skipping empty sub-expression");
            return self;
        }
        debug!(%conjunction, count = other.len(), "merging sub-expression");
        other.set_pending_conjunction(conjunction);
        self.buffer.append_buffer(other);
        self
    }

    // ========================================================================
    // Dispatching entry points
    // ========================================================================

    /// Same as [`and_where`](Self::and_where).
    pub fn where_(self, condition: impl Into<Condition>) -> Result<Self> {
        self.and_where(condition)
    }

    /// Adds a comparison or sub-expression joined with `and`.
    pub fn and_where(self, condition: impl Into<Condition>) -> Result<Self> {
        self.dispatch(condition.into(), Conjunction::And)
    }

    /// Adds a comparison or sub-expression joined with `or`.
    pub fn or_where(self, condition: impl Into<Condition>) -> Result<Self> {
        self.dispatch(condition.into(), Conjunction::Or)
    }

    fn dispatch(self, condition: Condition, conjunction: Conjunction) -> Result<Self> {
        match condition {
            Condition::Compare { field, op, value } => {
                self.add_condition(&field, op.as_str(), value, conjunction)
            }
            Condition::Nested(expr) => Ok(self.add_sub_expression(expr, conjunction)),
        }
    }

    // ========================================================================
    // AND shorthand methods
    // ========================================================================

    /// Adds an `and` equality clause.
    pub fn and_eq(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.and(field, Op::Eq, value)
    }

    /// Adds an `and` not-equal clause.
    pub fn and_ne(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.and(field, Op::Ne, value)
    }

    /// Adds an `and` greater-than clause.
    pub fn and_gt(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.and(field, Op::Gt, value)
    }

    /// Adds an `and` greater-than-or-equal clause.
    pub fn and_gte(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.and(field, Op::Gte, value)
    }

    /// Adds an `and` less-than clause.
    pub fn and_lt(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.and(field, Op::Lt, value)
    }

    /// Adds an `and` less-than-or-equal clause.
    pub fn and_lte(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.and(field, Op::Lte, value)
    }

    /// Adds an `and` set-membership clause.
    pub fn and_in<I>(self, field: &str, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.and(field, Op::In, collect_list(values))
    }

    /// Adds an `and` negated set-membership clause.
    pub fn and_not_in<I>(self, field: &str, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.and(field, Op::NotIn, collect_list(values))
    }

    /// Adds an `and` partial-match clause.
    pub fn and_like(self, field: &str, value: &str) -> Result<Self> {
        self.and(field, Op::Like, value)
    }

    /// Adds an `and` negated partial-match clause.
    pub fn and_not_like(self, field: &str, value: &str) -> Result<Self> {
        self.and(field, Op::NotLike, value)
    }

    // ========================================================================
    // OR shorthand methods
    // ========================================================================

    /// Adds an `or` equality clause.
    pub fn or_eq(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.or(field, Op::Eq, value)
    }

    /// Adds an `or` not-equal clause.
    pub fn or_ne(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.or(field, Op::Ne, value)
    }

    /// Adds an `or` greater-than clause.
    pub fn or_gt(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.or(field, Op::Gt, value)
    }

    /// Adds an `or` greater-than-or-equal clause.
    pub fn or_gte(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.or(field, Op::Gte, value)
    }

    /// Adds an `or` less-than clause.
    pub fn or_lt(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.or(field, Op::Lt, value)
    }

    /// Adds an `or` less-than-or-equal clause.
    pub fn or_lte(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.or(field, Op::Lte, value)
    }

    /// Adds an `or` set-membership clause.
    pub fn or_in<I>(self, field: &str, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.or(field, Op::In, collect_list(values))
    }

    /// Adds an `or` negated set-membership clause.
    pub fn or_not_in<I>(self, field: &str, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.or(field, Op::NotIn, collect_list(values))
    }

    /// Adds an `or` partial-match clause.
    pub fn or_like(self, field: &str, value: &str) -> Result<Self> {
        self.or(field, Op::Like, value)
    }

    /// Adds an `or` negated partial-match clause.
    pub fn or_not_like(self, field: &str, value: &str) -> Result<Self> {
        self.or(field, Op::NotLike, value)
    }

    // ========================================================================
    // Output and introspection
    // ========================================================================

    /// Renders the accumulated clauses.
    ///
    /// This is the string handed to whatever assembles the full query.
    pub fn to_clause_string(&self) -> String {
        self.buffer.serialize_with(self.grouping)
    }

    /// Returns `true` if no condition has been added.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of clause fragments held.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the grouping mode.
    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// Returns the underlying buffer.
    pub fn buffer(&self) -> &ClauseBuffer {
        &self.buffer
    }

    /// Consumes the expression, returning its buffer.
    pub fn into_buffer(self) -> ClauseBuffer {
        self.buffer
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_clause_string())
    }
}

fn collect_list<I>(values: I) -> Value
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Value::List(values.into_iter().map(Into::into).collect())
}
