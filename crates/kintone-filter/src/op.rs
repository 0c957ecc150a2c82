//! Comparison operators for filter clauses.
//!
//! The [`Op`] enum covers every operator token the query grammar accepts.
//! Tokens are matched exactly: `IN` or `Like` are rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

/// Operator tokens accepted by the query grammar, in canonical order.
///
/// `or` and `and` are accepted as operators by the grammar itself and are
/// kept here as-is.
pub const ALLOWED_OPERATORS: [&str; 12] = [
    "=", "!=", ">", "<", ">=", "<=", "in", "not in", "like", "not like", "or", "and",
];

/// Comparison operator of a single clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `in`, value must be a list.
    In,
    /// `not in`, value must be a list.
    NotIn,
    /// `like`
    Like,
    /// `not like`
    NotLike,
    /// `or`
    Or,
    /// `and`
    And,
}

impl Op {
    /// All operators, in the same order as [`ALLOWED_OPERATORS`].
    pub const ALL: [Op; 12] = [
        Op::Eq,
        Op::Ne,
        Op::Gt,
        Op::Lt,
        Op::Gte,
        Op::Lte,
        Op::In,
        Op::NotIn,
        Op::Like,
        Op::NotLike,
        Op::Or,
        Op::And,
    ];

    /// Returns `true` for the set-membership operators, which only take lists.
    pub fn requires_list(self) -> bool {
        matches!(self, Op::In | Op::NotIn)
    }

    /// Returns the grammar token for this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Lt => "<",
            Op::Gte => ">=",
            Op::Lte => "<=",
            Op::In => "in",
            Op::NotIn => "not in",
            Op::Like => "like",
            Op::NotLike => "not like",
            Op::Or => "or",
            Op::And => "and",
        }
    }
}

impl FromStr for Op {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| FilterError::InvalidOperator(s.to_string()))
    }
}

impl TryFrom<&str> for Op {
    type Error = FilterError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Op {
    type Error = FilterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
