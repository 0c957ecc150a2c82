//! kintone-filter - Fluent builder for kintone record filter clauses.
//!
//! Builds the condition part of a record query (`field operator value`
//! comparisons joined with `and` / `or`) without string concatenation:
//!
//! - Field codes are checked for characters reserved by the grammar
//! - Operators are checked against the fixed operator set
//! - String literals are quoted and escaped; built-in functions such as
//!   `NOW()` or `FROM_TODAY(-7, DAYS)` pass through bare
//! - `in` / `not in` require a list value
//! - Expressions nest: one builder can be spliced into another
//!
//! Ordering, limit and offset belong to whatever assembles the full query;
//! this crate only produces the clause string.
//!
//! # Quick Start
//!
//! ```rust
//! use kintone_filter::{Expr, Op};
//!
//! # fn main() -> kintone_filter::Result<()> {
//! let mine = Expr::new()
//!     .and("Assignee", "in", ["LOGINUSER()"])?
//!     .or_eq("Reviewer", "LOGINUSER()")?;
//!
//! let expr = Expr::new()
//!     .and("Status", Op::NotIn, ["Done", "Dropped"])?
//!     .and("Due", "<", "FROM_TODAY(7, DAYS)")?
//!     .and_expr(mine);
//!
//! assert_eq!(
//!     expr.to_clause_string(),
//!     r#"Status not in ("Done","Dropped") and Due < FROM_TODAY(7, DAYS) and (Assignee in (LOGINUSER()) or Reviewer = LOGINUSER())"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Grouping
//!
//! A spliced expression with more than one clause is parenthesized by
//! default. [`Grouping::Flat`] renders it inline instead, which matches the
//! flattened output older clients produce.
//!
//! # Features
//!
//! - `json` (default): `TryFrom<serde_json::Value>` for [`Value`] and
//!   [`Condition`], and `Serialize` for [`Value`].

mod buffer;
mod error;
mod expr;
mod field;
mod function;
#[cfg(feature = "json")]
mod json;
mod op;
mod value;

// Re-export public API
pub use buffer::{ClauseBuffer, Conjunction, Fragment, Grouping};
pub use error::{FilterError, Result};
pub use expr::{where_clause, Condition, Expr};
pub use field::{validate_field, DISALLOWED_FIELD_CHARS};
pub use function::{is_function_token, FUNCTION_PATTERNS};
pub use op::{Op, ALLOWED_OPERATORS};
pub use value::{escape_double_quote, Value};
