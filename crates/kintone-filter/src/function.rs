//! Recognition of built-in function tokens.
//!
//! The query grammar has a small set of functions (`NOW()`, `LOGINUSER()`,
//! `FROM_TODAY(-3, DAYS)` ...) that are written bare instead of as quoted
//! string literals. A string value matching any pattern of the catalog is
//! emitted verbatim.
//!
//! Patterns are unanchored and case-sensitive: a value containing a function
//! call anywhere passes through unquoted, and `now()` is an ordinary string.

use once_cell::sync::Lazy;
use regex::RegexSet;

/// The function catalog, one pattern per accepted form.
pub const FUNCTION_PATTERNS: &[&str] = &[
    r"LOGINUSER\(\)",
    r"PRIMARY_ORGANIZATION\(\)",
    r"NOW\(\)",
    r"TODAY\(\)",
    r"YESTERDAY\(\)",
    r"TOMORROW\(\)",
    r"FROM_TODAY\(-?[0-9]+,( )*DAYS\)",
    r"FROM_TODAY\(-?[0-9]+,( )*WEEKS\)",
    r"FROM_TODAY\(-?[0-9]+,( )*MONTHS\)",
    r"FROM_TODAY\(-?[0-9]+,( )*YEARS\)",
    r"THIS_WEEK\(\)",
    r"THIS_WEEK\(SUNDAY\)",
    r"THIS_WEEK\(MONDAY\)",
    r"THIS_WEEK\(TUESDAY\)",
    r"THIS_WEEK\(WEDNESDAY\)",
    r"THIS_WEEK\(THURSDAY\)",
    r"THIS_WEEK\(FRIDAY\)",
    r"THIS_WEEK\(SATURDAY\)",
    r"LAST_WEEK\(\)",
    r"LAST_WEEK\(SUNDAY\)",
    r"LAST_WEEK\(MONDAY\)",
    r"LAST_WEEK\(TUESDAY\)",
    r"LAST_WEEK\(WEDNESDAY\)",
    r"LAST_WEEK\(THURSDAY\)",
    r"LAST_WEEK\(FRIDAY\)",
    r"LAST_WEEK\(SATURDAY\)",
    r"NEXT_WEEK\(\)",
    r"NEXT_WEEK\(SUNDAY\)",
    r"NEXT_WEEK\(MONDAY\)",
    r"NEXT_WEEK\(TUESDAY\)",
    r"NEXT_WEEK\(WEDNESDAY\)",
    r"NEXT_WEEK\(THURSDAY\)",
    r"NEXT_WEEK\(FRIDAY\)",
    r"NEXT_WEEK\(SATURDAY\)",
    r"THIS_MONTH\(\)",
    r"THIS_MONTH\(([1-9]|([1-2][0-9])|(3[0-1]))\)",
    r"THIS_MONTH\(LAST\)",
    r"LAST_MONTH\(\)",
    r"LAST_MONTH\(([1-9]|([1-2][0-9])|(3[0-1]))\)",
    r"LAST_MONTH\(LAST\)",
    r"NEXT_MONTH\(\)",
    r"NEXT_MONTH\(([1-9]|([1-2][0-9])|(3[0-1]))\)",
    r"NEXT_MONTH\(LAST\)",
    r"THIS_YEAR\(\)",
    r"LAST_YEAR\(\)",
    r"NEXT_YEAR\(\)",
];

static FUNCTION_SET: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new(FUNCTION_PATTERNS).expect("function catalog patterns are valid regexes")
});

/// Returns `true` if `s` contains a built-in function call and must be
/// emitted without quotes.
pub fn is_function_token(s: &str) -> bool {
    FUNCTION_SET.is_match(s)
}
