//! Sanitization of model-generated SQL.
//!
//! The model is instructed to return a bare SQLite statement, but in practice
//! its output carries known defects: markdown fences, chained statements,
//! a trailing projection comma before FROM, and unbounded `SELECT *` scans.
//! Each repair here is a targeted, regex-level fix for an observed failure
//! mode - this is not SQL validation. Anything still malformed after
//! sanitization is left for the executor to reject.

use regex::Regex;
use std::sync::OnceLock;

/// Row limit appended to unbounded `SELECT *` statements.
pub const DEFAULT_ROW_LIMIT: u32 = 50;

/// Matches a dangling projection comma directly before the FROM keyword,
/// e.g. `SELECT a, b, FROM t`.
fn comma_before_from() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i),\s*FROM").expect("valid regex"))
}

/// Cleans a raw model response into a single executable statement.
///
/// Total and pure: never fails, and is idempotent on already-clean input.
/// Steps, in order:
/// 1. strip code-fence markup (```` ```sql ```` and bare ```` ``` ````)
/// 2. trim surrounding whitespace
/// 3. keep only the text before the first `;`, dropping any statements the
///    model appended after the first one
/// 4. collapse `, FROM` to ` FROM` (dropped trailing projection item)
/// 5. append `LIMIT 50` to a `SELECT *` that carries no explicit limit
pub fn sanitize(raw: &str) -> String {
    let stripped = raw.replace("```sql", "").replace("```", "");
    let trimmed = stripped.trim();

    let first_statement = match trimmed.split_once(';') {
        Some((head, _)) => head,
        None => trimmed,
    };

    let mut sql = comma_before_from()
        .replace_all(first_statement, " FROM")
        .into_owned();

    let upper = sql.to_uppercase();
    if upper.contains("SELECT *") && !upper.contains("LIMIT") {
        sql.push_str(&format!(" LIMIT {DEFAULT_ROW_LIMIT}"));
    }

    sql
}
