//! Filter fragments
//!
//! A filter fragment is a caller-supplied partial SQL clause paired with the
//! ordered positional arguments its `?` markers consume.

use sql_value::SqlValue;

/// A partial SQL clause plus its positional arguments.
///
/// The clause text is interpolated into the statement verbatim, including its
/// leading keyword (`"where age < ?"`, `"order by id desc"`); every literal
/// value must travel through `args`. The caller is responsible for supplying
/// exactly one argument per `?` marker; the core does not validate the
/// count, and a mismatch surfaces as a backing-store execution error.
#[derive(Debug, Clone, Default)]
pub struct FilterFragment {
    clause: String,
    args: Vec<SqlValue>,
}

impl FilterFragment {
    pub fn new(clause: impl Into<String>, args: Vec<SqlValue>) -> Self {
        Self {
            clause: clause.into(),
            args,
        }
    }

    /// A fragment matching every row: no clause, no arguments.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn clause(&self) -> &str {
        &self.clause
    }

    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    pub fn is_empty(&self) -> bool {
        self.clause.is_empty() && self.args.is_empty()
    }

    /// Append `start` and `limit` as the final two positional arguments, in
    /// that order, matching a trailing `limit ?, ?` clause.
    ///
    /// The clause text must leave those two trailing markers to the paging
    /// clause; a fragment that consumes them itself shifts every argument and
    /// returns the wrong page.
    pub fn with_paging(mut self, start: i64, limit: i64) -> Self {
        self.args.push(SqlValue::BigInt(start));
        self.args.push(SqlValue::BigInt(limit));
        self
    }
}
