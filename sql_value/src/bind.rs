//! Positional argument binding
//!
//! This module binds [`SqlValue`] arguments into sqlx MySQL queries,
//! in the order the caller supplied them.

use crate::types::SqlValue;
use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::MySql;

/// A prepared MySQL statement with its bound arguments.
pub type MySqlQuery<'q> = Query<'q, MySql, MySqlArguments>;

/// Bind one value as the next positional parameter.
///
/// `Uuid` values are bound in hyphenated string form; MySQL has no native
/// UUID column type.
pub fn bind_value<'q>(query: MySqlQuery<'q>, value: &'q SqlValue) -> MySqlQuery<'q> {
    match value {
        SqlValue::Null => query.bind(Option::<String>::None),
        SqlValue::Boolean(b) => query.bind(*b),
        SqlValue::TinyInt(n) => query.bind(*n),
        SqlValue::SmallInt(n) => query.bind(*n),
        SqlValue::Integer(n) => query.bind(*n),
        SqlValue::BigInt(n) => query.bind(*n),
        SqlValue::UnsignedBigInt(n) => query.bind(*n),
        SqlValue::Float(n) => query.bind(*n),
        SqlValue::Double(n) => query.bind(*n),
        SqlValue::Decimal(d) => query.bind(*d),
        SqlValue::Text(s) => query.bind(s.as_str()),
        SqlValue::Bytes(b) => query.bind(b.as_slice()),
        SqlValue::Date(d) => query.bind(*d),
        SqlValue::Time(t) => query.bind(*t),
        SqlValue::DateTime(dt) => query.bind(*dt),
        SqlValue::Timestamp(ts) => query.bind(*ts),
        SqlValue::Json(j) => query.bind(j.clone()),
        SqlValue::Uuid(u) => query.bind(u.to_string()),
    }
}

/// Bind a full argument list, left to right.
pub fn bind_values<'q>(mut query: MySqlQuery<'q>, args: &'q [SqlValue]) -> MySqlQuery<'q> {
    for value in args {
        query = bind_value(query, value);
    }
    query
}
