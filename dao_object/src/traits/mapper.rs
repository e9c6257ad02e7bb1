//! Row mapper contract
//!
//! The DAO never converts rows itself; the record type supplies a mapper.

use sqlx::mysql::MySqlRow;

/// Converts one retrieved row into one strongly-typed record.
///
/// A fresh mapper is constructed (via `Default`) for every query call, so
/// implementations are expected to be stateless. Returning an error from
/// `map_row` aborts the whole call.
pub trait RowMapper: Default + Send + Sync {
    /// The record type this mapper produces.
    type Record;

    /// Convert a single row. Invoked once per result row.
    fn map_row(&self, row: &MySqlRow) -> Result<Self::Record, sqlx::Error>;
}
