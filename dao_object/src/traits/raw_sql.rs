//! Raw SQL escape hatch
//!
//! Full statements supplied by the caller, bypassing table-name templating.
//! The typed variants still run rows through the record's mapper.

use crate::errors::DaoError;
use crate::traits::dao::DaoOperations;
use async_trait::async_trait;
use sql_value::{SqlRow, SqlValue};

#[async_trait]
pub trait RawSqlOperations: DaoOperations {
    /// Run a full select statement; untyped rows.
    async fn exec_select(&self, sql: &str, args: &[SqlValue]) -> Result<Vec<SqlRow>, DaoError>;

    /// Run a full select statement expected to match exactly one row. Unlike
    /// the presence-aware lookups, zero rows is an error here, as is more
    /// than one.
    async fn exec_select_as_record(
        &self,
        sql: &str,
        args: &[SqlValue],
    ) -> Result<Self::Record, DaoError>;

    /// Run a full select statement; all rows mapped.
    async fn exec_select_as_list(
        &self,
        sql: &str,
        args: &[SqlValue],
    ) -> Result<Vec<Self::Record>, DaoError>;

    /// Run a full mutating statement; returns the affected-row count.
    async fn exec_update(&self, sql: &str, args: &[SqlValue]) -> Result<u64, DaoError>;
}
