//! Error types for the dao-object crate
//!
//! "No row found" on single-row lookups is not represented here; it is an
//! `Ok(None)` result. Everything below aborts the call that produced it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaoError {
    /// Fatal at DAO construction: degenerate table or column metadata.
    #[error("Invalid DAO configuration for table '{table}': {message}")]
    Configuration { table: String, message: String },

    /// A statement failed at the backing store. The SQL text is attached for
    /// context; the sqlx source carries the driver detail.
    #[error("Query on '{table}' failed ({sql}): {source}")]
    QueryExecution {
        table: String,
        sql: String,
        #[source]
        source: sqlx::Error,
    },

    /// A non-query operation failed at the backing store.
    #[error("Operation '{operation}' on '{table}' failed: {source}")]
    DatabaseOperation {
        table: String,
        operation: String,
        #[source]
        source: sqlx::Error,
    },

    /// The row mapper (or untyped row decoding) rejected a retrieved row.
    #[error("Row mapping for '{table}' failed: {source}")]
    RowMapping {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    /// A single-result lookup matched an unexpected number of rows.
    #[error("Query on '{table}' returned {actual} rows, expected {expected}")]
    IncorrectResultSize {
        table: String,
        expected: usize,
        actual: usize,
    },

    /// A batched insert reported an affected-row total other than the batch
    /// size.
    #[error("Batch insert into '{table}' affected {affected} rows, expected {expected}")]
    BatchInsertMismatch {
        table: String,
        expected: u64,
        affected: u64,
    },
}

impl DaoError {
    pub fn configuration(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            table: table.into(),
            message: message.into(),
        }
    }

    pub fn query_execution(table: &str, sql: &str, source: sqlx::Error) -> Self {
        Self::QueryExecution {
            table: table.to_string(),
            sql: sql.to_string(),
            source,
        }
    }

    pub fn database_operation(table: &str, operation: &str, source: sqlx::Error) -> Self {
        Self::DatabaseOperation {
            table: table.to_string(),
            operation: operation.to_string(),
            source,
        }
    }

    pub fn row_mapping(table: &str, source: sqlx::Error) -> Self {
        Self::RowMapping {
            table: table.to_string(),
            source,
        }
    }

    pub fn incorrect_result_size(table: &str, expected: usize, actual: usize) -> Self {
        Self::IncorrectResultSize {
            table: table.to_string(),
            expected,
            actual,
        }
    }
}
