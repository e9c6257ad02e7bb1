//! Convenience re-exports for common dao-object usage

// Core traits
pub use crate::traits::{DaoOperations, FilterOperations, RawSqlOperations, RowMapper, TableRecord};

// Error types
pub use crate::errors::DaoError;

// Core DAO functionality
pub use crate::generic_dao::GenericDao;

// Filter fragments
pub use crate::filter::FilterFragment;

// Validation
pub use crate::validation::{ValidatedColumnName, ValidatedTableName, ValidationError};

// Value union and untyped rows
pub use sql_value::{SqlRow, SqlValue};

// Pool alias
pub use crate::DbPool;

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use sqlx::{MySqlPool, Row};
