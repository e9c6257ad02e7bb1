//! DAO Object - Core data-access layer for Rowhaus
//!
//! This crate provides the foundational types and traits for table access:
//! the generic DAO, filter fragments, the record/mapper contracts, and
//! identifier validation.

pub mod errors;
pub mod filter;
pub mod generic_dao;
pub mod prelude;
pub mod traits;
pub mod validation;

pub use errors::DaoError;
pub use filter::FilterFragment;
pub use generic_dao::GenericDao;
pub use traits::{DaoOperations, FilterOperations, RawSqlOperations, RowMapper, TableRecord};
pub use validation::{ValidatedColumnName, ValidatedTableName, ValidationError};

pub use sql_value::{SqlRow, SqlValue};

use sqlx::MySqlPool;

pub type DbPool = MySqlPool;
