//! Trait definitions
//!
//! This module defines the configuration and operation contracts for DAOs.

pub mod dao;
pub mod filterable;
pub mod mapper;
pub mod raw_sql;
pub mod record;

pub use dao::DaoOperations;
pub use filterable::FilterOperations;
pub use mapper::RowMapper;
pub use raw_sql::RawSqlOperations;
pub use record::TableRecord;
