//! Error types for the Rowhaus crate
//!
//! This module contains all error types that can be returned by Rowhaus
//! coordinator operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowHausError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Connection pool not registered: {0}")]
    PoolNotFound(String),

    #[error("Connection pool already registered: {0}")]
    PoolAlreadyRegistered(String),

    #[error(transparent)]
    Dao(#[from] dao_object::DaoError),
}
