//! # Rowhaus
//!
//! A generic Rust data-access layer for MySQL. A record type declares three
//! facts (its table name, which named pool to use, and which row mapper to
//! apply) and obtains full CRUD, filter-fragment queries, pagination,
//! existence probes, raw-SQL escape hatches, and batched inserts.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rowhaus::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct User {
//!     pub id: i32,
//!     pub name: String,
//!     pub age: i32,
//! }
//!
//! #[derive(Default)]
//! pub struct UserRowMapper;
//!
//! impl RowMapper for UserRowMapper {
//!     type Record = User;
//!
//!     fn map_row(&self, row: &sqlx::mysql::MySqlRow) -> Result<User, sqlx::Error> {
//!         Ok(User {
//!             id: row.try_get("id")?,
//!             name: row.try_get("name")?,
//!             age: row.try_get("age")?,
//!         })
//!     }
//! }
//!
//! impl TableRecord for User {
//!     type Id = i32;
//!     type Mapper = UserRowMapper;
//!
//!     fn table_name() -> &'static str {
//!         "user"
//!     }
//!
//!     fn insert_columns() -> &'static [&'static str] {
//!         &["name", "age"]
//!     }
//!
//!     fn bind_insert<'q>(
//!         &self,
//!         query: sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments>,
//!     ) -> sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments> {
//!         query.bind(self.name.clone()).bind(self.age)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!
//!     let rowhaus = RowHaus::connect(&config).await?;
//!     let user_dao = rowhaus.dao::<User>()?;
//!
//!     let id = user_dao
//!         .insert(&User { id: 0, name: "Tim".to_string(), age: 1 })
//!         .await?;
//!
//!     let found = user_dao.select_by_id(&(id as i32)).await?;
//!     println!("Found user: {:?}", found);
//!
//!     let young = user_dao
//!         .select_filtered_list("where age < ?", &[SqlValue::Integer(20)])
//!         .await?;
//!     println!("{} young users", young.len());
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::RowHaus;
pub use crate::errors::RowHausError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, DEFAULT_POOL};

// Re-export internal crates backing the public API
pub use dao_object;
pub use sql_value;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
