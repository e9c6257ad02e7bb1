//! Record metadata trait
//!
//! A concrete record type obtains full DAO capability by declaring three
//! facts: its table name, which named pool its table lives on, and which row
//! mapper converts its rows. Declaring them here, on the type, makes the
//! configuration a compile-time requirement instead of runtime discovery.

use crate::traits::mapper::RowMapper;
use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::MySql;
use std::fmt::{Debug, Display};

/// Declarative metadata a record type supplies to obtain DAO capability.
///
/// ```
/// use dao_object::traits::{RowMapper, TableRecord};
/// use sqlx::mysql::MySqlRow;
/// use sqlx::Row;
///
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct User {
///     pub id: i32,
///     pub name: String,
///     pub age: i32,
/// }
///
/// #[derive(Default)]
/// pub struct UserRowMapper;
///
/// impl RowMapper for UserRowMapper {
///     type Record = User;
///
///     fn map_row(&self, row: &MySqlRow) -> Result<User, sqlx::Error> {
///         Ok(User {
///             id: row.try_get("id")?,
///             name: row.try_get("name")?,
///             age: row.try_get("age")?,
///         })
///     }
/// }
///
/// impl TableRecord for User {
///     type Id = i32;
///     type Mapper = UserRowMapper;
///
///     fn table_name() -> &'static str {
///         "user"
///     }
///
///     fn insert_columns() -> &'static [&'static str] {
///         &["name", "age"]
///     }
///
///     fn bind_insert<'q>(
///         &self,
///         query: sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments>,
///     ) -> sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments> {
///         query.bind(self.name.clone()).bind(self.age)
///     }
/// }
/// ```
pub trait TableRecord: Clone + Send + Sync + Debug {
    /// The primary key type. Id lookups bind the key by its string form.
    type Id: Display + Send + Sync;

    /// The row mapper for this record type. Exactly one mapper per record
    /// type, enforced by the type system.
    type Mapper: RowMapper<Record = Self>;

    /// The table name in the database.
    fn table_name() -> &'static str;

    /// The named connection pool this type's table lives on.
    fn pool_name() -> &'static str {
        "default"
    }

    /// Columns populated by `insert`/`batch_insert`, excluding the
    /// auto-generated key column.
    fn insert_columns() -> &'static [&'static str];

    /// Bind one record's insert values, in `insert_columns()` order.
    /// Implementations bind owned values.
    fn bind_insert<'q>(
        &self,
        query: Query<'q, MySql, MySqlArguments>,
    ) -> Query<'q, MySql, MySqlArguments>;
}
