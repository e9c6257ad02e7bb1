//! Filter-fragment operation contract

use crate::errors::DaoError;
use crate::traits::dao::DaoOperations;
use async_trait::async_trait;
use sql_value::{SqlRow, SqlValue};

/// Operations over caller-supplied filter fragments.
///
/// Every `filter` parameter is raw partial SQL including its leading keyword
/// (`"where age < ?"`), paired with one argument per `?` marker. Fragment
/// text is trusted; see [`crate::filter::FilterFragment`].
#[async_trait]
pub trait FilterOperations: DaoOperations {
    /// At most one matching row. Zero rows is `None`; two or more is an
    /// [`DaoError::IncorrectResultSize`] error, never a truncation.
    async fn select_filtered_single(
        &self,
        filter: &str,
        args: &[SqlValue],
    ) -> Result<Option<Self::Record>, DaoError>;

    /// All matching rows, mapped.
    async fn select_filtered_list(
        &self,
        filter: &str,
        args: &[SqlValue],
    ) -> Result<Vec<Self::Record>, DaoError>;

    /// All matching rows as untyped column-value mappings, bypassing the
    /// mapper entirely.
    async fn select_filtered_rows(
        &self,
        filter: &str,
        args: &[SqlValue],
    ) -> Result<Vec<SqlRow>, DaoError>;

    /// One page of the whole table, unordered.
    async fn select_page(&self, start: i64, limit: i64) -> Result<Vec<SqlRow>, DaoError>;

    /// One page of the whole table with an `order by` fragment.
    async fn select_page_ordered(
        &self,
        start: i64,
        limit: i64,
        order: &str,
    ) -> Result<Vec<SqlRow>, DaoError>;

    /// One page of a filtered, ordered selection, as untyped rows.
    ///
    /// `start` and `limit` become the last two positional parameters, after
    /// `args`, matching the trailing `limit ?, ?` clause; the filter and
    /// order fragments must not consume those two markers themselves. A
    /// `start` beyond the result set yields an empty vec.
    async fn select_filtered_page(
        &self,
        filter: &str,
        start: i64,
        limit: i64,
        order: &str,
        args: &[SqlValue],
    ) -> Result<Vec<SqlRow>, DaoError>;

    /// One page of a filtered, ordered selection, mapped.
    async fn select_filtered_page_as_list(
        &self,
        filter: &str,
        start: i64,
        limit: i64,
        order: &str,
        args: &[SqlValue],
    ) -> Result<Vec<Self::Record>, DaoError>;

    /// Row count under a filter. An empty filter counts the whole table.
    async fn count_filtered(&self, filter: &str, args: &[SqlValue]) -> Result<i64, DaoError>;

    /// Rows removed under a filter. An empty filter removes every row;
    /// avoiding that is the caller's responsibility.
    async fn delete_filtered(&self, filter: &str, args: &[SqlValue]) -> Result<u64, DaoError>;

    /// True iff the filter matches exactly one row.
    async fn exists_exactly_one(
        &self,
        filter: &str,
        args: &[SqlValue],
    ) -> Result<bool, DaoError>;

    /// True iff the filter matches at least one row. Implemented as a
    /// bounded probe (`limit 0, 1`), not a count.
    async fn exists_any(&self, filter: &str, args: &[SqlValue]) -> Result<bool, DaoError>;
}
