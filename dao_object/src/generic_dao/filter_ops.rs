//! Filter-fragment operations

use super::core::GenericDao;
use crate::errors::DaoError;
use crate::filter::FilterFragment;
use crate::traits::{FilterOperations, TableRecord};
use async_trait::async_trait;
use sql_value::{SqlRow, SqlValue};
use sqlx::Row;
use tracing::debug;

#[async_trait]
impl<T> FilterOperations for GenericDao<T>
where
    T: TableRecord + 'static,
{
    async fn select_filtered_single(
        &self,
        filter: &str,
        args: &[SqlValue],
    ) -> Result<Option<T>, DaoError> {
        let sql = self.sql.select_filtered(filter);
        debug!("selecting single row: {} {:?}", sql, args);
        let rows = self.fetch_rows(&sql, args).await?;
        self.single_from_rows(&rows)
    }

    async fn select_filtered_list(
        &self,
        filter: &str,
        args: &[SqlValue],
    ) -> Result<Vec<T>, DaoError> {
        let sql = self.sql.select_filtered(filter);
        debug!("selecting rows: {} {:?}", sql, args);
        let rows = self.fetch_rows(&sql, args).await?;
        let result = self.map_rows(&rows)?;
        debug!("matched {} rows in {}", result.len(), self.table_name());
        Ok(result)
    }

    async fn select_filtered_rows(
        &self,
        filter: &str,
        args: &[SqlValue],
    ) -> Result<Vec<SqlRow>, DaoError> {
        let sql = self.sql.select_filtered(filter);
        debug!("selecting untyped rows: {} {:?}", sql, args);
        let rows = self.fetch_rows(&sql, args).await?;
        self.decode_rows(&rows)
    }

    async fn select_page(&self, start: i64, limit: i64) -> Result<Vec<SqlRow>, DaoError> {
        self.select_filtered_page("", start, limit, "", &[]).await
    }

    async fn select_page_ordered(
        &self,
        start: i64,
        limit: i64,
        order: &str,
    ) -> Result<Vec<SqlRow>, DaoError> {
        self.select_filtered_page("", start, limit, order, &[]).await
    }

    async fn select_filtered_page(
        &self,
        filter: &str,
        start: i64,
        limit: i64,
        order: &str,
        args: &[SqlValue],
    ) -> Result<Vec<SqlRow>, DaoError> {
        let fragment = FilterFragment::new(filter, args.to_vec()).with_paging(start, limit);
        let sql = self.sql.select_page(fragment.clause(), order);
        debug!("selecting page: {} {:?}", sql, fragment.args());
        let rows = self.fetch_rows(&sql, fragment.args()).await?;
        self.decode_rows(&rows)
    }

    async fn select_filtered_page_as_list(
        &self,
        filter: &str,
        start: i64,
        limit: i64,
        order: &str,
        args: &[SqlValue],
    ) -> Result<Vec<T>, DaoError> {
        let fragment = FilterFragment::new(filter, args.to_vec()).with_paging(start, limit);
        let sql = self.sql.select_page(fragment.clause(), order);
        debug!("selecting page: {} {:?}", sql, fragment.args());
        let rows = self.fetch_rows(&sql, fragment.args()).await?;
        self.map_rows(&rows)
    }

    async fn count_filtered(&self, filter: &str, args: &[SqlValue]) -> Result<i64, DaoError> {
        let sql = self.sql.count_filtered(filter);
        debug!("counting rows: {} {:?}", sql, args);
        let row = sql_value::bind_values(sqlx::query(&sql), args)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DaoError::query_execution(self.table_name(), &sql, e))?;
        let total: i64 = row
            .try_get(0)
            .map_err(|e| DaoError::row_mapping(self.table_name(), e))?;
        debug!("counted {} rows in {}", total, self.table_name());
        Ok(total)
    }

    async fn delete_filtered(&self, filter: &str, args: &[SqlValue]) -> Result<u64, DaoError> {
        let sql = self.sql.delete_filtered(filter);
        debug!("deleting rows: {} {:?}", sql, args);
        let result = self.execute(&sql, args).await?;
        debug!("deleted {} rows from {}", result.rows_affected(), self.table_name());
        Ok(result.rows_affected())
    }

    async fn exists_exactly_one(
        &self,
        filter: &str,
        args: &[SqlValue],
    ) -> Result<bool, DaoError> {
        Ok(self.count_filtered(filter, args).await? == 1)
    }

    async fn exists_any(&self, filter: &str, args: &[SqlValue]) -> Result<bool, DaoError> {
        let sql = self.sql.exists_probe(filter);
        debug!("probing existence: {} {:?}", sql, args);
        let rows = self.fetch_rows(&sql, args).await?;
        Ok(!rows.is_empty())
    }
}
