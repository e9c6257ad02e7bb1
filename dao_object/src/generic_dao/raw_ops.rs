//! Raw SQL operations

use super::core::GenericDao;
use crate::errors::DaoError;
use crate::traits::{RawSqlOperations, RowMapper, TableRecord};
use async_trait::async_trait;
use sql_value::{SqlRow, SqlValue};
use tracing::debug;

#[async_trait]
impl<T> RawSqlOperations for GenericDao<T>
where
    T: TableRecord + 'static,
{
    async fn exec_select(&self, sql: &str, args: &[SqlValue]) -> Result<Vec<SqlRow>, DaoError> {
        debug!("executing select: {} {:?}", sql, args);
        let rows = self.fetch_rows(sql, args).await?;
        self.decode_rows(&rows)
    }

    async fn exec_select_as_record(&self, sql: &str, args: &[SqlValue]) -> Result<T, DaoError> {
        debug!("executing single-record select: {} {:?}", sql, args);
        let rows = self.fetch_rows(sql, args).await?;
        match rows.as_slice() {
            [row] => {
                let mapper = T::Mapper::default();
                mapper
                    .map_row(row)
                    .map_err(|e| DaoError::row_mapping(self.table_name(), e))
            }
            other => Err(DaoError::incorrect_result_size(
                self.table_name(),
                1,
                other.len(),
            )),
        }
    }

    async fn exec_select_as_list(&self, sql: &str, args: &[SqlValue]) -> Result<Vec<T>, DaoError> {
        debug!("executing list select: {} {:?}", sql, args);
        let rows = self.fetch_rows(sql, args).await?;
        let result = self.map_rows(&rows)?;
        debug!("select returned {} rows", result.len());
        Ok(result)
    }

    async fn exec_update(&self, sql: &str, args: &[SqlValue]) -> Result<u64, DaoError> {
        debug!("executing update: {} {:?}", sql, args);
        let result = self.execute(sql, args).await?;
        debug!("update affected {} rows", result.rows_affected());
        Ok(result.rows_affected())
    }
}
