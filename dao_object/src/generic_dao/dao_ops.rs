//! Core CRUD operations

use super::core::GenericDao;
use crate::errors::DaoError;
use crate::traits::{DaoOperations, FilterOperations, TableRecord};
use async_trait::async_trait;
use sql_value::SqlValue;
use tracing::debug;

#[async_trait]
impl<T> DaoOperations for GenericDao<T>
where
    T: TableRecord + 'static,
{
    type Record = T;

    async fn select_all(&self) -> Result<Vec<T>, DaoError> {
        let sql = self.sql.select_all();
        debug!("selecting all rows: {}", sql);
        let rows = self.fetch_rows(sql, &[]).await?;
        let result = self.map_rows(&rows)?;
        debug!("selected {} rows from {}", result.len(), self.table_name());
        Ok(result)
    }

    async fn select_by_id(&self, id: &T::Id) -> Result<Option<T>, DaoError> {
        let sql = self.sql.select_by_id();
        // The key is always compared by its string form.
        let args = [SqlValue::Text(id.to_string())];
        debug!("selecting by id: {} [{}]", sql, id);
        let rows = self.fetch_rows(sql, &args).await?;
        let result = self.single_from_rows(&rows)?;
        if result.is_none() {
            debug!("no row in {} for id {}", self.table_name(), id);
        }
        Ok(result)
    }

    async fn insert(&self, record: &T) -> Result<i64, DaoError> {
        let sql = self.sql.insert();
        debug!("inserting into {}: {:?}", self.table_name(), record);
        let result = record
            .bind_insert(sqlx::query(sql))
            .execute(&self.pool)
            .await
            .map_err(|e| DaoError::query_execution(self.table_name(), sql, e))?;
        let id = result.last_insert_id() as i64;
        debug!("inserted into {} with generated id {}", self.table_name(), id);
        Ok(id)
    }

    async fn batch_insert(&self, records: &[T]) -> Result<Vec<u64>, DaoError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let sql = self.sql.batch_insert(records.len());
        debug!(
            "batch inserting {} rows into {}",
            records.len(),
            self.table_name()
        );

        let mut query = sqlx::query(&sql);
        for record in records {
            query = record.bind_insert(query);
        }
        let result = query
            .execute(&self.pool)
            .await
            .map_err(|e| DaoError::database_operation(self.table_name(), "batch insert", e))?;

        let affected = result.rows_affected();
        let expected = records.len() as u64;
        if affected != expected {
            return Err(DaoError::BatchInsertMismatch {
                table: self.table_name().to_string(),
                expected,
                affected,
            });
        }
        Ok(vec![1; records.len()])
    }

    async fn delete_by_id(&self, id: &T::Id) -> Result<u64, DaoError> {
        let sql = self.sql.delete_by_id();
        let args = [SqlValue::Text(id.to_string())];
        debug!("deleting by id: {} [{}]", sql, id);
        let result = self.execute(sql, &args).await?;
        debug!("deleted {} rows from {}", result.rows_affected(), self.table_name());
        Ok(result.rows_affected())
    }

    async fn count_total(&self) -> Result<i64, DaoError> {
        self.count_filtered("", &[]).await
    }
}
