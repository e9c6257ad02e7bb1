//! Core DAO operation contract
//!
//! Whole-table and by-id operations shared by every DAO.

use crate::errors::DaoError;
use crate::traits::record::TableRecord;
use async_trait::async_trait;

/// CRUD operations keyed on the table and primary key alone.
#[async_trait]
pub trait DaoOperations: Send + Sync {
    /// The record type this DAO serves.
    type Record: TableRecord;

    /// Every row, mapped. An empty table yields an empty vec.
    async fn select_all(&self) -> Result<Vec<Self::Record>, DaoError>;

    /// Single row by primary key. The key is bound by its string form.
    /// `None` when no row matches.
    async fn select_by_id(
        &self,
        id: &<Self::Record as TableRecord>::Id,
    ) -> Result<Option<Self::Record>, DaoError>;

    /// Insert one record; returns the auto-generated key.
    async fn insert(&self, record: &Self::Record) -> Result<i64, DaoError>;

    /// Insert every record in one multi-row statement, a single round trip
    /// to the backing store. Returns the per-row affected counts (one per
    /// record). An empty slice is a no-op.
    async fn batch_insert(&self, records: &[Self::Record]) -> Result<Vec<u64>, DaoError>;

    /// Delete by primary key; returns the number of rows removed (0 when no
    /// row matched, which is not an error).
    async fn delete_by_id(
        &self,
        id: &<Self::Record as TableRecord>::Id,
    ) -> Result<u64, DaoError>;

    /// Whole-table row count.
    async fn count_total(&self) -> Result<i64, DaoError>;
}
