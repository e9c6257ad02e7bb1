//! Untyped row container
//!
//! This module provides the ordered column-to-value mapping returned by
//! queries that bypass typed row mapping.

use crate::types::SqlValue;
use serde::{Deserialize, Serialize};

/// One retrieved row as an ordered mapping of column name to [`SqlValue`].
///
/// Column order matches the result set. Lookups by name return the first
/// matching column when a statement projects duplicate names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqlRow {
    pairs: Vec<(String, SqlValue)>,
}

impl SqlRow {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn from_pairs(pairs: Vec<(String, SqlValue)>) -> Self {
        Self { pairs }
    }

    /// Value of the first column with the given name.
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.pairs
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Value at the given result-set position.
    pub fn value_at(&self, index: usize) -> Option<&SqlValue> {
        self.pairs.get(index).map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.pairs.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<(String, SqlValue)> {
        self.pairs
    }
}

impl FromIterator<(String, SqlValue)> for SqlRow {
    fn from_iter<I: IntoIterator<Item = (String, SqlValue)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}
