//! Core Rowhaus functionality
//!
//! This module contains the main Rowhaus coordinator, which owns the named
//! connection pools and hands out fully configured DAOs.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::RowHausError;
use config::{AppConfig, DatabaseConfig};
use dao_object::{GenericDao, TableRecord};

/// Coordinator that manages named database pools and DAO construction.
///
/// Pools are registered once, single-threaded, at startup; afterwards the
/// coordinator is read-only and can be shared freely. `dao::<T>()` resolves
/// `T::pool_name()` against the registry, so a record type declaring an
/// unregistered pool fails fast instead of at first query.
pub struct RowHaus {
    pools: HashMap<String, MySqlPool>,
}

impl RowHaus {
    /// Create an empty coordinator; pools are added with `register_pool`.
    pub fn new() -> Self {
        Self {
            pools: HashMap::new(),
        }
    }

    /// Create a coordinator with one pool per `[databases.<name>]` section.
    pub async fn connect(config: &AppConfig) -> Result<Self, RowHausError> {
        let mut pools = HashMap::new();
        for (name, database) in &config.databases {
            pools.insert(name.clone(), Self::build_pool(database).await?);
        }
        Ok(Self { pools })
    }

    /// Build one pool from its configuration section.
    pub async fn build_pool(config: &DatabaseConfig) -> Result<MySqlPool, RowHausError> {
        let mut pool_options = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&config.connection_string()).await?;
        Ok(pool)
    }

    /// Register a pool under a given name
    pub fn register_pool(
        &mut self,
        name: impl Into<String>,
        pool: MySqlPool,
    ) -> Result<(), RowHausError> {
        let name = name.into();
        if self.pools.contains_key(&name) {
            return Err(RowHausError::PoolAlreadyRegistered(name));
        }

        self.pools.insert(name, pool);
        Ok(())
    }

    /// Get a registered pool by name
    pub fn pool(&self, name: &str) -> Result<&MySqlPool, RowHausError> {
        self.pools
            .get(name)
            .ok_or_else(|| RowHausError::PoolNotFound(name.to_string()))
    }

    /// List all registered pool names
    pub fn pool_names(&self) -> Vec<&String> {
        self.pools.keys().collect()
    }

    /// Build a DAO for `T`, resolving its declared pool name against the
    /// registry.
    pub fn dao<T: TableRecord>(&self) -> Result<GenericDao<T>, RowHausError> {
        let pool = self.pool(T::pool_name())?;
        Ok(GenericDao::new(pool.clone())?)
    }

    /// Check every registered pool's connection health
    pub async fn health_check(&self) -> Result<(), RowHausError> {
        for pool in self.pools.values() {
            sqlx::query("SELECT 1").fetch_one(pool).await?;
        }
        Ok(())
    }
}

impl Default for RowHaus {
    fn default() -> Self {
        Self::new()
    }
}
