//! Named pools: two record types living on different databases, resolved
//! through one coordinator.

use anyhow::Result;
use config::{AppConfig, DatabaseConfig};
use rowhaus::prelude::*;
use rowhaus::RowHaus;
use sqlx::mysql::MySqlRow;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Order {
    pub id: i64,
    pub item: String,
}

#[derive(Default)]
pub struct OrderRowMapper;

impl RowMapper for OrderRowMapper {
    type Record = Order;

    fn map_row(&self, row: &MySqlRow) -> Result<Order, sqlx::Error> {
        Ok(Order {
            id: row.try_get("id")?,
            item: row.try_get("item")?,
        })
    }
}

impl TableRecord for Order {
    type Id = i64;
    type Mapper = OrderRowMapper;

    fn table_name() -> &'static str {
        "orders"
    }

    fn insert_columns() -> &'static [&'static str] {
        &["item"]
    }

    fn bind_insert<'q>(
        &self,
        query: sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments>,
    ) -> sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments> {
        query.bind(self.item.clone())
    }
}

#[derive(Debug, Clone)]
pub struct PageView {
    pub id: i64,
    pub path: String,
}

#[derive(Default)]
pub struct PageViewRowMapper;

impl RowMapper for PageViewRowMapper {
    type Record = PageView;

    fn map_row(&self, row: &MySqlRow) -> Result<PageView, sqlx::Error> {
        Ok(PageView {
            id: row.try_get("id")?,
            path: row.try_get("path")?,
        })
    }
}

impl TableRecord for PageView {
    type Id = i64;
    type Mapper = PageViewRowMapper;

    fn table_name() -> &'static str {
        "page_view"
    }

    // Analytics rows live on their own pool.
    fn pool_name() -> &'static str {
        "analytics"
    }

    fn insert_columns() -> &'static [&'static str] {
        &["path"]
    }

    fn bind_insert<'q>(
        &self,
        query: sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments>,
    ) -> sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments> {
        query.bind(self.path.clone())
    }
}

fn db(host: &str, database: &str) -> DatabaseConfig {
    DatabaseConfig::new(
        host.to_string(),
        3306,
        database.to_string(),
        "root".to_string(),
        "root".to_string(),
        1,
        5,
        30,
        600,
        3600,
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig {
        databases: HashMap::from([
            (DEFAULT_POOL.to_string(), db("localhost", "shop")),
            ("analytics".to_string(), db("localhost", "analytics")),
        ]),
    };

    let rowhaus = RowHaus::connect(&config).await?;
    rowhaus.health_check().await?;

    let order_dao = rowhaus.dao::<Order>()?;
    let view_dao = rowhaus.dao::<PageView>()?;

    let order_id = order_dao
        .insert(&Order {
            id: 0,
            item: "keyboard".to_string(),
        })
        .await?;
    view_dao
        .insert(&PageView {
            id: 0,
            path: "/checkout".to_string(),
        })
        .await?;

    println!("order {} placed", order_id);
    println!("orders: {}", order_dao.count_total().await?);
    println!("page views: {}", view_dao.count_total().await?);

    Ok(())
}
