//! Integration tests for the generic DAO against a live MySQL database.
//!
//! Tests run only when `ROWHAUS_TEST_DATABASE_URL` points at a scratch MySQL
//! database; without it every test is a no-op. Each test reseeds the `user`
//! table, serialized through a global lock so tests never see each other's
//! rows.

use rowhaus::prelude::*;
use rowhaus::RowHaus;
use sqlx::mysql::{MySqlPool, MySqlRow};
use std::sync::OnceLock;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

#[derive(Default)]
pub struct UserRowMapper;

impl RowMapper for UserRowMapper {
    type Record = User;

    fn map_row(&self, row: &MySqlRow) -> Result<User, sqlx::Error> {
        Ok(User {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            age: row.try_get("age")?,
        })
    }
}

impl TableRecord for User {
    type Id = i32;
    type Mapper = UserRowMapper;

    fn table_name() -> &'static str {
        "user"
    }

    fn insert_columns() -> &'static [&'static str] {
        &["name", "age"]
    }

    fn bind_insert<'q>(
        &self,
        query: sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments>,
    ) -> sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments> {
        query.bind(self.name.clone()).bind(self.age)
    }
}

fn user(id: i32, name: &str, age: i32) -> User {
    User {
        id,
        name: name.to_string(),
        age,
    }
}

static DB_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Connect, reseed the `user` table, and hold the lock for the test's
/// duration. Returns `None` (test skipped) when no test database is
/// configured.
async fn setup() -> Option<(GenericDao<User>, MutexGuard<'static, ()>)> {
    let url = std::env::var("ROWHAUS_TEST_DATABASE_URL").ok()?;

    let guard = DB_LOCK.get_or_init(|| Mutex::new(())).lock().await;

    let pool = MySqlPool::connect(&url)
        .await
        .expect("failed to connect to test database");

    sqlx::query("drop table if exists user")
        .execute(&pool)
        .await
        .expect("failed to drop user table");
    sqlx::query(
        "create table user (
            id int not null auto_increment,
            name varchar(50) not null,
            age int not null,
            primary key (id)
        )",
    )
    .execute(&pool)
    .await
    .expect("failed to create user table");
    sqlx::query("insert into user (name, age) values ('jialechan', 8), ('KKL', 18), ('Ken', 28)")
        .execute(&pool)
        .await
        .expect("failed to seed user table");

    let dao = GenericDao::<User>::new(pool).expect("failed to build user DAO");
    Some((dao, guard))
}

#[tokio::test]
async fn test_select_all() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let users = dao.select_all().await.unwrap();
    assert_eq!(
        users,
        vec![
            user(1, "jialechan", 8),
            user(2, "KKL", 18),
            user(3, "Ken", 28),
        ]
    );
}

#[tokio::test]
async fn test_select_all_with_no_data() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let deleted = dao.delete_filtered("", &[]).await.unwrap();
    assert_eq!(deleted, 3);
    assert!(dao.select_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_select_by_id() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let found = dao.select_by_id(&1).await.unwrap();
    assert_eq!(found, Some(user(1, "jialechan", 8)));

    let missing = dao.select_by_id(&99).await.unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn test_insert_then_select_by_id() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let id = dao.insert(&user(0, "Tim", 1)).await.unwrap();
    assert_eq!(id, 4);

    let found = dao.select_by_id(&(id as i32)).await.unwrap();
    assert_eq!(found, Some(user(id as i32, "Tim", 1)));
}

#[tokio::test]
async fn test_count_total_matches_select_all() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let total = dao.count_total().await.unwrap();
    assert_eq!(total as usize, dao.select_all().await.unwrap().len());

    let filtered = dao
        .count_filtered("where age < ?", &[SqlValue::Integer(20)])
        .await
        .unwrap();
    let listed = dao
        .select_filtered_list("where age < ?", &[SqlValue::Integer(20)])
        .await
        .unwrap();
    assert_eq!(filtered as usize, listed.len());
}

#[tokio::test]
async fn test_select_filtered_single() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let found = dao
        .select_filtered_single("where name = ?", &[SqlValue::from("jialechan")])
        .await
        .unwrap();
    assert_eq!(found, Some(user(1, "jialechan", 8)));

    let missing = dao
        .select_filtered_single("where name = ?", &[SqlValue::from("nobody")])
        .await
        .unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn test_select_filtered_single_with_more_than_one_result() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let result = dao
        .select_filtered_single("where age > ?", &[SqlValue::Integer(1)])
        .await;
    match result {
        Err(DaoError::IncorrectResultSize {
            expected, actual, ..
        }) => {
            assert_eq!(expected, 1);
            assert_eq!(actual, 3);
        }
        other => panic!("expected cardinality error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_select_filtered_list() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let users = dao
        .select_filtered_list("where age < ?", &[SqlValue::Integer(20)])
        .await
        .unwrap();
    assert_eq!(users, vec![user(1, "jialechan", 8), user(2, "KKL", 18)]);

    let none = dao
        .select_filtered_list("where age < ?", &[SqlValue::Integer(0)])
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_select_filtered_rows() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let rows = dao
        .select_filtered_rows("where age < ?", &[SqlValue::Integer(20)])
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);

    let first = &rows[0];
    assert_eq!(first.get("id").and_then(SqlValue::as_i64), Some(1));
    assert_eq!(first.get("name").and_then(SqlValue::as_str), Some("jialechan"));
    assert_eq!(first.get("age").and_then(SqlValue::as_i64), Some(8));

    let columns: Vec<&str> = first.columns().collect();
    assert_eq!(columns, vec!["id", "name", "age"]);
}

#[tokio::test]
async fn test_select_filtered_page() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    // Youngest two match the filter; descending id order puts KKL first.
    let page = dao
        .select_filtered_page(
            "where age < ?",
            0,
            1,
            "order by id desc",
            &[SqlValue::Integer(20)],
        )
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].get("name").and_then(SqlValue::as_str), Some("KKL"));

    let typed = dao
        .select_filtered_page_as_list(
            "where age < ?",
            0,
            1,
            "order by id desc",
            &[SqlValue::Integer(20)],
        )
        .await
        .unwrap();
    assert_eq!(typed, vec![user(2, "KKL", 18)]);
}

#[tokio::test]
async fn test_select_page_bounds() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let first = dao.select_page(0, 1).await.unwrap();
    assert_eq!(first.len(), 1);

    // limit larger than the table is clamped by the result set
    let all = dao.select_page(0, 100).await.unwrap();
    assert_eq!(all.len(), 3);

    let tail = dao.select_page(2, 100).await.unwrap();
    assert_eq!(tail.len(), 1);

    // start beyond the result set is empty, not an error
    let beyond = dao.select_page(3, 100).await.unwrap();
    assert!(beyond.is_empty());

    let ordered = dao
        .select_page_ordered(0, 1, "order by id desc")
        .await
        .unwrap();
    assert_eq!(ordered[0].get("name").and_then(SqlValue::as_str), Some("Ken"));
}

#[tokio::test]
async fn test_delete_by_id() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    assert_eq!(dao.delete_by_id(&1).await.unwrap(), 1);
    assert_eq!(dao.select_by_id(&1).await.unwrap(), None);
    assert_eq!(dao.count_total().await.unwrap(), 2);

    // Deleting a missing id removes nothing and is not an error.
    assert_eq!(dao.delete_by_id(&99).await.unwrap(), 0);
    assert_eq!(dao.count_total().await.unwrap(), 2);
}

#[tokio::test]
async fn test_delete_filtered() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let deleted = dao
        .delete_filtered("where age > ?", &[SqlValue::Integer(1)])
        .await
        .unwrap();
    assert_eq!(deleted, 3);
    assert!(dao.select_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_existence_probes() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    assert!(dao
        .exists_exactly_one("where name = ?", &[SqlValue::from("Ken")])
        .await
        .unwrap());
    assert!(!dao
        .exists_exactly_one("where name != ?", &[SqlValue::from("Ken")])
        .await
        .unwrap());

    assert!(dao
        .exists_any("where name = ?", &[SqlValue::from("Ken")])
        .await
        .unwrap());
    assert!(!dao
        .exists_any("where name = ?", &[SqlValue::from("nobody")])
        .await
        .unwrap());
}

#[tokio::test]
async fn test_exec_select_and_update() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let sql = format!("select * from {} where name = ?", dao.table_name());
    let rows = dao
        .exec_select(&sql, &[SqlValue::from("KKL")])
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("age").and_then(SqlValue::as_i64), Some(18));

    let update_sql = format!("update {} set name = ? where id = ?", dao.table_name());
    let updated = dao
        .exec_update(&update_sql, &[SqlValue::from("KKL2"), SqlValue::Integer(1)])
        .await
        .unwrap();
    assert_eq!(updated, 1);
    assert_eq!(
        dao.select_by_id(&1).await.unwrap(),
        Some(user(1, "KKL2", 8))
    );

    let no_match = dao
        .exec_update(
            &format!("update {} set name = 'nomatch' where id = -1", dao.table_name()),
            &[],
        )
        .await
        .unwrap();
    assert_eq!(no_match, 0);
}

#[tokio::test]
async fn test_exec_select_as_record() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let sql = format!("select * from {} where name = ?", dao.table_name());
    let found = dao
        .exec_select_as_record(&sql, &[SqlValue::from("jialechan")])
        .await
        .unwrap();
    assert_eq!(found, user(1, "jialechan", 8));

    // Unlike the presence-aware lookups, zero rows on the raw path is an error.
    let missing = dao
        .exec_select_as_record(&sql, &[SqlValue::from("nobody")])
        .await;
    assert!(matches!(
        missing,
        Err(DaoError::IncorrectResultSize { actual: 0, .. })
    ));

    let list = dao
        .exec_select_as_list(
            &format!("select * from {} where age < ?", dao.table_name()),
            &[SqlValue::Integer(20)],
        )
        .await
        .unwrap();
    assert_eq!(list, vec![user(1, "jialechan", 8), user(2, "KKL", 18)]);
}

#[tokio::test]
async fn test_batch_insert() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let users: Vec<User> = (0..10_000).map(|i| user(0, &i.to_string(), i)).collect();

    let counts = dao.batch_insert(&users).await.unwrap();
    assert_eq!(counts.len(), 10_000);
    assert!(counts.iter().all(|&c| c == 1));

    assert_eq!(dao.count_total().await.unwrap(), 10_003);
}

#[tokio::test]
async fn test_batch_insert_empty_is_noop() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let counts = dao.batch_insert(&[]).await.unwrap();
    assert!(counts.is_empty());
    assert_eq!(dao.count_total().await.unwrap(), 3);
}

/// Record declaring a pool name nothing registers.
#[derive(Debug, Clone)]
struct Orphan;

#[derive(Default)]
struct OrphanMapper;

impl RowMapper for OrphanMapper {
    type Record = Orphan;

    fn map_row(&self, _row: &MySqlRow) -> Result<Orphan, sqlx::Error> {
        Ok(Orphan)
    }
}

impl TableRecord for Orphan {
    type Id = i32;
    type Mapper = OrphanMapper;

    fn table_name() -> &'static str {
        "orphan"
    }

    fn pool_name() -> &'static str {
        "analytics"
    }

    fn insert_columns() -> &'static [&'static str] {
        &["id"]
    }

    fn bind_insert<'q>(
        &self,
        query: sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments>,
    ) -> sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments> {
        query.bind(0)
    }
}

#[tokio::test]
async fn test_coordinator_resolves_named_pools() {
    let Some((dao, _guard)) = setup().await else {
        return;
    };

    let mut rowhaus = RowHaus::new();
    rowhaus
        .register_pool(DEFAULT_POOL, dao.pool().clone())
        .unwrap();

    // Duplicate registration is rejected.
    assert!(matches!(
        rowhaus.register_pool(DEFAULT_POOL, dao.pool().clone()),
        Err(RowHausError::PoolAlreadyRegistered(_))
    ));

    // User declares the default pool, so the coordinator can build its DAO.
    let user_dao = rowhaus.dao::<User>().unwrap();
    assert_eq!(user_dao.count_total().await.unwrap(), 3);

    // Orphan declares a pool nothing registered.
    assert!(matches!(
        rowhaus.dao::<Orphan>(),
        Err(RowHausError::PoolNotFound(name)) if name == "analytics"
    ));

    rowhaus.health_check().await.unwrap();
}
