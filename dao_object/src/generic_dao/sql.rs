//! SQL assembly
//!
//! All statement text for a table is produced here: the fixed statements are
//! frozen once at DAO construction, and per-call statements are composed from
//! the frozen bases plus caller-supplied fragments.

use crate::validation::ValidatedTableName;

/// Frozen statement text for one table.
///
/// Fragments are appended verbatim; literal values always travel as `?`
/// parameters bound separately.
#[derive(Debug, Clone)]
pub(crate) struct SqlTemplates {
    select_base: String,
    count_base: String,
    delete_base: String,
    exists_base: String,
    select_by_id: String,
    delete_by_id: String,
    insert: String,
    value_group: String,
}

impl SqlTemplates {
    pub(crate) fn new(table: &ValidatedTableName, insert_columns: &[&str]) -> Self {
        let table = table.as_str();

        let mut group = String::with_capacity(insert_columns.len() * 3 + 2);
        group.push('(');
        for i in 0..insert_columns.len() {
            if i > 0 {
                group.push_str(", ");
            }
            group.push('?');
        }
        group.push(')');

        let insert = format!(
            "insert into {} ({}) values {}",
            table,
            insert_columns.join(", "),
            group
        );

        Self {
            select_base: format!("select * from {}", table),
            count_base: format!("select count(1) from {}", table),
            delete_base: format!("delete from {}", table),
            exists_base: format!("select 1 from {}", table),
            select_by_id: format!("select * from {} where id = ?", table),
            delete_by_id: format!("delete from {} where id = ?", table),
            insert,
            value_group: group,
        }
    }

    pub(crate) fn select_all(&self) -> &str {
        &self.select_base
    }

    pub(crate) fn select_by_id(&self) -> &str {
        &self.select_by_id
    }

    pub(crate) fn delete_by_id(&self) -> &str {
        &self.delete_by_id
    }

    pub(crate) fn insert(&self) -> &str {
        &self.insert
    }

    /// `select * from t [<filter>]`
    pub(crate) fn select_filtered(&self, filter: &str) -> String {
        join_fragments(&self.select_base, &[filter])
    }

    /// `select count(1) from t [<filter>]`
    pub(crate) fn count_filtered(&self, filter: &str) -> String {
        join_fragments(&self.count_base, &[filter])
    }

    /// `delete from t [<filter>]`
    pub(crate) fn delete_filtered(&self, filter: &str) -> String {
        join_fragments(&self.delete_base, &[filter])
    }

    /// `select 1 from t [<filter>] limit 0, 1`, the bounded existence probe.
    pub(crate) fn exists_probe(&self, filter: &str) -> String {
        let mut sql = join_fragments(&self.exists_base, &[filter]);
        sql.push_str(" limit 0, 1");
        sql
    }

    /// `select * from t [<filter>] [<order>] limit ?, ?`
    ///
    /// The two trailing markers consume the `start` and `limit` arguments
    /// appended after any filter arguments.
    pub(crate) fn select_page(&self, filter: &str, order: &str) -> String {
        let mut sql = join_fragments(&self.select_base, &[filter, order]);
        sql.push_str(" limit ?, ?");
        sql
    }

    /// Multi-row insert: `insert into t (cols) values (?, …), (?, …), …`
    ///
    /// `rows` must be at least 1; empty batches never reach SQL assembly.
    pub(crate) fn batch_insert(&self, rows: usize) -> String {
        debug_assert!(rows > 0);
        let mut sql = String::with_capacity(self.insert.len() + (rows - 1) * (self.value_group.len() + 2));
        sql.push_str(&self.insert);
        for _ in 1..rows {
            sql.push_str(", ");
            sql.push_str(&self.value_group);
        }
        sql
    }
}

fn join_fragments(base: &str, fragments: &[&str]) -> String {
    let extra: usize = fragments.iter().map(|f| f.len() + 1).sum();
    let mut sql = String::with_capacity(base.len() + extra);
    sql.push_str(base);
    for fragment in fragments {
        if !fragment.is_empty() {
            sql.push(' ');
            sql.push_str(fragment);
        }
    }
    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_templates() -> SqlTemplates {
        let table = ValidatedTableName::new("user").unwrap();
        SqlTemplates::new(&table, &["name", "age"])
    }

    #[test]
    fn test_fixed_statements() {
        let sql = user_templates();
        assert_eq!(sql.select_all(), "select * from user");
        assert_eq!(sql.select_by_id(), "select * from user where id = ?");
        assert_eq!(sql.delete_by_id(), "delete from user where id = ?");
        assert_eq!(sql.insert(), "insert into user (name, age) values (?, ?)");
    }

    #[test]
    fn test_filtered_statements() {
        let sql = user_templates();
        assert_eq!(
            sql.select_filtered("where age < ?"),
            "select * from user where age < ?"
        );
        assert_eq!(sql.select_filtered(""), "select * from user");
        assert_eq!(
            sql.count_filtered("where age < ?"),
            "select count(1) from user where age < ?"
        );
        assert_eq!(sql.count_filtered(""), "select count(1) from user");
        assert_eq!(
            sql.delete_filtered("where age > ?"),
            "delete from user where age > ?"
        );
        assert_eq!(sql.delete_filtered(""), "delete from user");
    }

    #[test]
    fn test_exists_probe_is_bounded() {
        let sql = user_templates();
        assert_eq!(
            sql.exists_probe("where name = ?"),
            "select 1 from user where name = ? limit 0, 1"
        );
        assert_eq!(sql.exists_probe(""), "select 1 from user limit 0, 1");
    }

    #[test]
    fn test_page_statement_shapes() {
        let sql = user_templates();
        assert_eq!(
            sql.select_page("where age < ?", "order by id desc"),
            "select * from user where age < ? order by id desc limit ?, ?"
        );
        assert_eq!(
            sql.select_page("", "order by id desc"),
            "select * from user order by id desc limit ?, ?"
        );
        assert_eq!(
            sql.select_page("where age < ?", ""),
            "select * from user where age < ? limit ?, ?"
        );
        assert_eq!(sql.select_page("", ""), "select * from user limit ?, ?");
    }

    #[test]
    fn test_batch_insert_statement() {
        let sql = user_templates();
        assert_eq!(sql.batch_insert(1), "insert into user (name, age) values (?, ?)");
        assert_eq!(
            sql.batch_insert(3),
            "insert into user (name, age) values (?, ?), (?, ?), (?, ?)"
        );
    }

    #[test]
    fn test_single_column_insert() {
        let table = ValidatedTableName::new("audit_log").unwrap();
        let sql = SqlTemplates::new(&table, &["message"]);
        assert_eq!(sql.insert(), "insert into audit_log (message) values (?)");
        assert_eq!(
            sql.batch_insert(2),
            "insert into audit_log (message) values (?), (?)"
        );
    }
}
