use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::data::post_store::{NewPostRow, PostRow, PostStore};
use crate::domain::error::DomainError;

#[derive(Debug, Clone)]
pub(crate) struct SqlitePostStore {
    pool: SqlitePool,
}

impl SqlitePostStore {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for SqlitePostStore {
    async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                content TEXT NOT NULL,
                time INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|err| map_db_error("ensure schema", err))?;

        Ok(())
    }

    async fn insert(&self, row: NewPostRow) -> Result<i64, DomainError> {
        // an uncommitted transaction is rolled back when dropped
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|err| map_db_error("tx begin", err))?;

        let result = sqlx::query(
            r#"
            INSERT INTO posts (name, content, time)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&row.name)
        .bind(&row.content)
        .bind(row.time)
        .execute(&mut *tx)
        .await
        .map_err(|err| map_db_error("insert post", err))?;

        tx.commit()
            .await
            .map_err(|err| map_db_error("tx commit", err))?;

        let id = result.last_insert_rowid();
        debug!(post_id = id, "post row inserted");
        Ok(id)
    }

    async fn query_all_ordered_by_time_desc(&self) -> Result<Vec<PostRow>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, name, content, time
            FROM posts
            ORDER BY time DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| map_db_error("list posts", err))?;

        Ok(rows)
    }
}

fn map_db_error(op: &str, err: sqlx::Error) -> DomainError {
    DomainError::Storage(format!("{op}: {err}"))
}

#[cfg(test)]
mod tests {
    use sqlx::SqlitePool;

    use super::SqlitePostStore;
    use crate::data::post_store::{NewPostRow, PostStore};
    use crate::domain::error::DomainError;
    use crate::infrastructure::database::create_memory_pool;

    async fn store() -> (SqlitePostStore, SqlitePool) {
        let pool = create_memory_pool().await.expect("memory pool");
        let store = SqlitePostStore::new(pool.clone());
        store.ensure_schema().await.expect("schema");
        (store, pool)
    }

    fn row(name: &str, time: i64) -> NewPostRow {
        NewPostRow {
            name: name.to_string(),
            content: format!("{name} says hi"),
            time,
        }
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let (store, pool) = store().await;
        store.insert(row("first", 10)).await.expect("insert");

        store.ensure_schema().await.expect("second call must succeed");
        store.ensure_schema().await.expect("third call must succeed");

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'posts'",
        )
        .fetch_one(&pool)
        .await
        .expect("introspect");
        assert_eq!(tables, 1);

        let rows = store.query_all_ordered_by_time_desc().await.expect("list");
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let (store, _pool) = store().await;

        let first = store.insert(row("a", 1)).await.expect("insert a");
        let second = store.insert(row("b", 1)).await.expect("insert b");
        assert!(second > first);
    }

    #[tokio::test]
    async fn query_orders_by_time_desc() {
        let (store, _pool) = store().await;
        store.insert(row("t1", 100)).await.expect("insert");
        store.insert(row("t3", 300)).await.expect("insert");
        store.insert(row("t2", 200)).await.expect("insert");

        let rows = store.query_all_ordered_by_time_desc().await.expect("list");
        let times: Vec<i64> = rows.iter().map(|r| r.time).collect();
        assert_eq!(times, vec![300, 200, 100]);
        assert_eq!(rows[0].name, "t3");
        assert_eq!(rows[0].content, "t3 says hi");
    }

    #[tokio::test]
    async fn equal_timestamps_fall_back_to_newest_id() {
        let (store, _pool) = store().await;
        let older = store.insert(row("older", 50)).await.expect("insert");
        let newer = store.insert(row("newer", 50)).await.expect("insert");

        let rows = store.query_all_ordered_by_time_desc().await.expect("list");
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![newer, older]);
    }

    #[tokio::test]
    async fn insert_failing_after_write_rolls_back() {
        let (store, pool) = store().await;
        // RAISE(FAIL) keeps the already inserted row inside the open transaction
        sqlx::query(
            "CREATE TRIGGER fail_after AFTER INSERT ON posts BEGIN SELECT RAISE(FAIL, 'boom'); END",
        )
        .execute(&pool)
        .await
        .expect("create trigger");

        let err = store
            .insert(row("lost", 1))
            .await
            .expect_err("insert must fail when the trigger fires");
        assert!(matches!(err, DomainError::Storage(_)));

        sqlx::query("DROP TRIGGER fail_after")
            .execute(&pool)
            .await
            .expect("drop trigger");

        let rows = store.query_all_ordered_by_time_desc().await.expect("list");
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn insert_without_table_fails() {
        let (store, pool) = store().await;
        sqlx::query("DROP TABLE posts")
            .execute(&pool)
            .await
            .expect("drop table");

        store
            .insert(row("lost", 1))
            .await
            .expect_err("insert without table must fail");

        store.ensure_schema().await.expect("recreate schema");
        let rows = store.query_all_ordered_by_time_desc().await.expect("list");
        assert!(rows.is_empty());
    }
}
