use serde_json::Value;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use tracing::warn;

/// Best-effort document mirror. Every appended record is also inserted here
/// as a raw JSON document; nothing ever reads it back.
#[derive(Clone)]
pub struct Mirror {
    pool: SqlitePool,
}

impl Mirror {
    /// The pool is lazy so an unreachable mirror never blocks startup.
    pub fn connect_lazy(url: &str) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(16)
            .connect_lazy(url)?;
        Ok(Self { pool })
    }

    pub async fn ensure_schema(&self) {
        let result = sqlx::query(
            "CREATE TABLE IF NOT EXISTS documents (collection TEXT NOT NULL, id TEXT NOT NULL, document TEXT NOT NULL)",
        )
        .execute(&self.pool)
        .await;

        if let Err(e) = result {
            warn!("mirror schema setup failed: {e}");
        }
    }

    pub async fn insert(
        &self,
        collection: &str,
        id: &str,
        document: &Value,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO documents (collection,id,document) VALUES (?,?,?)")
            .bind(collection)
            .bind(id)
            .bind(document.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) async fn count(&self, collection: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = ?")
            .bind(collection)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}
