use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::models::news::NewsItem;

/// Record store for news rows, backed by a SQLite file opened once at
/// startup and shared for the process lifetime.
#[derive(Clone)]
pub struct NewsStore {
    pool: SqlitePool,
}

impl NewsStore {
    /// Opens the store file, creating it and the `news` table if absent.
    pub async fn init(db_path: &Path) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS news (id INTEGER PRIMARY KEY, title TEXT, content TEXT, image TEXT, date_posted TEXT)",
        )
        .execute(&pool)
        .await?;

        info!("Using SQLite database at {:?}", db_path);
        Ok(NewsStore { pool })
    }

    pub async fn list_all(&self) -> Result<Vec<NewsItem>, sqlx::Error> {
        sqlx::query_as::<_, NewsItem>(
            "SELECT id, title, content, image, date_posted FROM news",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// A missing row is `None`, not an error.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<NewsItem>, sqlx::Error> {
        sqlx::query_as::<_, NewsItem>(
            "SELECT id, title, content, image, date_posted FROM news WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn insert(
        &self,
        title: &str,
        content: &str,
        image: &str,
        date_posted: &str,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO news (title, content, image, date_posted) VALUES (?, ?, ?, ?)",
        )
        .bind(title)
        .bind(content)
        .bind(image)
        .bind(date_posted)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}
