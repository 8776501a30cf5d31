//! `SQLite` implementation of [`BlogRepository`].
//!
//! Tags live in a nullable comma-delimited column and timestamps are stored
//! as fixed-width RFC 3339 text, so `ORDER BY updated_at` sorts correctly.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use inkwell_app::ports::BlogRepository;
use inkwell_domain::blog::{Blog, BlogStatus, NewBlog};
use inkwell_domain::error::InkwellError;
use inkwell_domain::id::BlogId;
use inkwell_domain::tags::Tags;
use inkwell_domain::time::{self, Timestamp};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Blog);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Blog> {
        value.map(|w| w.0)
    }
}

fn parse_timestamp(raw: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let content: String = row.try_get("content")?;
        let tags: Option<String> = row.try_get("tags")?;
        let status: String = row.try_get("status")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let status: BlogStatus = status
            .parse()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Blog {
            id: BlogId::new(id),
            title,
            content,
            tags: Tags::from_column(tags.as_deref()),
            status,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO blogs (title, content, tags, status, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?)
    RETURNING *
";

const SELECT_BY_ID: &str = "SELECT * FROM blogs WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM blogs ORDER BY updated_at DESC, id DESC";

const UPDATE: &str = r"
    UPDATE blogs
    SET title = ?, content = ?, tags = ?, status = ?, updated_at = ?
    WHERE id = ?
    RETURNING *
";

const DELETE_BY_ID: &str = "DELETE FROM blogs WHERE id = ?";

/// `SQLite`-backed blog repository.
pub struct SqliteBlogRepository {
    pool: SqlitePool,
}

impl SqliteBlogRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl BlogRepository for SqliteBlogRepository {
    async fn create(&self, blog: NewBlog) -> Result<Blog, InkwellError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let row: Wrapper = sqlx::query_as(INSERT)
            .bind(&blog.title)
            .bind(&blog.content)
            .bind(blog.tags.to_column())
            .bind(blog.status.as_str())
            .bind(time::to_sortable(blog.created_at))
            .bind(time::to_sortable(blog.updated_at))
            .fetch_one(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        tx.commit().await.map_err(StorageError::from)?;

        Ok(row.0)
    }

    async fn get_by_id(&self, id: BlogId) -> Result<Option<Blog>, InkwellError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Blog>, InkwellError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, blog: Blog) -> Result<Option<Blog>, InkwellError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let row: Option<Wrapper> = sqlx::query_as(UPDATE)
            .bind(&blog.title)
            .bind(&blog.content)
            .bind(blog.tags.to_column())
            .bind(blog.status.as_str())
            .bind(time::to_sortable(blog.updated_at))
            .bind(blog.id.get())
            .fetch_optional(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        tx.commit().await.map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn delete(&self, id: BlogId) -> Result<bool, InkwellError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&mut *tx)
            .await
            .map_err(StorageError::from)?;

        tx.commit().await.map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use chrono::TimeZone;

    async fn setup() -> SqliteBlogRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteBlogRepository::new(db.pool().clone())
    }

    fn at(minute: u32) -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap()
    }

    fn new_blog(title: &str, updated_minute: u32) -> NewBlog {
        NewBlog {
            title: title.to_string(),
            content: "body".to_string(),
            tags: Tags::default(),
            status: BlogStatus::Draft,
            created_at: at(0),
            updated_at: at(updated_minute),
        }
    }

    #[tokio::test]
    async fn should_assign_increasing_ids_on_create() {
        let repo = setup().await;
        let first = repo.create(new_blog("a", 1)).await.unwrap();
        let second = repo.create(new_blog("b", 2)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn should_create_and_retrieve_blog() {
        let repo = setup().await;
        let mut blog = new_blog("Hello", 1);
        blog.tags = Tags::from(vec!["a", "b"]);
        blog.status = BlogStatus::Published;

        let created = repo.create(blog).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Hello");
        assert_eq!(fetched.tags.as_slice(), ["a", "b"]);
        assert_eq!(fetched.status, BlogStatus::Published);
        assert_eq!(fetched.created_at, at(0));
        assert_eq!(fetched.updated_at, at(1));
    }

    #[tokio::test]
    async fn should_store_empty_tags_as_null() {
        let repo = setup().await;
        let created = repo.create(new_blog("t", 1)).await.unwrap();

        let (tags,): (Option<String>,) = sqlx::query_as("SELECT tags FROM blogs WHERE id = ?")
            .bind(created.id.get())
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert!(tags.is_none());
        assert!(created.tags.is_empty());
    }

    #[tokio::test]
    async fn should_return_none_when_blog_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(BlogId::new(404)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_most_recently_updated_first() {
        let repo = setup().await;
        repo.create(new_blog("middle", 5)).await.unwrap();
        repo.create(new_blog("oldest", 1)).await.unwrap();
        repo.create(new_blog("newest", 9)).await.unwrap();

        let titles: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|blog| blog.title)
            .collect();
        assert_eq!(titles, ["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn should_update_blog_and_keep_created_at() {
        let repo = setup().await;
        let mut blog = repo.create(new_blog("before", 1)).await.unwrap();

        blog.title = "after".to_string();
        blog.status = BlogStatus::Published;
        blog.tags = Tags::from(vec!["x"]);
        blog.updated_at = at(30);
        blog.created_at = at(59);
        let updated = repo.update(blog).await.unwrap().unwrap();

        assert_eq!(updated.title, "after");
        assert_eq!(updated.status, BlogStatus::Published);
        assert_eq!(updated.tags.as_slice(), ["x"]);
        assert_eq!(updated.updated_at, at(30));
        assert_eq!(updated.created_at, at(0));
    }

    #[tokio::test]
    async fn should_return_none_when_updating_missing_row() {
        let repo = setup().await;
        let ghost = new_blog("ghost", 1).with_id(BlogId::new(77));
        assert!(repo.update(ghost).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_delete_blog_once() {
        let repo = setup().await;
        let created = repo.create(new_blog("bye", 1)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_surface_storage_error_when_table_is_missing() {
        let repo = setup().await;
        sqlx::query("DROP TABLE blogs")
            .execute(&repo.pool)
            .await
            .unwrap();

        let result = repo.create(new_blog("t", 1)).await;
        let Err(InkwellError::Storage(err)) = result else {
            panic!("expected a storage error");
        };
        assert!(err.to_string().contains("blogs"));
    }
}
