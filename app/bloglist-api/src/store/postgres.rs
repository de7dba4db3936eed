//! PostgreSQL store

use super::{Store, StoreError};
use crate::models::{Blog, BlogWithOwner, NewBlog, OwnerInfo, User};

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use uuid::Uuid;

const BLOG_COLUMNS: &str = "id, title, author, url, likes, user_id";

/// SQLSTATE raised when `likes + 1` leaves the BIGINT range
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(FromRow)]
struct BlogOwnerRow {
    #[sqlx(flatten)]
    blog: Blog,
    owner_username: Option<String>,
    owner_name: Option<String>,
}

impl From<BlogOwnerRow> for BlogWithOwner {
    fn from(row: BlogOwnerRow) -> Self {
        let owner = match (row.owner_username, row.owner_name) {
            (Some(username), Some(name)) => Some(OwnerInfo { username, name }),
            _ => None,
        };
        BlogWithOwner::new(row.blog, owner)
    }
}

/// Store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Connect to `database_url` and make sure the schema exists
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        let store = Self::new(db);
        store.run_migrations().await?;
        Ok(store)
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<(), StoreError> {
        tracing::info!("Running bloglist database migrations");

        // Accounts are owned by another service; this only guarantees the
        // columns the blog handlers read and write.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                username VARCHAR(255) NOT NULL UNIQUE,
                name VARCHAR(255) NOT NULL,
                blogs UUID[] NOT NULL DEFAULT '{}'
            );
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS blogs (
                seq BIGSERIAL UNIQUE,
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                title TEXT NOT NULL CHECK (title <> ''),
                author TEXT,
                url TEXT NOT NULL CHECK (url <> ''),
                likes BIGINT NOT NULL DEFAULT 0 CHECK (likes >= 0),
                user_id UUID NOT NULL
            );
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_blogs_user ON blogs(user_id);")
            .execute(&self.db)
            .await?;

        tracing::info!("Bloglist migrations completed successfully");
        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_blogs_with_owners(&self) -> Result<Vec<BlogWithOwner>, StoreError> {
        let rows: Vec<BlogOwnerRow> = sqlx::query_as(
            r#"SELECT b.id, b.title, b.author, b.url, b.likes, b.user_id,
                      u.username AS owner_username, u.name AS owner_name
               FROM blogs b
               LEFT JOIN users u ON u.id = b.user_id
               ORDER BY b.seq"#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(BlogWithOwner::from).collect())
    }

    async fn find_blog(&self, id: Uuid) -> Result<Option<Blog>, StoreError> {
        let blog = sqlx::query_as(&format!("SELECT {BLOG_COLUMNS} FROM blogs WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.db)
            .await?;
        Ok(blog)
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as("SELECT id, username, name, blogs FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;
        Ok(user)
    }

    async fn create_blog(&self, user_id: Uuid, blog: NewBlog) -> Result<Blog, StoreError> {
        let mut tx = self.db.begin().await?;

        let blog: Blog = sqlx::query_as(&format!(
            "INSERT INTO blogs (title, author, url, likes, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {BLOG_COLUMNS}"
        ))
        .bind(&blog.title)
        .bind(&blog.author)
        .bind(&blog.url)
        .bind(blog.likes)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        let updated = sqlx::query("UPDATE users SET blogs = array_append(blogs, $1) WHERE id = $2")
            .bind(blog.id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(StoreError::UserNotFound(user_id));
        }

        tx.commit().await?;
        Ok(blog)
    }

    async fn delete_blog(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn set_likes(&self, id: Uuid, likes: i64) -> Result<Option<Blog>, StoreError> {
        let blog = sqlx::query_as(&format!(
            "UPDATE blogs SET likes = $2 WHERE id = $1 RETURNING {BLOG_COLUMNS}"
        ))
        .bind(id)
        .bind(likes)
        .fetch_optional(&self.db)
        .await?;
        Ok(blog)
    }

    async fn increment_likes(&self, id: Uuid) -> Result<Option<Blog>, StoreError> {
        sqlx::query_as(&format!(
            "UPDATE blogs SET likes = likes + 1 WHERE id = $1 RETURNING {BLOG_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            let overflowed = matches!(
                &err,
                sqlx::Error::Database(db_err)
                    if db_err.code().as_deref() == Some(NUMERIC_VALUE_OUT_OF_RANGE)
            );
            if overflowed {
                StoreError::LikesOverflow(id)
            } else {
                StoreError::Database(err)
            }
        })
    }
}
