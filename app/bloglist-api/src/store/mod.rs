//! Blog Storage
//!
//! The [`Store`] trait is the handle every request goes through to reach
//! persisted users and blogs. It is built once at startup and shared behind
//! an `Arc<dyn Store>`.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::models::{Blog, BlogWithOwner, NewBlog, User};
use async_trait::async_trait;
use uuid::Uuid;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Likes of blog {0} cannot be increased further")]
    LikesOverflow(Uuid),
}

/// Persistence operations used by the blog service
#[async_trait]
pub trait Store: Send + Sync {
    /// All blogs in insertion order, each with its owner projected
    async fn list_blogs_with_owners(&self) -> Result<Vec<BlogWithOwner>, StoreError>;

    async fn find_blog(&self, id: Uuid) -> Result<Option<Blog>, StoreError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Insert a blog owned by `user_id` and append its id to the owner's
    /// blog list, as a single atomic step
    async fn create_blog(&self, user_id: Uuid, blog: NewBlog) -> Result<Blog, StoreError>;

    /// Returns `false` when no blog had that id
    async fn delete_blog(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn set_likes(&self, id: Uuid, likes: i64) -> Result<Option<Blog>, StoreError>;

    /// Add one like without a read-modify-write round trip
    ///
    /// Fails with [`StoreError::LikesOverflow`] instead of wrapping.
    async fn increment_likes(&self, id: Uuid) -> Result<Option<Blog>, StoreError>;
}
