//! Blog Data Models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Blog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    /// Owning user; the only account allowed to delete the blog
    #[sqlx(rename = "user_id")]
    pub user: Uuid,
}

/// User account, as seen by this service
///
/// Accounts are created elsewhere; this service only reads them and appends
/// to `blogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub blogs: Vec<Uuid>,
}

/// Owner projection attached to listed blogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerInfo {
    pub username: String,
    pub name: String,
}

/// Blog with its owner expanded, as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogWithOwner {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
    /// `None` when the owning account no longer exists
    pub user: Option<OwnerInfo>,
}

impl BlogWithOwner {
    pub fn new(blog: Blog, owner: Option<OwnerInfo>) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user: owner,
        }
    }
}

/// Validated fields of a blog about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

/// Create blog request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title is required")
    )]
    pub title: Option<String>,

    pub author: Option<String>,

    #[validate(
        required(message = "url is required"),
        length(min = 1, message = "url is required")
    )]
    pub url: Option<String>,

    #[validate(range(min = 0, message = "likes must not be negative"))]
    pub likes: Option<i64>,
}

/// Update blog request
///
/// Only `likes` is applied; any other field in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    #[validate(range(min = 0, message = "likes must not be negative"))]
    pub likes: Option<i64>,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}
