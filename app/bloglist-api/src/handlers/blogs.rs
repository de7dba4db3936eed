//! Blog Handlers

use crate::extractors::{ApiJson, ApiPath};
use crate::models::*;
use crate::services::{BlogService, ServiceError};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use bloglist_auth::AuthUser;
use std::sync::Arc;
use uuid::Uuid;

/// GET /api/blogs - List all blogs with their owners
pub async fn list_blogs(
    State(blogs): State<Arc<BlogService>>,
) -> Result<Json<Vec<BlogWithOwner>>, ServiceError> {
    Ok(Json(blogs.list().await?))
}

/// POST /api/blogs - Create a blog owned by the caller
pub async fn create_blog(
    State(blogs): State<Arc<BlogService>>,
    user: AuthUser,
    ApiJson(req): ApiJson<CreateBlogRequest>,
) -> Result<Json<Blog>, ServiceError> {
    let blog = blogs.create(user.id, req).await?;
    Ok(Json(blog))
}

/// DELETE /api/blogs/:id - Delete one of the caller's blogs
pub async fn delete_blog(
    State(blogs): State<Arc<BlogService>>,
    user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    blogs.delete(id, user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/blogs/:id - Set a blog's likes
///
/// Any authenticated caller may do this; ownership is not checked.
pub async fn update_blog(
    State(blogs): State<Arc<BlogService>>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateBlogRequest>,
) -> Result<Json<Blog>, ServiceError> {
    Ok(Json(blogs.update(id, req).await?))
}

/// PUT /api/blogs/like/:id - Add one like
pub async fn like_blog(
    State(blogs): State<Arc<BlogService>>,
    _user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Blog>, ServiceError> {
    Ok(Json(blogs.increment_likes(id).await?))
}
