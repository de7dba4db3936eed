//! Bloglist API
//!
//! HTTP API for blogs owned by user accounts:
//! - `GET    /api/blogs`          list blogs with their owners
//! - `POST   /api/blogs`          create a blog (bearer token)
//! - `DELETE /api/blogs/:id`      delete one of your blogs (bearer token)
//! - `PUT    /api/blogs/:id`      set likes (bearer token)
//! - `PUT    /api/blogs/like/:id` add a like (bearer token)

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod store;

use axum::{
    extract::FromRef,
    middleware as axum_middleware,
    routing::{get, put},
    Router,
};
use bloglist_auth::AuthService;
use std::sync::Arc;
use store::Store;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::AppConfig;
pub use services::{BlogService, ServiceError};

/// Shared request state
#[derive(Clone, FromRef)]
pub struct AppState {
    pub blogs: Arc<BlogService>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, auth: Arc<AuthService>) -> Self {
        Self {
            blogs: Arc::new(BlogService::new(store)),
            auth,
        }
    }
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let blogs = Router::new()
        .route(
            "/",
            get(handlers::blogs::list_blogs).post(handlers::blogs::create_blog),
        )
        .route(
            "/:id",
            put(handlers::blogs::update_blog).delete(handlers::blogs::delete_blog),
        )
        .route("/like/:id", put(handlers::blogs::like_blog));

    Router::new()
        .nest("/api/blogs", blogs)
        .fallback(handlers::unknown_endpoint)
        .layer(axum_middleware::from_fn(bloglist_auth::middleware::extract_token))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
