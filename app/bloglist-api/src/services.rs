//! Blog Services

use crate::models::*;
use crate::store::{Store, StoreError};
use bloglist_auth::AuthError;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Service error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("blog does not belong to logged in user")]
    NotOwner,
}

/// Blog service
pub struct BlogService {
    store: Arc<dyn Store>,
}

impl BlogService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// List every blog with its owner's username and name
    pub async fn list(&self) -> Result<Vec<BlogWithOwner>, ServiceError> {
        Ok(self.store.list_blogs_with_owners().await?)
    }

    /// Create a blog owned by the user the token was issued to
    pub async fn create(&self, user_id: Uuid, req: CreateBlogRequest) -> Result<Blog, ServiceError> {
        let user = self.resolve_user(user_id).await?;

        req.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let (Some(title), Some(url)) = (req.title, req.url) else {
            return Err(ServiceError::Validation("title and url are required".into()));
        };

        let new_blog = NewBlog {
            title,
            author: req.author,
            url,
            likes: req.likes.unwrap_or(0),
        };

        let blog = self.store.create_blog(user.id, new_blog).await?;

        tracing::info!(blog_id = %blog.id, user_id = %user.id, "Blog created");
        Ok(blog)
    }

    /// Delete a blog, provided `user_id` owns it
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), ServiceError> {
        let user = self.resolve_user(user_id).await?;
        let blog = self.get_by_id(id).await?;

        if blog.user != user.id {
            tracing::info!(blog_id = %id, user_id = %user.id, "Refusing to delete blog of another user");
            return Err(ServiceError::NotOwner);
        }

        if !self.store.delete_blog(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(blog_id = %id, "Blog deleted");
        Ok(())
    }

    /// Apply the `likes` field of `req`; every other field is left untouched
    pub async fn update(&self, id: Uuid, req: UpdateBlogRequest) -> Result<Blog, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        match req.likes {
            Some(likes) => self
                .store
                .set_likes(id, likes)
                .await?
                .ok_or_else(|| not_found(id)),
            None => self.get_by_id(id).await,
        }
    }

    /// Add one like
    pub async fn increment_likes(&self, id: Uuid) -> Result<Blog, ServiceError> {
        self.store
            .increment_likes(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Get a blog by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Blog, ServiceError> {
        self.store
            .find_blog(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// A token whose subject has no account is treated like an invalid token
    async fn resolve_user(&self, user_id: Uuid) -> Result<User, ServiceError> {
        self.store.find_user(user_id).await?.ok_or_else(|| {
            tracing::debug!(user_id = %user_id, "Token subject does not resolve to a user");
            ServiceError::Auth(AuthError::InvalidToken)
        })
    }
}

fn not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("Blog not found: {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    async fn setup() -> (Arc<MemoryStore>, BlogService, User) {
        let store = Arc::new(MemoryStore::new());
        let user = store.insert_user("mluukkai", "Matti Luukkainen").await;
        let service = BlogService::new(store.clone());
        (store, service, user)
    }

    fn request(title: &str, url: &str) -> CreateBlogRequest {
        CreateBlogRequest {
            title: Some(title.to_string()),
            author: Some("Edsger W. Dijkstra".to_string()),
            url: Some(url.to_string()),
            likes: None,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_likes_to_zero() {
        let (_, service, user) = setup().await;

        let blog = service
            .create(user.id, request("Canonical string reduction", "http://example.com"))
            .await
            .unwrap();

        assert_eq!(blog.likes, 0);
        assert_eq!(blog.user, user.id);
    }

    #[tokio::test]
    async fn test_create_keeps_supplied_likes() {
        let (_, service, user) = setup().await;
        let mut req = request("First class tests", "http://example.com");
        req.likes = Some(10);

        let blog = service.create(user.id, req).await.unwrap();

        assert_eq!(blog.likes, 10);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields() {
        let (store, service, user) = setup().await;

        for req in [
            request("", "http://example.com"),
            request("Title", ""),
            CreateBlogRequest {
                url: Some("http://example.com".into()),
                ..Default::default()
            },
            CreateBlogRequest {
                title: Some("Title".into()),
                likes: Some(3),
                ..Default::default()
            },
        ] {
            let result = service.create(user.id, req).await;
            assert!(matches!(result, Err(ServiceError::Validation(_))));
        }

        assert!(store.list_blogs_with_owners().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_for_unknown_user_is_unauthorized() {
        let (_, service, _) = setup().await;

        let result = service
            .create(Uuid::new_v4(), request("Title", "http://example.com"))
            .await;

        assert!(matches!(result, Err(ServiceError::Auth(AuthError::InvalidToken))));
    }

    #[tokio::test]
    async fn test_delete_requires_owner() {
        let (store, service, owner) = setup().await;
        let other = store.insert_user("hellas", "Arto Hellas").await;
        let blog = service
            .create(owner.id, request("Type wars", "http://example.com"))
            .await
            .unwrap();

        let result = service.delete(blog.id, other.id).await;
        assert!(matches!(result, Err(ServiceError::NotOwner)));
        assert!(store.find_blog(blog.id).await.unwrap().is_some());

        service.delete(blog.id, owner.id).await.unwrap();
        assert!(store.find_blog(blog.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_blog_is_not_found() {
        let (_, service, user) = setup().await;

        let result = service.delete(Uuid::new_v4(), user.id).await;

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_only_touches_likes() {
        let (_, service, user) = setup().await;
        let blog = service
            .create(user.id, request("TDD harms architecture", "http://example.com"))
            .await
            .unwrap();

        let updated = service
            .update(blog.id, UpdateBlogRequest { likes: Some(10) })
            .await
            .unwrap();
        assert_eq!(updated.likes, 10);
        assert_eq!(updated.title, blog.title);

        let unchanged = service
            .update(blog.id, UpdateBlogRequest { likes: None })
            .await
            .unwrap();
        assert_eq!(unchanged.likes, 10);

        let reset = service
            .update(blog.id, UpdateBlogRequest { likes: Some(0) })
            .await
            .unwrap();
        assert_eq!(reset.likes, 0);
    }

    #[tokio::test]
    async fn test_update_missing_blog_is_not_found() {
        let (_, service, _) = setup().await;

        let result = service
            .update(Uuid::new_v4(), UpdateBlogRequest { likes: Some(1) })
            .await;

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_increment_likes() {
        let (_, service, user) = setup().await;
        let mut req = request("React patterns", "https://reactpatterns.com/");
        req.likes = Some(5);
        let blog = service.create(user.id, req).await.unwrap();

        let liked = service.increment_likes(blog.id).await.unwrap();

        assert_eq!(liked.likes, 6);
        assert_eq!(service.get_by_id(blog.id).await.unwrap().likes, 6);
        assert!(matches!(
            service.increment_likes(Uuid::new_v4()).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
