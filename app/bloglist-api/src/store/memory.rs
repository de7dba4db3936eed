//! In-memory store, used when no database is configured and in tests

use super::{Store, StoreError};
use crate::models::{Blog, BlogWithOwner, NewBlog, OwnerInfo, User};

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Data {
    users: HashMap<Uuid, User>,
    blogs: Vec<Blog>,
}

/// Store backed by process memory
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<Data>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user account with an empty blog list
    pub async fn insert_user(&self, username: &str, name: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            name: name.to_string(),
            blogs: Vec::new(),
        };

        self.data
            .write()
            .await
            .users
            .insert(user.id, user.clone());

        user
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_blogs_with_owners(&self) -> Result<Vec<BlogWithOwner>, StoreError> {
        let data = self.data.read().await;

        let blogs = data
            .blogs
            .iter()
            .map(|blog| {
                let owner = data.users.get(&blog.user).map(|user| OwnerInfo {
                    username: user.username.clone(),
                    name: user.name.clone(),
                });
                BlogWithOwner::new(blog.clone(), owner)
            })
            .collect();

        Ok(blogs)
    }

    async fn find_blog(&self, id: Uuid) -> Result<Option<Blog>, StoreError> {
        let data = self.data.read().await;
        Ok(data.blogs.iter().find(|blog| blog.id == id).cloned())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.data.read().await.users.get(&id).cloned())
    }

    async fn create_blog(&self, user_id: Uuid, blog: NewBlog) -> Result<Blog, StoreError> {
        let mut data = self.data.write().await;

        let user = data
            .users
            .get_mut(&user_id)
            .ok_or(StoreError::UserNotFound(user_id))?;

        let blog = Blog {
            id: Uuid::new_v4(),
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user: user_id,
        };

        user.blogs.push(blog.id);
        data.blogs.push(blog.clone());

        Ok(blog)
    }

    async fn delete_blog(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut data = self.data.write().await;
        let before = data.blogs.len();
        data.blogs.retain(|blog| blog.id != id);
        Ok(data.blogs.len() != before)
    }

    async fn set_likes(&self, id: Uuid, likes: i64) -> Result<Option<Blog>, StoreError> {
        let mut data = self.data.write().await;
        Ok(data.blogs.iter_mut().find(|blog| blog.id == id).map(|blog| {
            blog.likes = likes;
            blog.clone()
        }))
    }

    async fn increment_likes(&self, id: Uuid) -> Result<Option<Blog>, StoreError> {
        let mut data = self.data.write().await;
        let Some(blog) = data.blogs.iter_mut().find(|blog| blog.id == id) else {
            return Ok(None);
        };

        blog.likes = blog
            .likes
            .checked_add(1)
            .ok_or(StoreError::LikesOverflow(id))?;
        Ok(Some(blog.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_blog(title: &str) -> NewBlog {
        NewBlog {
            title: title.to_string(),
            author: None,
            url: format!("https://example.com/{title}"),
            likes: 0,
        }
    }

    #[tokio::test]
    async fn test_create_blog_appends_to_owner() {
        let store = MemoryStore::new();
        let user = store.insert_user("root", "Superuser").await;

        let first = store.create_blog(user.id, new_blog("first")).await.unwrap();
        let second = store.create_blog(user.id, new_blog("second")).await.unwrap();

        let user = store.find_user(user.id).await.unwrap().unwrap();
        assert_eq!(user.blogs, vec![first.id, second.id]);
        assert_eq!(first.user, user.id);
    }

    #[tokio::test]
    async fn test_create_blog_for_unknown_user_writes_nothing() {
        let store = MemoryStore::new();

        let result = store.create_blog(Uuid::new_v4(), new_blog("orphan")).await;

        assert!(matches!(result, Err(StoreError::UserNotFound(_))));
        assert!(store.list_blogs_with_owners().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_projects_owner() {
        let store = MemoryStore::new();
        let user = store.insert_user("hellas", "Arto Hellas").await;
        store.create_blog(user.id, new_blog("first")).await.unwrap();

        let blogs = store.list_blogs_with_owners().await.unwrap();

        assert_eq!(blogs.len(), 1);
        assert_eq!(
            blogs[0].user,
            Some(OwnerInfo {
                username: "hellas".into(),
                name: "Arto Hellas".into()
            })
        );
    }

    #[tokio::test]
    async fn test_delete_blog() {
        let store = MemoryStore::new();
        let user = store.insert_user("root", "Superuser").await;
        let blog = store.create_blog(user.id, new_blog("first")).await.unwrap();

        assert!(store.delete_blog(blog.id).await.unwrap());
        assert!(!store.delete_blog(blog.id).await.unwrap());
        assert_eq!(store.find_blog(blog.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let store = Arc::new(MemoryStore::new());
        let user = store.insert_user("root", "Superuser").await;
        let id = store.create_blog(user.id, new_blog("popular")).await.unwrap().id;

        let tasks: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.increment_likes(id).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let blog = store.find_blog(id).await.unwrap().unwrap();
        assert_eq!(blog.likes, 50);
    }

    #[tokio::test]
    async fn test_increment_at_maximum_likes_fails() {
        let store = MemoryStore::new();
        let user = store.insert_user("root", "Superuser").await;
        let mut blog = new_blog("saturated");
        blog.likes = i64::MAX;
        let id = store.create_blog(user.id, blog).await.unwrap().id;

        let result = store.increment_likes(id).await;

        assert!(matches!(result, Err(StoreError::LikesOverflow(_))));
        assert_eq!(store.find_blog(id).await.unwrap().unwrap().likes, i64::MAX);
    }

    #[tokio::test]
    async fn test_likes_on_missing_blog() {
        let store = MemoryStore::new();
        assert_eq!(store.set_likes(Uuid::new_v4(), 3).await.unwrap(), None);
        assert_eq!(store.increment_likes(Uuid::new_v4()).await.unwrap(), None);
    }
}
